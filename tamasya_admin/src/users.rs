//! User management operations.

use serde_json::json;
use tamasya_api::endpoints;
use tamasya_api::types::{ApiResponse, Page};

use crate::error::AdminError;
use crate::norm::{self, page_from_envelope, unwrap_detail};
use crate::types::{NewUser, User, UserStatus};
use crate::{AdminApi, UserQuery};

impl AdminApi {
    /// Lists users with pagination, search, role filter, and sorting.
    pub async fn users(&self, query: &UserQuery) -> Result<ApiResponse<Page<User>>, AdminError> {
        let page = query.common.page;
        let per_page = query.common.per_page;
        match self.client.get_with(endpoints::ADMIN_USERS, query).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: page_from_envelope(&envelope, page, per_page, norm::user),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Users retrieved successfully.".to_string(),
                    data: mock.list_users(
                        page,
                        per_page,
                        query.search.as_deref(),
                        query.role.as_deref(),
                    ),
                })
            }),
        }
    }

    /// Fetches a single user by id.
    pub async fn user(&self, id: &str) -> Result<ApiResponse<User>, AdminError> {
        match self.client.get(&endpoints::user_detail(id)).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::user(unwrap_detail(&envelope.data, "user")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                let user = mock.find_user(id).ok_or(AdminError::NotFound {
                    resource: "user",
                    id: id.to_string(),
                })?;
                Ok(ApiResponse {
                    status: 200,
                    message: "User retrieved successfully.".to_string(),
                    data: user,
                })
            }),
        }
    }

    /// Activates or suspends an account. A suspension may carry a reason.
    pub async fn set_user_status(
        &self,
        id: &str,
        status: UserStatus,
        reason: Option<&str>,
    ) -> Result<ApiResponse<User>, AdminError> {
        let payload = json!({
            "status": status,
            "reason": reason,
        });
        match self
            .client
            .patch(&endpoints::user_status(id), &payload)
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::user(unwrap_detail(&envelope.data, "user")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: format!("User {status} (mock)"),
                    data: mock.set_user_status(id, status)?,
                })
            }),
        }
    }

    /// Creates an account with the given role (e.g. a partner).
    pub async fn create_user(&self, input: &NewUser) -> Result<ApiResponse<User>, AdminError> {
        match self.client.post(endpoints::ADMIN_USERS, input).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::user(unwrap_detail(&envelope.data, "user")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 201,
                    message: "User created successfully.".to_string(),
                    data: mock.create_user(input),
                })
            }),
        }
    }
}
