//! Admin session lifecycle.
//!
//! Login has no mock fallback: authenticating against invented credentials
//! would only mask a dead backend. Logout is best-effort in the other
//! direction: the local token is always dropped, even when the backend never
//! hears about it.

use serde_json::json;
use tamasya_api::endpoints;
use tamasya_api::types::ApiResponse;
use tamasya_api::TokenStore;

use crate::error::AdminError;
use crate::norm::{lookup, str_or_empty, unwrap_detail};
use crate::types::LoginData;
use crate::AdminApi;

impl AdminApi {
    /// Authenticates and stores the session token for subsequent requests.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<ApiResponse<LoginData>, AdminError> {
        let payload = json!({ "email": email, "password": password });
        match self.client.post(endpoints::ADMIN_LOGIN, &payload).await {
            Ok(envelope) => {
                let data = unwrap_detail(&envelope.data, "data");
                let token = str_or_empty(lookup(data, "token"));
                if !token.is_empty() {
                    self.tokens.set(token.clone());
                }
                Ok(ApiResponse {
                    status: envelope.status,
                    message: envelope.message.clone(),
                    data: LoginData {
                        token,
                        user: lookup(data, "user").cloned(),
                    },
                })
            }
            Err(err) => self.fail(err),
        }
    }

    /// Ends the session. The local token is dropped unconditionally; a
    /// backend that cannot be told is logged and ignored.
    pub async fn logout(&self) -> Result<ApiResponse<serde_json::Value>, AdminError> {
        let result = self.client.post_empty(endpoints::ADMIN_LOGOUT).await;
        self.tokens.clear();
        match result {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message,
                data: envelope.data,
            }),
            Err(err) => {
                tracing::warn!("logout request failed, session dropped locally: {}", err);
                Ok(ApiResponse {
                    status: 200,
                    message: "Logged out (local)".to_string(),
                    data: json!({ "message": "Logged out locally" }),
                })
            }
        }
    }
}
