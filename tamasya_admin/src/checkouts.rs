//! Checkout review operations.
//!
//! Checkouts are payment records, so there is no seeded mock data for them:
//! when the backend is unreachable the listing falls back to an empty page
//! and the detail view to a stub record, keeping the review screen alive
//! without inventing financial history.

use tamasya_api::endpoints;
use tamasya_api::types::{ApiResponse, Page};

use crate::error::AdminError;
use crate::norm::{self, page_from_envelope, unwrap_detail};
use crate::types::Checkout;
use crate::{AdminApi, CheckoutQuery};

impl AdminApi {
    /// Lists checkouts with the review screen's filter set.
    pub async fn checkouts(
        &self,
        query: &CheckoutQuery,
    ) -> Result<ApiResponse<Page<Checkout>>, AdminError> {
        let page = query.common.page;
        let per_page = query.common.per_page;
        match self.client.get_with(endpoints::ADMIN_CHECKOUTS, query).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: page_from_envelope(&envelope, page, per_page, norm::checkout),
            }),
            Err(err) => self.fall_back(err, |_| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Checkouts retrieved successfully.".to_string(),
                    data: Page {
                        items: Vec::new(),
                        current_page: page,
                        total: 0,
                        per_page,
                        last_page: 0,
                    },
                })
            }),
        }
    }

    /// Fetches a single checkout by its order id.
    pub async fn checkout(&self, order_id: &str) -> Result<ApiResponse<Checkout>, AdminError> {
        match self.client.get(&endpoints::checkout_detail(order_id)).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::checkout(unwrap_detail(&envelope.data, "checkout")),
            }),
            Err(err) => self.fall_back(err, |_| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Info.".to_string(),
                    data: Checkout {
                        uuid: String::new(),
                        order_id: order_id.to_string(),
                        user_id: String::new(),
                        payment_status: 0,
                        payment_token: None,
                        payment_url: None,
                        created_at: None,
                        updated_at: None,
                        user: None,
                        bookings: Vec::new(),
                    },
                })
            }),
        }
    }
}
