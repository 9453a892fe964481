//! Booking oversight and cancellation handling.

use serde_json::json;
use tamasya_api::endpoints;
use tamasya_api::types::{ApiResponse, Page};

use crate::error::AdminError;
use crate::mock::BookingFilter;
use crate::norm::{self, page_from_envelope, unwrap_detail};
use crate::types::{Booking, CancellationDecision, CancellationStatus};
use crate::{AdminApi, BookingQuery, Query};

impl AdminApi {
    /// Lists bookings with the admin screen's filter set.
    pub async fn bookings(
        &self,
        query: &BookingQuery,
    ) -> Result<ApiResponse<Page<Booking>>, AdminError> {
        let page = query.common.page;
        let per_page = query.common.per_page;
        match self.client.get_with(endpoints::ADMIN_BOOKINGS, query).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: page_from_envelope(&envelope, page, per_page, norm::booking),
            }),
            Err(err) => self.fall_back(err, |mock| {
                let filter = BookingFilter {
                    search: query.search.clone(),
                    cancellation_status: query
                        .cancellation_status
                        .clone()
                        .or_else(|| query.status.clone()),
                    payment_status: query.payment_status.clone(),
                };
                Ok(ApiResponse {
                    status: 200,
                    message: "Bookings retrieved successfully.".to_string(),
                    data: mock.list_bookings(page, per_page, &filter),
                })
            }),
        }
    }

    /// Fetches a single booking by uuid.
    pub async fn booking(&self, uuid: &str) -> Result<ApiResponse<Booking>, AdminError> {
        match self.client.get(&endpoints::booking_detail(uuid)).await {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::booking(unwrap_detail(&envelope.data, "booking")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                let booking = mock.find_booking(uuid).ok_or(AdminError::NotFound {
                    resource: "booking",
                    id: uuid.to_string(),
                })?;
                Ok(ApiResponse {
                    status: 200,
                    message: "Info.".to_string(),
                    data: booking,
                })
            }),
        }
    }

    /// Lists bookings whose cancellation requests await an admin decision.
    pub async fn pending_cancellations(
        &self,
        page: i64,
        per_page: i64,
    ) -> Result<ApiResponse<Page<Booking>>, AdminError> {
        let query = BookingQuery::default()
            .with_page(page)
            .with_per_page(per_page);
        match self
            .client
            .get_with(endpoints::CANCELLATIONS_PENDING, &query)
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: page_from_envelope(&envelope, page, per_page, norm::booking),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Pending cancellation requests retrieved successfully.".to_string(),
                    data: mock.pending_cancellations(page, per_page),
                })
            }),
        }
    }

    /// Approves or rejects a cancellation request.
    pub async fn set_cancellation_status(
        &self,
        uuid: &str,
        decision: CancellationDecision,
        admin_notes: Option<&str>,
    ) -> Result<ApiResponse<Booking>, AdminError> {
        let payload = json!({
            "cancellation_status": decision,
            "admin_notes": admin_notes,
        });
        match self
            .client
            .patch(&endpoints::approve_cancellation(uuid), &payload)
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::booking(unwrap_detail(&envelope.data, "booking")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                let status = match decision {
                    CancellationDecision::Approved => CancellationStatus::Approved,
                    CancellationDecision::Rejected => CancellationStatus::Rejected,
                };
                Ok(ApiResponse {
                    status: 200,
                    message: format!("Cancellation request {decision} successfully."),
                    data: mock.set_cancellation_status(uuid, status, admin_notes)?,
                })
            }),
        }
    }

    /// Cancels a booking outright, bypassing the request workflow.
    pub async fn force_cancel(
        &self,
        uuid: &str,
        reason: &str,
    ) -> Result<ApiResponse<Booking>, AdminError> {
        let payload = json!({ "reason": reason });
        match self
            .client
            .post(&endpoints::force_cancel(uuid), &payload)
            .await
        {
            Ok(envelope) => Ok(ApiResponse {
                status: envelope.status,
                message: envelope.message.clone(),
                data: norm::booking(unwrap_detail(&envelope.data, "booking")),
            }),
            Err(err) => self.fall_back(err, |mock| {
                Ok(ApiResponse {
                    status: 200,
                    message: "Booking force cancelled successfully.".to_string(),
                    data: mock.force_cancel(uuid, reason)?,
                })
            }),
        }
    }
}
