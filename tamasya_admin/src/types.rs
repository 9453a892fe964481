//! Canonical DTOs for the admin resources.
//!
//! These are request-scoped value objects: built by the normalizers from
//! whatever shape the backend (or the mock store) produced, rendered by the
//! consuming UI, then discarded. Every numeric field arrives as either a
//! number or a numeric string on the wire and is coerced; missing arrays
//! become empty; timestamps that fail to parse become `None`.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Owner account assigned to destinations created without an explicit owner.
pub const DEFAULT_OWNER_UUID: &str = "019a7722-3511-710b-9b3f-e77a2b5100b9";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    pub location: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub categories: Vec<String>,
    pub image_urls: Vec<String>,
    pub owner_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub status: Option<String>,
    pub email_verified_at: Option<String>,
    pub roles: Vec<Value>,
    pub permissions: Vec<Value>,
    pub bookings_count: Option<i64>,
    pub checkouts_count: Option<i64>,
    pub deleted_at: Option<String>,
    pub suspended_at: Option<String>,
    pub suspension_reason: Option<String>,
    pub suspended_by: Option<String>,
    pub personal_data: Option<Value>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Cancellation lifecycle of a booking. Absent means never requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationStatus {
    Pending,
    Approved,
    Rejected,
}

impl std::fmt::Display for CancellationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CancellationStatus::Pending => "pending",
                CancellationStatus::Approved => "approved",
                CancellationStatus::Rejected => "rejected",
            }
        )
    }
}

impl FromStr for CancellationStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(CancellationStatus::Pending),
            "approved" => Ok(CancellationStatus::Approved),
            "rejected" => Ok(CancellationStatus::Rejected),
            _ => Err(()),
        }
    }
}

/// Admin verdict on a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CancellationDecision {
    Approved,
    Rejected,
}

impl std::fmt::Display for CancellationDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CancellationDecision::Approved => "approved",
                CancellationDecision::Rejected => "rejected",
            }
        )
    }
}

/// User summary embedded in bookings and checkouts. The backend sends the id
/// as a number on some endpoints and as a uuid string on others; it is
/// canonicalized to a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Destination summary embedded in bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDestination {
    pub uuid: String,
    pub name: String,
    pub location: String,
}

/// Payment snapshot attached to a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutData {
    pub uuid: Option<String>,
    pub booking_uuid: Option<String>,
    pub payment_status: String,
    pub payment_method: Option<String>,
    pub total_amount: f64,
    pub paid_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub uuid: String,
    pub user_id: i64,
    pub destination_uuid: String,
    pub date: Option<NaiveDate>,
    pub quantity: i64,
    pub brand: Option<String>,
    pub category: Option<String>,
    pub merchant_name: Option<String>,
    pub total_price: f64,
    pub cancellation_status: Option<CancellationStatus>,
    pub cancellation_requested_at: Option<String>,
    pub cancellation_approved_at: Option<String>,
    pub cancellation_rejected_at: Option<String>,
    pub cancellation_reason: Option<String>,
    pub admin_notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user: Option<RelatedUser>,
    pub destination: Option<BookingDestination>,
    pub checkout_data: Option<CheckoutData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkout {
    pub uuid: String,
    pub order_id: String,
    pub user_id: String,
    pub payment_status: i64,
    pub payment_token: Option<String>,
    pub payment_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub user: Option<RelatedUser>,
    pub bookings: Vec<Booking>,
}

/// Payload for creating a destination. An absent or empty `owner_id` is
/// replaced by [`DEFAULT_OWNER_UUID`] before the request goes out.
#[derive(Debug, Clone, Default)]
pub struct DestinationInput {
    pub name: String,
    pub location: String,
    pub description: String,
    pub price: f64,
    pub rating: f64,
    pub categories: Vec<String>,
    pub image_urls: Vec<String>,
    pub owner_id: Option<String>,
}

/// Partial payload for updating a destination. There is deliberately no
/// `owner_id` field: the backend keeps the stored owner on update, and
/// sending one trips its ownership validation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DestinationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// Payload for creating a user (e.g. a partner account).
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// Account state set through the status endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                UserStatus::Active => "active",
                UserStatus::Suspended => "suspended",
            }
        )
    }
}

/// Successful login payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: Option<Value>,
}
