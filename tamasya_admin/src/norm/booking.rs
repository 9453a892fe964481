use serde_json::Value;

use super::{
    int_or_zero, lookup, num_or_zero, opt_date, opt_datetime, opt_str, str_or_empty,
};
use crate::types::{Booking, BookingDestination, CheckoutData, RelatedUser};

pub(crate) fn related_user(raw: &Value) -> RelatedUser {
    RelatedUser {
        id: str_or_empty(lookup(raw, "id")),
        name: str_or_empty(lookup(raw, "name")),
        email: str_or_empty(lookup(raw, "email")),
        created_at: opt_datetime(lookup(raw, "created_at")),
    }
}

pub(crate) fn booking_destination(raw: &Value) -> BookingDestination {
    BookingDestination {
        uuid: str_or_empty(lookup(raw, "uuid")),
        name: str_or_empty(lookup(raw, "name")),
        location: str_or_empty(lookup(raw, "location")),
    }
}

pub(crate) fn checkout_data(raw: &Value) -> CheckoutData {
    CheckoutData {
        uuid: opt_str(lookup(raw, "uuid")),
        booking_uuid: opt_str(lookup(raw, "booking_uuid")),
        // Arrives as "paid"/"unpaid" on booking endpoints and as a numeric
        // code on checkout endpoints; canonicalized to a string.
        payment_status: str_or_empty(lookup(raw, "payment_status")),
        payment_method: opt_str(lookup(raw, "payment_method")),
        total_amount: num_or_zero(lookup(raw, "total_amount")),
        paid_at: opt_str(lookup(raw, "paid_at")),
    }
}

pub(crate) fn booking(raw: &Value) -> Booking {
    Booking {
        uuid: str_or_empty(lookup(raw, "uuid")),
        user_id: int_or_zero(lookup(raw, "user_id")),
        destination_uuid: str_or_empty(lookup(raw, "destination_uuid")),
        date: opt_date(lookup(raw, "date")),
        quantity: int_or_zero(lookup(raw, "quantity")),
        brand: opt_str(lookup(raw, "brand")),
        category: opt_str(lookup(raw, "category")),
        merchant_name: opt_str(lookup(raw, "merchant_name")),
        total_price: num_or_zero(lookup(raw, "total_price")),
        cancellation_status: lookup(raw, "cancellation_status")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok()),
        cancellation_requested_at: opt_str(lookup(raw, "cancellation_requested_at")),
        cancellation_approved_at: opt_str(lookup(raw, "cancellation_approved_at")),
        cancellation_rejected_at: opt_str(lookup(raw, "cancellation_rejected_at")),
        cancellation_reason: opt_str(lookup(raw, "cancellation_reason")),
        admin_notes: opt_str(lookup(raw, "admin_notes")),
        created_at: opt_datetime(lookup(raw, "created_at")),
        updated_at: opt_datetime(lookup(raw, "updated_at")),
        user: lookup(raw, "user").map(related_user),
        destination: lookup(raw, "destination").map(booking_destination),
        checkout_data: lookup(raw, "checkout_data").map(checkout_data),
    }
}
