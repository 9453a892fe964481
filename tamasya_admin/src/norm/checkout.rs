use serde_json::Value;

use super::{
    booking::{booking, related_user},
    int_or_zero, lookup, opt_datetime, opt_str, str_or_empty, value_list,
};
use crate::types::Checkout;

pub(crate) fn checkout(raw: &Value) -> Checkout {
    Checkout {
        uuid: str_or_empty(lookup(raw, "uuid")),
        order_id: str_or_empty(lookup(raw, "order_id")),
        user_id: str_or_empty(lookup(raw, "user_id")),
        payment_status: int_or_zero(lookup(raw, "payment_status")),
        payment_token: opt_str(lookup(raw, "payment_token")),
        payment_url: opt_str(lookup(raw, "payment_url")),
        created_at: opt_datetime(lookup(raw, "created_at")),
        updated_at: opt_datetime(lookup(raw, "updated_at")),
        user: lookup(raw, "user").map(related_user),
        bookings: value_list(lookup(raw, "bookings"))
            .iter()
            .map(booking)
            .collect(),
    }
}
