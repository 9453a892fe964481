use serde_json::Value;

use super::{lookup, opt_datetime, opt_int, opt_str, str_or_empty, value_list};
use crate::types::User;

pub(crate) fn user(raw: &Value) -> User {
    User {
        id: str_or_empty(lookup(raw, "id")),
        name: str_or_empty(lookup(raw, "name")),
        email: str_or_empty(lookup(raw, "email")),
        status: opt_str(lookup(raw, "status")),
        email_verified_at: opt_str(lookup(raw, "email_verified_at")),
        roles: value_list(lookup(raw, "roles")),
        permissions: value_list(lookup(raw, "permissions")),
        bookings_count: opt_int(lookup(raw, "bookings_count")),
        checkouts_count: opt_int(lookup(raw, "checkouts_count")),
        deleted_at: opt_str(lookup(raw, "deleted_at")),
        suspended_at: opt_str(lookup(raw, "suspended_at")),
        suspension_reason: opt_str(lookup(raw, "suspension_reason")),
        suspended_by: opt_str(lookup(raw, "suspended_by")),
        personal_data: lookup(raw, "personal_data").cloned(),
        created_at: opt_datetime(lookup(raw, "created_at")),
        updated_at: opt_datetime(lookup(raw, "updated_at")),
    }
}
