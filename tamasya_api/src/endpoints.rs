//! Endpoint paths of the admin backend, relative to the API base URL.

pub const ADMIN_LOGIN: &str = "/admin/login";
pub const ADMIN_LOGOUT: &str = "/admin/logout";

pub const DESTINATIONS: &str = "/destinations";

pub fn destination_detail(uuid: &str) -> String {
    format!("{DESTINATIONS}/{uuid}")
}

// Booking endpoints live under /admin/bookings, not /bookings.
pub const ADMIN_BOOKINGS: &str = "/admin/bookings";
pub const CANCELLATIONS_PENDING: &str = "/admin/bookings/cancellations/pending";

pub fn booking_detail(uuid: &str) -> String {
    format!("{ADMIN_BOOKINGS}/{uuid}")
}

pub fn approve_cancellation(uuid: &str) -> String {
    format!("{ADMIN_BOOKINGS}/{uuid}/cancellation")
}

pub fn force_cancel(uuid: &str) -> String {
    format!("{ADMIN_BOOKINGS}/{uuid}/force-cancel")
}

pub const ADMIN_CHECKOUTS: &str = "/admin/checkouts";

pub fn checkout_detail(order_id: &str) -> String {
    format!("{ADMIN_CHECKOUTS}/{order_id}")
}

pub const ADMIN_USERS: &str = "/admin/users";

pub fn user_detail(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}")
}

pub fn user_status(id: &str) -> String {
    format!("{ADMIN_USERS}/{id}/status")
}
