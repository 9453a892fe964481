//! In-memory fallback repository, used when the backend is unreachable.
//!
//! An explicit instance with no global state: construct one per process or
//! per test and hand it to [`crate::AdminApi`]. Filtering and pagination
//! mirror the live API exactly (case-insensitive substring search, slice
//! pagination, `last_page = ceil(total / per_page)`), so a consumer cannot
//! tell the two paths apart by shape. Concurrent mutations are serialized by
//! a mutex per collection; this is a development convenience, never a
//! production path.

use std::sync::Mutex;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{json, Value};
use tamasya_api::types::Page;

use crate::error::AdminError;
use crate::types::{
    Booking, BookingDestination, CancellationStatus, CheckoutData, Destination, DestinationInput,
    DestinationPatch, NewUser, RelatedUser, User, UserStatus, DEFAULT_OWNER_UUID,
};

pub struct MockStore {
    destinations: Mutex<Vec<Destination>>,
    users: Mutex<Vec<User>>,
    bookings: Mutex<Vec<Booking>>,
}

/// Booking-list filters the mock store honors, matching the subset the live
/// backend applies to its own mock-era dataset.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub search: Option<String>,
    pub cancellation_status: Option<String>,
    pub payment_status: Option<String>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::with_seed_data()
    }
}

impl MockStore {
    /// Store preloaded with the development dataset.
    pub fn with_seed_data() -> Self {
        Self {
            destinations: Mutex::new(seed_destinations()),
            users: Mutex::new(seed_users()),
            bookings: Mutex::new(seed_bookings()),
        }
    }

    /// Empty store, for tests that want full control over contents.
    pub fn empty() -> Self {
        Self {
            destinations: Mutex::new(Vec::new()),
            users: Mutex::new(Vec::new()),
            bookings: Mutex::new(Vec::new()),
        }
    }

    // Destinations

    pub fn list_destinations(
        &self,
        page: i64,
        per_page: i64,
        search: Option<&str>,
    ) -> Page<Destination> {
        let destinations = self.destinations.lock().unwrap_or_else(|e| e.into_inner());
        let filtered: Vec<Destination> = destinations
            .iter()
            .filter(|d| match search {
                Some(term) => {
                    let term = term.to_lowercase();
                    d.name.to_lowercase().contains(&term)
                        || d.location.to_lowercase().contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();
        paginate(filtered, page, per_page)
    }

    pub fn find_destination(&self, uuid: &str) -> Option<Destination> {
        self.destinations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|d| d.uuid.as_deref() == Some(uuid))
            .cloned()
    }

    pub fn create_destination(&self, input: &DestinationInput) -> Destination {
        let now = Utc::now();
        let destination = Destination {
            uuid: Some(mock_id("mock")),
            name: input.name.clone(),
            location: input.location.clone(),
            description: input.description.clone(),
            price: input.price,
            rating: input.rating,
            categories: input.categories.clone(),
            image_urls: input.image_urls.clone(),
            owner_id: match input.owner_id.as_deref() {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => DEFAULT_OWNER_UUID.to_string(),
            },
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.destinations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(destination.clone());
        destination
    }

    pub fn update_destination(
        &self,
        uuid: &str,
        patch: &DestinationPatch,
    ) -> Result<Destination, AdminError> {
        let mut destinations = self.destinations.lock().unwrap_or_else(|e| e.into_inner());
        let destination = destinations
            .iter_mut()
            .find(|d| d.uuid.as_deref() == Some(uuid))
            .ok_or_else(|| not_found("destination", uuid))?;
        if let Some(name) = &patch.name {
            destination.name = name.clone();
        }
        if let Some(location) = &patch.location {
            destination.location = location.clone();
        }
        if let Some(description) = &patch.description {
            destination.description = description.clone();
        }
        if let Some(price) = patch.price {
            destination.price = price;
        }
        if let Some(rating) = patch.rating {
            destination.rating = rating;
        }
        if let Some(categories) = &patch.categories {
            destination.categories = categories.clone();
        }
        if let Some(image_urls) = &patch.image_urls {
            destination.image_urls = image_urls.clone();
        }
        destination.updated_at = Some(Utc::now());
        Ok(destination.clone())
    }

    pub fn delete_destination(&self, uuid: &str) -> Result<(), AdminError> {
        let mut destinations = self.destinations.lock().unwrap_or_else(|e| e.into_inner());
        let before = destinations.len();
        destinations.retain(|d| d.uuid.as_deref() != Some(uuid));
        if destinations.len() == before {
            return Err(not_found("destination", uuid));
        }
        Ok(())
    }

    // Users

    pub fn list_users(
        &self,
        page: i64,
        per_page: i64,
        search: Option<&str>,
        role: Option<&str>,
    ) -> Page<User> {
        let users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        let filtered: Vec<User> = users
            .iter()
            .filter(|u| match role {
                // Seed users carry no role records and count as plain users.
                Some(role) if !u.roles.is_empty() => u
                    .roles
                    .iter()
                    .any(|r| r.get("name").and_then(Value::as_str) == Some(role)),
                Some(role) => role == "user",
                None => true,
            })
            .filter(|u| match search {
                Some(term) => {
                    let term = term.to_lowercase();
                    u.name.to_lowercase().contains(&term)
                        || u.email.to_lowercase().contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();
        paginate(filtered, page, per_page)
    }

    pub fn find_user(&self, id: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|u| u.id == id)
            .cloned()
    }

    pub fn set_user_status(&self, id: &str, status: UserStatus) -> Result<User, AdminError> {
        let mut users = self.users.lock().unwrap_or_else(|e| e.into_inner());
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| not_found("user", id))?;
        user.status = Some(status.to_string());
        Ok(user.clone())
    }

    pub fn create_user(&self, input: &NewUser) -> User {
        let now = Utc::now();
        let now_str = now.to_rfc3339();
        let id = mock_id("mock-user");
        let role_id = mock_id("mock-role");
        let user = User {
            id: id.clone(),
            name: input.name.clone(),
            email: input.email.clone(),
            status: Some("active".to_string()),
            email_verified_at: Some(now_str.clone()),
            roles: vec![json!({
                "uuid": role_id,
                "name": input.role,
                "guard_name": "web",
                "created_at": now_str,
                "updated_at": now_str,
            })],
            permissions: Vec::new(),
            bookings_count: None,
            checkouts_count: None,
            deleted_at: None,
            suspended_at: None,
            suspension_reason: None,
            suspended_by: None,
            personal_data: if input.phone_number.is_some() || input.location.is_some() {
                Some(json!({
                    "uuid": mock_id("mock-personal"),
                    "user_id": id,
                    "phone_number": input.phone_number,
                    "location": input.location,
                    "created_at": now_str,
                    "updated_at": now_str,
                }))
            } else {
                None
            },
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.users
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(user.clone());
        user
    }

    // Bookings

    pub fn list_bookings(&self, page: i64, per_page: i64, filter: &BookingFilter) -> Page<Booking> {
        let bookings = self.bookings.lock().unwrap_or_else(|e| e.into_inner());
        let filtered: Vec<Booking> = bookings
            .iter()
            .filter(|b| match &filter.search {
                Some(term) => {
                    let term = term.to_lowercase();
                    b.uuid.to_lowercase().contains(&term)
                        || b.user
                            .as_ref()
                            .is_some_and(|u| u.name.to_lowercase().contains(&term))
                        || b.destination
                            .as_ref()
                            .is_some_and(|d| d.name.to_lowercase().contains(&term))
                }
                None => true,
            })
            .filter(|b| match &filter.cancellation_status {
                Some(status) => b
                    .cancellation_status
                    .is_some_and(|s| s.to_string() == *status),
                None => true,
            })
            .filter(|b| match &filter.payment_status {
                Some(status) => b
                    .checkout_data
                    .as_ref()
                    .is_some_and(|c| c.payment_status == *status),
                None => true,
            })
            .cloned()
            .collect();
        paginate(filtered, page, per_page)
    }

    pub fn find_booking(&self, uuid: &str) -> Option<Booking> {
        self.bookings
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .find(|b| b.uuid == uuid)
            .cloned()
    }

    pub fn pending_cancellations(&self, page: i64, per_page: i64) -> Page<Booking> {
        let bookings = self.bookings.lock().unwrap_or_else(|e| e.into_inner());
        let pending: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.cancellation_status == Some(CancellationStatus::Pending))
            .cloned()
            .collect();
        paginate(pending, page, per_page)
    }

    pub fn set_cancellation_status(
        &self,
        uuid: &str,
        status: CancellationStatus,
        admin_notes: Option<&str>,
    ) -> Result<Booking, AdminError> {
        let mut bookings = self.bookings.lock().unwrap_or_else(|e| e.into_inner());
        let booking = bookings
            .iter_mut()
            .find(|b| b.uuid == uuid)
            .ok_or_else(|| not_found("booking", uuid))?;
        let now = Utc::now();
        booking.cancellation_status = Some(status);
        booking.admin_notes = admin_notes.map(str::to_string);
        match status {
            CancellationStatus::Approved => {
                booking.cancellation_approved_at = Some(now.to_rfc3339());
            }
            CancellationStatus::Rejected => {
                booking.cancellation_rejected_at = Some(now.to_rfc3339());
            }
            CancellationStatus::Pending => {}
        }
        booking.updated_at = Some(now);
        Ok(booking.clone())
    }

    pub fn force_cancel(&self, uuid: &str, reason: &str) -> Result<Booking, AdminError> {
        let mut bookings = self.bookings.lock().unwrap_or_else(|e| e.into_inner());
        let booking = bookings
            .iter_mut()
            .find(|b| b.uuid == uuid)
            .ok_or_else(|| not_found("booking", uuid))?;
        let now = Utc::now();
        booking.cancellation_status = Some(CancellationStatus::Approved);
        booking.cancellation_reason = Some(reason.to_string());
        booking.admin_notes = Some("Admin force cancelled".to_string());
        booking.cancellation_requested_at = Some(now.to_rfc3339());
        booking.cancellation_approved_at = Some(now.to_rfc3339());
        booking.updated_at = Some(now);
        Ok(booking.clone())
    }
}

fn not_found(resource: &'static str, id: &str) -> AdminError {
    AdminError::NotFound {
        resource,
        id: id.to_string(),
    }
}

fn mock_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Utc::now().timestamp_millis())
}

/// Slice pagination, identical to the live API: `start = (page-1)*per_page`,
/// `last_page = ceil(total / per_page)`.
fn paginate<T>(filtered: Vec<T>, page: i64, per_page: i64) -> Page<T> {
    let total = filtered.len() as i64;
    let last_page = if per_page > 0 {
        (total + per_page - 1) / per_page
    } else {
        0
    };
    let start = ((page - 1) * per_page).max(0) as usize;
    let items: Vec<T> = filtered
        .into_iter()
        .skip(start)
        .take(per_page.max(0) as usize)
        .collect();
    Page {
        items,
        current_page: page,
        total,
        per_page,
        last_page,
    }
}

fn ts(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn date(s: &str) -> Option<NaiveDate> {
    s.parse().ok()
}

fn seed_destinations() -> Vec<Destination> {
    vec![
        Destination {
            uuid: Some("019a7722-3511-710b-9b3f-e77a2b5100b9".to_string()),
            name: "Taman Nasional Bromo".to_string(),
            description: "Pemandangan gunung vulkanik yang spektakuler dengan lautan pasir"
                .to_string(),
            location: "Jawa Timur".to_string(),
            price: 100000.0,
            rating: 4.9,
            categories: vec!["Alam".to_string(), "Adventure".to_string()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=500".to_string(),
            ],
            owner_id: DEFAULT_OWNER_UUID.to_string(),
            created_at: ts("2024-01-15T00:00:00Z"),
            updated_at: ts("2024-01-15T00:00:00Z"),
        },
        Destination {
            uuid: Some("019a7723-3511-710b-9b3f-e77a2b5100b9".to_string()),
            name: "Candi Borobudur".to_string(),
            description: "Candi Buddha terbesar di dunia dengan arsitektur megah".to_string(),
            location: "Yogyakarta".to_string(),
            price: 75000.0,
            rating: 4.8,
            categories: vec!["Budaya".to_string(), "Sejarah".to_string()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1537225228614-b4fad34a0b60?w=500".to_string(),
            ],
            owner_id: DEFAULT_OWNER_UUID.to_string(),
            created_at: ts("2024-01-20T00:00:00Z"),
            updated_at: ts("2024-01-20T00:00:00Z"),
        },
        Destination {
            uuid: Some("019a7724-3511-710b-9b3f-e77a2b5100b9".to_string()),
            name: "Pantai Kuta".to_string(),
            description: "Pantai pasir putih dengan ombak indah".to_string(),
            location: "Bali".to_string(),
            price: 50000.0,
            rating: 4.7,
            categories: vec!["Pantai".to_string(), "Relaksasi".to_string()],
            image_urls: vec![
                "https://images.unsplash.com/photo-1506704720897-c6b0b8ef6dba?w=500".to_string(),
            ],
            owner_id: DEFAULT_OWNER_UUID.to_string(),
            created_at: ts("2024-01-25T00:00:00Z"),
            updated_at: ts("2024-01-25T00:00:00Z"),
        },
    ]
}

fn seed_user(id: &str, name: &str, email: &str, created_at: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        status: None,
        email_verified_at: None,
        roles: Vec::new(),
        permissions: Vec::new(),
        bookings_count: None,
        checkouts_count: None,
        deleted_at: None,
        suspended_at: None,
        suspension_reason: None,
        suspended_by: None,
        personal_data: None,
        created_at: ts(created_at),
        updated_at: None,
    }
}

fn seed_users() -> Vec<User> {
    vec![
        seed_user(
            "019a7715-bfcc-709c-91d5-92fe878c9d83",
            "John Doe",
            "john@example.com",
            "2025-11-12T08:01:45Z",
        ),
        seed_user(
            "019a7716-bfcc-709c-91d5-92fe878c9d84",
            "Jane Smith",
            "jane@example.com",
            "2025-11-12T08:02:30Z",
        ),
        seed_user(
            "019a7717-bfcc-709c-91d5-92fe878c9d85",
            "John Smith",
            "johnsmith@example.com",
            "2025-11-12T08:03:15Z",
        ),
        seed_user(
            "019a7718-bfcc-709c-91d5-92fe878c9d86",
            "Alice Johnson",
            "alice@example.com",
            "2025-11-12T08:04:00Z",
        ),
        seed_user(
            "019a7719-bfcc-709c-91d5-92fe878c9d87",
            "Bob Wilson",
            "bob@example.com",
            "2025-11-12T08:04:45Z",
        ),
        seed_user(
            "019a771a-bfcc-709c-91d5-92fe878c9d88",
            "Carol Davis",
            "carol@example.com",
            "2025-11-12T08:05:30Z",
        ),
        seed_user(
            "019a771b-bfcc-709c-91d5-92fe878c9d89",
            "David Miller",
            "david@example.com",
            "2025-11-12T08:06:15Z",
        ),
    ]
}

fn seed_bookings() -> Vec<Booking> {
    vec![
        Booking {
            uuid: "019a7881-020a-7068-af15-506b5e02e719".to_string(),
            user_id: 1,
            destination_uuid: "019a7722-3511-710b-9b3f-e77a2b5100b9".to_string(),
            date: date("2025-02-15"),
            quantity: 2,
            brand: Some("Premium Package".to_string()),
            category: Some("Adventure".to_string()),
            merchant_name: Some("Bromo Tours".to_string()),
            total_price: 500000.0,
            cancellation_status: Some(CancellationStatus::Pending),
            cancellation_requested_at: Some("2025-01-14T08:30:00.000000Z".to_string()),
            cancellation_approved_at: None,
            cancellation_rejected_at: None,
            cancellation_reason: Some("Family emergency".to_string()),
            admin_notes: None,
            created_at: ts("2025-01-10T10:00:00Z"),
            updated_at: ts("2025-01-14T08:30:00Z"),
            user: Some(RelatedUser {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                created_at: ts("2024-12-01T00:00:00Z"),
            }),
            destination: Some(BookingDestination {
                uuid: "019a7722-3511-710b-9b3f-e77a2b5100b9".to_string(),
                name: "Taman Nasional Bromo".to_string(),
                location: "Jawa Timur".to_string(),
            }),
            checkout_data: Some(CheckoutData {
                uuid: Some("019a7881-020b-7068-af15-506b5e02e720".to_string()),
                booking_uuid: None,
                payment_status: "paid".to_string(),
                payment_method: Some("credit_card".to_string()),
                total_amount: 500000.0,
                paid_at: Some("2025-01-10T11:00:00.000000Z".to_string()),
            }),
        },
        Booking {
            uuid: "019a7882-020a-7068-af15-506b5e02e720".to_string(),
            user_id: 2,
            destination_uuid: "019a7723-3511-710b-9b3f-e77a2b5100b9".to_string(),
            date: date("2025-03-20"),
            quantity: 1,
            brand: Some("Standard Package".to_string()),
            category: Some("Budaya".to_string()),
            merchant_name: Some("Borobudur Cultural Tours".to_string()),
            total_price: 300000.0,
            cancellation_status: Some(CancellationStatus::Approved),
            cancellation_requested_at: Some("2025-01-12T14:00:00.000000Z".to_string()),
            cancellation_approved_at: Some("2025-01-13T09:15:00.000000Z".to_string()),
            cancellation_rejected_at: None,
            cancellation_reason: Some("Schedule conflict".to_string()),
            admin_notes: Some("Approved - customer rescheduled for later date".to_string()),
            created_at: ts("2025-01-08T15:30:00Z"),
            updated_at: ts("2025-01-13T09:15:00Z"),
            user: Some(RelatedUser {
                id: "2".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                created_at: ts("2024-12-05T00:00:00Z"),
            }),
            destination: Some(BookingDestination {
                uuid: "019a7723-3511-710b-9b3f-e77a2b5100b9".to_string(),
                name: "Candi Borobudur".to_string(),
                location: "Yogyakarta".to_string(),
            }),
            checkout_data: Some(CheckoutData {
                uuid: Some("019a7882-020b-7068-af15-506b5e02e721".to_string()),
                booking_uuid: None,
                payment_status: "unpaid".to_string(),
                payment_method: None,
                total_amount: 0.0,
                paid_at: None,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_filters_destinations_by_name_and_location() {
        let store = MockStore::with_seed_data();
        let page = store.list_destinations(1, 15, Some("bromo"));
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name, "Taman Nasional Bromo");

        let by_location = store.list_destinations(1, 15, Some("bali"));
        assert_eq!(by_location.total, 1);
        assert_eq!(by_location.items[0].name, "Pantai Kuta");
    }

    #[test]
    fn pagination_slices_and_reports_last_page() {
        let store = MockStore::with_seed_data();
        let page = store.list_destinations(2, 2, None);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total, 3);
        assert_eq!(page.last_page, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let store = MockStore::with_seed_data();
        let page = store.list_destinations(5, 15, None);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn create_update_delete_destination() {
        let store = MockStore::with_seed_data();
        let created = store.create_destination(&DestinationInput {
            name: "Danau Toba".to_string(),
            location: "Sumatera Utara".to_string(),
            price: 60000.0,
            ..Default::default()
        });
        assert!(created.uuid.is_some());
        assert_eq!(created.owner_id, DEFAULT_OWNER_UUID);

        let uuid = created.uuid.unwrap();
        let updated = store
            .update_destination(
                &uuid,
                &DestinationPatch {
                    price: Some(65000.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.price, 65000.0);
        assert_eq!(updated.name, "Danau Toba");

        store.delete_destination(&uuid).unwrap();
        assert!(store.find_destination(&uuid).is_none());
        assert!(store.delete_destination(&uuid).is_err());
    }

    #[test]
    fn user_search_matches_name_or_email() {
        let store = MockStore::with_seed_data();
        // John Doe, John Smith, Alice Johnson.
        let page = store.list_users(1, 5, Some("john"), None);
        assert_eq!(page.total, 3);

        let by_email = store.list_users(1, 5, Some("alice@"), None);
        assert_eq!(by_email.total, 1);
        assert_eq!(by_email.items[0].name, "Alice Johnson");
    }

    #[test]
    fn user_pages_by_five() {
        let store = MockStore::with_seed_data();
        let second = store.list_users(2, 5, None, None);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.total, 7);
        assert_eq!(second.last_page, 2);
    }

    #[test]
    fn role_filter_treats_seed_users_as_plain_users() {
        let store = MockStore::with_seed_data();
        assert_eq!(store.list_users(1, 15, None, Some("user")).total, 7);
        assert_eq!(store.list_users(1, 15, None, Some("partner")).total, 0);
    }

    #[test]
    fn created_user_gets_role_and_personal_data() {
        let store = MockStore::with_seed_data();
        let user = store.create_user(&NewUser {
            name: "Partner One".to_string(),
            email: "partner@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
            role: "partner".to_string(),
            phone_number: Some("+62811111111".to_string()),
            location: None,
        });
        assert_eq!(user.status.as_deref(), Some("active"));
        assert_eq!(user.roles[0]["name"], "partner");
        assert!(user.personal_data.is_some());
        assert_eq!(store.list_users(1, 15, None, Some("partner")).total, 1);
    }

    #[test]
    fn booking_filters() {
        let store = MockStore::with_seed_data();
        let all = store.list_bookings(1, 15, &BookingFilter::default());
        assert_eq!(all.total, 2);

        let pending = store.list_bookings(
            1,
            15,
            &BookingFilter {
                cancellation_status: Some("pending".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(pending.total, 1);
        assert_eq!(pending.items[0].uuid, "019a7881-020a-7068-af15-506b5e02e719");

        let paid = store.list_bookings(
            1,
            15,
            &BookingFilter {
                payment_status: Some("paid".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(paid.total, 1);

        let by_destination = store.list_bookings(
            1,
            15,
            &BookingFilter {
                search: Some("borobudur".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(by_destination.total, 1);
    }

    #[test]
    fn cancellation_lifecycle() {
        let store = MockStore::with_seed_data();
        let uuid = "019a7881-020a-7068-af15-506b5e02e719";

        assert_eq!(store.pending_cancellations(1, 15).total, 1);

        let approved = store
            .set_cancellation_status(uuid, CancellationStatus::Approved, Some("ok"))
            .unwrap();
        assert_eq!(
            approved.cancellation_status,
            Some(CancellationStatus::Approved)
        );
        assert!(approved.cancellation_approved_at.is_some());
        assert_eq!(approved.admin_notes.as_deref(), Some("ok"));

        assert_eq!(store.pending_cancellations(1, 15).total, 0);
    }

    #[test]
    fn force_cancel_sets_all_markers() {
        let store = MockStore::with_seed_data();
        let uuid = "019a7882-020a-7068-af15-506b5e02e720";
        let cancelled = store.force_cancel(uuid, "fraud").unwrap();
        assert_eq!(
            cancelled.cancellation_status,
            Some(CancellationStatus::Approved)
        );
        assert_eq!(cancelled.cancellation_reason.as_deref(), Some("fraud"));
        assert_eq!(
            cancelled.admin_notes.as_deref(),
            Some("Admin force cancelled")
        );
        assert!(store.force_cancel("missing", "x").is_err());
    }
}
