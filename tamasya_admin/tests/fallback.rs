//! Fallback behavior against an unreachable backend: every read answers from
//! the seeded mock store, every mutation applies to it, and disabling
//! fallback surfaces the transport failure instead.

use tamasya_admin::types::{
    CancellationDecision, DestinationInput, DestinationPatch, NewUser, UserStatus,
};
use tamasya_admin::{
    AdminApi, AdminError, BookingQuery, CheckoutQuery, DestinationQuery, FallbackPolicy, Query,
    UserQuery,
};

// Port 9 (discard) refuses connections immediately.
fn unreachable_api() -> AdminApi {
    AdminApi::with_base_url("http://127.0.0.1:9")
}

#[tokio::test]
async fn destination_search_is_served_from_mock_data() {
    let api = unreachable_api();
    let response = api
        .destinations(&DestinationQuery::default().with_search("Bromo"))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.message, "Success");
    assert_eq!(response.data.total, 1);
    assert_eq!(response.data.items[0].name, "Taman Nasional Bromo");
}

#[tokio::test]
async fn page_envelope_echoes_the_request() {
    let api = unreachable_api();
    let response = api
        .destinations(&DestinationQuery::default().with_page(2).with_per_page(2))
        .await
        .unwrap();

    let page = response.data;
    assert_eq!(page.current_page, 2);
    assert_eq!(page.per_page, 2);
    assert_eq!(page.total, 3);
    assert_eq!(page.last_page, 2);
    assert!(page.items.len() as i64 <= page.per_page);
}

#[tokio::test]
async fn disabled_fallback_propagates_the_network_error() {
    let api = unreachable_api().with_fallback(FallbackPolicy::Disabled);
    let err = api
        .destinations(&DestinationQuery::default())
        .await
        .unwrap_err();
    assert!(err.is_network());
}

#[tokio::test]
async fn users_page_by_five() {
    let api = unreachable_api();
    let response = api
        .users(&UserQuery::default().with_page(2))
        .await
        .unwrap();

    assert_eq!(response.message, "Users retrieved successfully.");
    assert_eq!(response.data.items.len(), 2);
    assert_eq!(response.data.total, 7);
    assert_eq!(response.data.last_page, 2);
}

#[tokio::test]
async fn checkouts_fall_back_to_an_empty_page() {
    let api = unreachable_api();
    let response = api
        .checkouts(&CheckoutQuery::default().with_page(3))
        .await
        .unwrap();

    assert_eq!(response.message, "Checkouts retrieved successfully.");
    assert!(response.data.items.is_empty());
    assert_eq!(response.data.total, 0);
    assert_eq!(response.data.current_page, 3);
    assert_eq!(response.data.last_page, 0);
}

#[tokio::test]
async fn checkout_detail_falls_back_to_a_stub() {
    let api = unreachable_api();
    let response = api.checkout("ORD-123").await.unwrap();
    assert_eq!(response.message, "Info.");
    assert_eq!(response.data.order_id, "ORD-123");
    assert!(response.data.bookings.is_empty());
}

#[tokio::test]
async fn destination_mutations_apply_to_the_mock_store() {
    let api = unreachable_api();

    let created = api
        .create_destination(&DestinationInput {
            name: "Danau Toba".to_string(),
            location: "Sumatera Utara".to_string(),
            price: 60000.0,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.message, "Destination created");
    let uuid = created.data.uuid.unwrap();

    let updated = api
        .update_destination(
            &uuid,
            &DestinationPatch {
                price: Some(65000.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.message, "Destination updated");
    assert_eq!(updated.data.price, 65000.0);

    let fetched = api.destination(&uuid).await.unwrap();
    assert_eq!(fetched.data.name, "Danau Toba");

    let deleted = api.delete_destination(&uuid).await.unwrap();
    assert_eq!(deleted.message, "Destination deleted");

    let missing = api.destination(&uuid).await.unwrap_err();
    assert!(matches!(missing, AdminError::NotFound { .. }));
}

#[tokio::test]
async fn bookings_filter_by_cancellation_status() {
    let api = unreachable_api();
    let response = api
        .bookings(&BookingQuery::default().with_cancellation_status("pending"))
        .await
        .unwrap();

    assert_eq!(response.message, "Bookings retrieved successfully.");
    assert_eq!(response.data.total, 1);
    assert_eq!(
        response.data.items[0].cancellation_reason.as_deref(),
        Some("Family emergency")
    );
}

#[tokio::test]
async fn cancellation_decision_updates_the_mock_booking() {
    let api = unreachable_api();

    let pending = api.pending_cancellations(1, 15).await.unwrap();
    assert_eq!(pending.data.total, 1);
    let uuid = pending.data.items[0].uuid.clone();

    let decided = api
        .set_cancellation_status(&uuid, CancellationDecision::Approved, Some("verified"))
        .await
        .unwrap();
    assert_eq!(
        decided.message,
        "Cancellation request approved successfully."
    );
    assert_eq!(decided.data.admin_notes.as_deref(), Some("verified"));

    let pending_after = api.pending_cancellations(1, 15).await.unwrap();
    assert_eq!(pending_after.data.total, 0);
}

#[tokio::test]
async fn force_cancel_marks_the_mock_booking() {
    let api = unreachable_api();
    let response = api
        .force_cancel("019a7882-020a-7068-af15-506b5e02e720", "chargeback")
        .await
        .unwrap();

    assert_eq!(response.message, "Booking force cancelled successfully.");
    assert_eq!(
        response.data.cancellation_reason.as_deref(),
        Some("chargeback")
    );
    assert_eq!(
        response.data.admin_notes.as_deref(),
        Some("Admin force cancelled")
    );
}

#[tokio::test]
async fn user_status_and_creation_fall_back() {
    let api = unreachable_api();

    let suspended = api
        .set_user_status(
            "019a7715-bfcc-709c-91d5-92fe878c9d83",
            UserStatus::Suspended,
            Some("abuse"),
        )
        .await
        .unwrap();
    assert_eq!(suspended.message, "User suspended (mock)");
    assert_eq!(suspended.data.status.as_deref(), Some("suspended"));

    let created = api
        .create_user(&NewUser {
            name: "Partner One".to_string(),
            email: "partner@example.com".to_string(),
            password: "secret123".to_string(),
            password_confirmation: "secret123".to_string(),
            role: "partner".to_string(),
            phone_number: None,
            location: None,
        })
        .await
        .unwrap();
    assert_eq!(created.status, 201);
    assert_eq!(created.message, "User created successfully.");
    assert_eq!(created.data.roles[0]["name"], "partner");
}

#[tokio::test]
async fn mutation_miss_surfaces_not_found() {
    let api = unreachable_api();
    let err = api
        .force_cancel("no-such-booking", "whatever")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AdminError::NotFound {
            resource: "booking",
            ..
        }
    ));
}
