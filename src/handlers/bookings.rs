use crate::error::{ApiError, ErrorResponse};
use crate::models::{
    BookingStatusUpdate, ConsultationBooking, ConsultationBookingCreate, ListQuery,
};
use crate::state::AppState;
use crate::store::BookingError;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use uuid::Uuid;

const DEFAULT_LIST_LIMIT: usize = 100;

/// POST /api/bookings handler - Book a consultation against a published slot
///
/// The referenced slot must exist and still be available; a successful
/// booking consumes it, so a second request for the same slot gets 409.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = ConsultationBookingCreate,
    responses(
        (status = 201, description = "Booking confirmed", body = ConsultationBooking),
        (status = 404, description = "Slot not found", body = ErrorResponse),
        (status = 409, description = "Slot already booked", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn create_booking_handler(
    State(state): State<AppState>,
    Json(create): Json<ConsultationBookingCreate>,
) -> Result<(StatusCode, Json<ConsultationBooking>), ApiError> {
    let slot_id = create.timeslot_id;
    let booking = state.store.book(create).await.map_err(|e| match e {
        BookingError::SlotNotFound => ApiError::TimeSlotNotFound(slot_id),
        BookingError::SlotUnavailable => ApiError::TimeSlotUnavailable(slot_id),
    })?;

    tracing::info!(
        "Confirmed booking {} for slot {} ({} {})",
        booking.id,
        booking.timeslot_id,
        booking.date,
        booking.time
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /api/bookings handler - List bookings, newest first
///
/// Query parameters:
/// - skip: Number of results to skip (optional, default: 0)
/// - limit: Maximum number of results to return (optional, default: 100)
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(
        ("skip" = Option<u32>, Query, description = "Number of results to skip"),
        ("limit" = Option<u32>, Query, description = "Maximum number of results to return")
    ),
    responses(
        (status = 200, description = "Bookings, newest first", body = Vec<ConsultationBooking>)
    ),
    tag = "bookings"
)]
pub async fn list_bookings_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> (StatusCode, Json<Vec<ConsultationBooking>>) {
    let skip = query.skip.unwrap_or(0) as usize;
    let limit = query.limit.map(|l| l as usize).unwrap_or(DEFAULT_LIST_LIMIT);

    let bookings = state.store.bookings(skip, limit).await;
    tracing::info!(
        "Listed {} bookings (skip: {}, limit: {})",
        bookings.len(),
        skip,
        limit
    );
    (StatusCode::OK, Json(bookings))
}

/// PUT /api/bookings/:booking_id/status handler - Move a booking through its lifecycle
#[utoipa::path(
    put,
    path = "/api/bookings/{booking_id}/status",
    params(
        ("booking_id" = String, Path, description = "UUID of the booking")
    ),
    request_body = BookingStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = ConsultationBooking),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Booking not found", body = ErrorResponse)
    ),
    tag = "bookings"
)]
pub async fn update_booking_status_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(update): Json<BookingStatusUpdate>,
) -> Result<(StatusCode, Json<ConsultationBooking>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let booking = state
        .store
        .set_booking_status(id, update.status)
        .await
        .ok_or(ApiError::BookingNotFound(id))?;

    tracing::info!("Updated booking {} status to {:?}", id, booking.status);
    Ok((StatusCode::OK, Json(booking)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::{BookingStatus, TimeSlot, TimeSlotCreate};
    use crate::store::Store;
    use axum::{
        body::Body,
        http::Request,
        routing::{get, put},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn setup_test_app() -> (Router, TimeSlot) {
        let config = Config {
            service_host: "0.0.0.0".to_string(),
            service_port: 3000,
            seed_file: None,
        };

        let store = Store::new();
        let slot = store
            .create_timeslot(TimeSlotCreate {
                date: "2026-09-01".to_string(),
                time: "10:00".to_string(),
            })
            .await;

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        let app = Router::new()
            .route(
                crate::routes::BOOKINGS,
                get(list_bookings_handler).post(create_booking_handler),
            )
            .route(
                crate::routes::BOOKING_STATUS,
                put(update_booking_status_handler),
            )
            .with_state(state);

        (app, slot)
    }

    async fn post_booking(app: &Router, slot_id: Uuid) -> (StatusCode, Option<ConsultationBooking>) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "name": "Dana",
                            "email": "dana@example.com",
                            "phone": "+15550100",
                            "service_interest": "Discovery audit",
                            "timeslot_id": slot_id
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).ok())
    }

    #[tokio::test]
    async fn test_booking_copies_slot_schedule() {
        let (app, slot) = setup_test_app().await;

        let (status, booking) = post_booking(&app, slot.id).await;
        assert_eq!(status, StatusCode::CREATED);
        let booking = booking.unwrap();
        assert_eq!(booking.date, "2026-09-01");
        assert_eq!(booking.time, "10:00");
        assert_eq!(booking.timeslot_id, slot.id);
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_double_booking_conflict() {
        let (app, slot) = setup_test_app().await;

        let (status, _) = post_booking(&app, slot.id).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = post_booking(&app, slot.id).await;
        assert_eq!(status, StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_booking_unknown_slot() {
        let (app, _) = setup_test_app().await;

        let (status, _) = post_booking(&app, Uuid::new_v4()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_bookings() {
        let (app, slot) = setup_test_app().await;
        post_booking(&app, slot.id).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/bookings")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let bookings: Vec<ConsultationBooking> = serde_json::from_slice(&body).unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].name, "Dana");
    }

    #[tokio::test]
    async fn test_update_booking_status() {
        let (app, slot) = setup_test_app().await;
        let (_, booking) = post_booking(&app, slot.id).await;
        let booking = booking.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/bookings/{}/status", booking.id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"status": "no_show"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: ConsultationBooking = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.status, BookingStatus::NoShow);
    }

    #[tokio::test]
    async fn test_update_booking_status_invalid_uuid() {
        let (app, _) = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/bookings/not-a-uuid/status")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"status": "cancelled"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error_response.error.contains("Invalid UUID format"));
    }
}
