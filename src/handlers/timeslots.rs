use crate::error::{ApiError, ErrorResponse};
use crate::models::{parse_slot_date, parse_slot_time, TimeSlot, TimeSlotCreate, TimeSlotQuery};
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// GET /api/timeslots handler - List available consultation slots
///
/// Query parameters:
/// - date: Restrict results to one calendar date, YYYY-MM-DD (optional)
#[utoipa::path(
    get,
    path = "/api/timeslots",
    params(
        ("date" = Option<String>, Query, description = "Restrict to one date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Available slots, sorted by date then time", body = Vec<TimeSlot>),
        (status = 400, description = "Invalid date filter", body = ErrorResponse)
    ),
    tag = "timeslots"
)]
pub async fn list_timeslots_handler(
    State(state): State<AppState>,
    Query(query): Query<TimeSlotQuery>,
) -> Result<(StatusCode, Json<Vec<TimeSlot>>), ApiError> {
    if let Some(date) = &query.date {
        parse_slot_date(date).map_err(|_| {
            ApiError::InvalidQueryParam(format!("date must be YYYY-MM-DD, got '{}'", date))
        })?;
    }

    let slots = state.store.available_timeslots(query.date.as_deref()).await;
    tracing::info!(
        "Listed {} available slots (date: {:?})",
        slots.len(),
        query.date
    );
    Ok((StatusCode::OK, Json(slots)))
}

/// POST /api/timeslots handler - Publish a new consultation slot
#[utoipa::path(
    post,
    path = "/api/timeslots",
    request_body = TimeSlotCreate,
    responses(
        (status = 201, description = "Slot created", body = TimeSlot),
        (status = 400, description = "Invalid date or time", body = ErrorResponse)
    ),
    tag = "timeslots"
)]
pub async fn create_timeslot_handler(
    State(state): State<AppState>,
    Json(create): Json<TimeSlotCreate>,
) -> Result<(StatusCode, Json<TimeSlot>), ApiError> {
    parse_slot_date(&create.date).map_err(|_| ApiError::InvalidDate(create.date.clone()))?;
    parse_slot_time(&create.time).map_err(|_| ApiError::InvalidTime(create.time.clone()))?;

    let slot = state.store.create_timeslot(create).await;
    tracing::info!("Published slot {} ({} {})", slot.id, slot.date, slot.time);
    Ok((StatusCode::CREATED, Json(slot)))
}

/// DELETE /api/timeslots/:timeslot_id handler - Withdraw a slot
#[utoipa::path(
    delete,
    path = "/api/timeslots/{timeslot_id}",
    params(
        ("timeslot_id" = String, Path, description = "UUID of the slot")
    ),
    responses(
        (status = 204, description = "Slot deleted"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Slot not found", body = ErrorResponse)
    ),
    tag = "timeslots"
)]
pub async fn delete_timeslot_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    if !state.store.delete_timeslot(id).await {
        return Err(ApiError::TimeSlotNotFound(id));
    }

    tracing::info!("Deleted slot {}", id);
    Ok(StatusCode::NO_CONTENT)
}
