use crate::error::{ApiError, ErrorResponse};
use crate::models::{ContactInquiry, ContactInquiryCreate, InquiryStatusUpdate, ListQuery};
use crate::state::AppState;
use axum::{extract::Path, extract::Query, extract::State, http::StatusCode, Json};
use uuid::Uuid;

const DEFAULT_LIST_LIMIT: usize = 100;

/// POST /api/contact handler - Submit a contact inquiry
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactInquiryCreate,
    responses(
        (status = 201, description = "Inquiry recorded", body = ContactInquiry)
    ),
    tag = "contact"
)]
pub async fn create_inquiry_handler(
    State(state): State<AppState>,
    Json(create): Json<ContactInquiryCreate>,
) -> (StatusCode, Json<ContactInquiry>) {
    let inquiry = state.store.create_inquiry(create).await;
    tracing::info!("Recorded contact inquiry {}", inquiry.id);
    (StatusCode::CREATED, Json(inquiry))
}

/// GET /api/contact handler - List contact inquiries, newest first
///
/// Query parameters:
/// - skip: Number of results to skip (optional, default: 0)
/// - limit: Maximum number of results to return (optional, default: 100)
#[utoipa::path(
    get,
    path = "/api/contact",
    params(
        ("skip" = Option<u32>, Query, description = "Number of results to skip"),
        ("limit" = Option<u32>, Query, description = "Maximum number of results to return")
    ),
    responses(
        (status = 200, description = "Inquiries, newest first", body = Vec<ContactInquiry>)
    ),
    tag = "contact"
)]
pub async fn list_inquiries_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> (StatusCode, Json<Vec<ContactInquiry>>) {
    let skip = query.skip.unwrap_or(0) as usize;
    let limit = query.limit.map(|l| l as usize).unwrap_or(DEFAULT_LIST_LIMIT);

    let inquiries = state.store.inquiries(skip, limit).await;
    tracing::info!(
        "Listed {} inquiries (skip: {}, limit: {})",
        inquiries.len(),
        skip,
        limit
    );
    (StatusCode::OK, Json(inquiries))
}

/// PUT /api/contact/:inquiry_id/status handler - Move an inquiry through its lifecycle
#[utoipa::path(
    put,
    path = "/api/contact/{inquiry_id}/status",
    params(
        ("inquiry_id" = String, Path, description = "UUID of the inquiry")
    ),
    request_body = InquiryStatusUpdate,
    responses(
        (status = 200, description = "Status updated", body = ContactInquiry),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse)
    ),
    tag = "contact"
)]
pub async fn update_inquiry_status_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(update): Json<InquiryStatusUpdate>,
) -> Result<(StatusCode, Json<ContactInquiry>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let inquiry = state
        .store
        .set_inquiry_status(id, update.status)
        .await
        .ok_or(ApiError::InquiryNotFound(id))?;

    tracing::info!("Updated inquiry {} status to {:?}", id, inquiry.status);
    Ok((StatusCode::OK, Json(inquiry)))
}
