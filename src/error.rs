use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// This error type provides consistent error handling across all endpoints,
/// automatically mapping different error types to appropriate HTTP status codes
/// and formatting them as JSON responses.
#[derive(Debug)]
pub enum ApiError {
    /// Invalid UUID format in path parameter
    InvalidUuid(String),
    /// Stage not found
    StageNotFound(i64),
    /// Stage id already taken
    StageExists(i64),
    /// Service not found in any stage
    ServiceNotFound(Uuid),
    /// Contact inquiry not found
    InquiryNotFound(Uuid),
    /// Time slot not found
    TimeSlotNotFound(Uuid),
    /// Time slot exists but has already been booked
    TimeSlotUnavailable(Uuid),
    /// Booking not found
    BookingNotFound(Uuid),
    /// Date value not in YYYY-MM-DD form
    InvalidDate(String),
    /// Time value not in HH:MM form
    InvalidTime(String),
    /// Invalid query parameter
    InvalidQueryParam(String),
    /// HTML template rendering error
    Template(askama::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidUuid(id) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid UUID format: expected format like '550e8400-e29b-41d4-a716-446655440000', got '{}'", id),
            ),
            ApiError::StageNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Stage not found: {}", id),
            ),
            ApiError::StageExists(id) => (
                StatusCode::CONFLICT,
                format!("Stage already exists: {}", id),
            ),
            ApiError::ServiceNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Service not found: {}", id),
            ),
            ApiError::InquiryNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Contact inquiry not found: {}", id),
            ),
            ApiError::TimeSlotNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Time slot not found: {}", id),
            ),
            ApiError::TimeSlotUnavailable(id) => (
                StatusCode::CONFLICT,
                format!("Time slot is no longer available: {}", id),
            ),
            ApiError::BookingNotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Booking not found: {}", id),
            ),
            ApiError::InvalidDate(value) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid date: expected YYYY-MM-DD, got '{}'", value),
            ),
            ApiError::InvalidTime(value) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid time: expected HH:MM, got '{}'", value),
            ),
            ApiError::InvalidQueryParam(msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid query parameter: {}", msg),
            ),
            ApiError::Template(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Template rendering error: {}", err),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<uuid::Error> for ApiError {
    fn from(err: uuid::Error) -> Self {
        ApiError::InvalidUuid(err.to_string())
    }
}

impl From<askama::Error> for ApiError {
    fn from(err: askama::Error) -> Self {
        ApiError::Template(err)
    }
}
