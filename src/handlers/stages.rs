use crate::error::{ApiError, ErrorResponse};
use crate::models::{Stage, StageCreate, StageUpdate};
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/stages handler - List all stages with their services
#[utoipa::path(
    get,
    path = "/api/stages",
    responses(
        (status = 200, description = "All stages, sorted by id", body = Vec<Stage>)
    ),
    tag = "stages"
)]
pub async fn list_stages_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<Stage>>) {
    let stages = state.store.stages().await;
    tracing::info!("Listed {} stages", stages.len());
    (StatusCode::OK, Json(stages))
}

/// POST /api/stages handler - Create a new stage
#[utoipa::path(
    post,
    path = "/api/stages",
    request_body = StageCreate,
    responses(
        (status = 201, description = "Stage created", body = Stage),
        (status = 409, description = "Stage id already taken", body = ErrorResponse)
    ),
    tag = "stages"
)]
pub async fn create_stage_handler(
    State(state): State<AppState>,
    Json(create): Json<StageCreate>,
) -> Result<(StatusCode, Json<Stage>), ApiError> {
    let id = create.id;
    let stage = state
        .store
        .create_stage(create)
        .await
        .ok_or(ApiError::StageExists(id))?;

    tracing::info!("Created stage {}", stage.id);
    Ok((StatusCode::CREATED, Json(stage)))
}

/// GET /api/stages/:stage_id handler - Retrieve a single stage
#[utoipa::path(
    get,
    path = "/api/stages/{stage_id}",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id")
    ),
    responses(
        (status = 200, description = "Stage found", body = Stage),
        (status = 404, description = "Stage not found", body = ErrorResponse)
    ),
    tag = "stages"
)]
pub async fn get_stage_handler(
    State(state): State<AppState>,
    Path(stage_id): Path<i64>,
) -> Result<(StatusCode, Json<Stage>), ApiError> {
    let stage = state
        .store
        .stage(stage_id)
        .await
        .ok_or(ApiError::StageNotFound(stage_id))?;
    Ok((StatusCode::OK, Json(stage)))
}

/// PUT /api/stages/:stage_id handler - Partially update a stage
#[utoipa::path(
    put,
    path = "/api/stages/{stage_id}",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id")
    ),
    request_body = StageUpdate,
    responses(
        (status = 200, description = "Stage updated", body = Stage),
        (status = 404, description = "Stage not found", body = ErrorResponse)
    ),
    tag = "stages"
)]
pub async fn update_stage_handler(
    State(state): State<AppState>,
    Path(stage_id): Path<i64>,
    Json(update): Json<StageUpdate>,
) -> Result<(StatusCode, Json<Stage>), ApiError> {
    let stage = state
        .store
        .update_stage(stage_id, update)
        .await
        .ok_or(ApiError::StageNotFound(stage_id))?;

    tracing::info!("Updated stage {}", stage_id);
    Ok((StatusCode::OK, Json(stage)))
}

/// DELETE /api/stages/:stage_id handler - Delete a stage and its services
#[utoipa::path(
    delete,
    path = "/api/stages/{stage_id}",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id")
    ),
    responses(
        (status = 204, description = "Stage deleted"),
        (status = 404, description = "Stage not found", body = ErrorResponse)
    ),
    tag = "stages"
)]
pub async fn delete_stage_handler(
    State(state): State<AppState>,
    Path(stage_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete_stage(stage_id).await {
        return Err(ApiError::StageNotFound(stage_id));
    }

    tracing::info!("Deleted stage {}", stage_id);
    Ok(StatusCode::NO_CONTENT)
}
