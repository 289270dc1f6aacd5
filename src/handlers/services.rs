use crate::error::{ApiError, ErrorResponse};
use crate::models::{Service, ServiceCreate, ServiceUpdate};
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use uuid::Uuid;

/// GET /api/services/:service_id handler - Look up a service across all stages
///
/// This is the lookup the service detail page relies on. Service ids are
/// UUIDv4 strings; malformed ids are rejected before the store is consulted.
#[utoipa::path(
    get,
    path = "/api/services/{service_id}",
    params(
        ("service_id" = String, Path, description = "UUID of the service")
    ),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Service not found", body = ErrorResponse)
    ),
    tag = "services"
)]
pub async fn get_service_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let service = state
        .store
        .service(id)
        .await
        .ok_or(ApiError::ServiceNotFound(id))?;

    tracing::info!("Retrieved service {}", id);
    Ok((StatusCode::OK, Json(service)))
}

/// POST /api/stages/:stage_id/services handler - Add a service to a stage
#[utoipa::path(
    post,
    path = "/api/stages/{stage_id}/services",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id")
    ),
    request_body = ServiceCreate,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 404, description = "Stage not found", body = ErrorResponse)
    ),
    tag = "services"
)]
pub async fn add_service_handler(
    State(state): State<AppState>,
    Path(stage_id): Path<i64>,
    Json(create): Json<ServiceCreate>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let service = state
        .store
        .add_service(stage_id, create)
        .await
        .ok_or(ApiError::StageNotFound(stage_id))?;

    tracing::info!("Added service {} to stage {}", service.service_id, stage_id);
    Ok((StatusCode::CREATED, Json(service)))
}

/// PUT /api/stages/:stage_id/services/:service_id handler - Update a service
#[utoipa::path(
    put,
    path = "/api/stages/{stage_id}/services/{service_id}",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id"),
        ("service_id" = String, Path, description = "UUID of the service")
    ),
    request_body = ServiceUpdate,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Stage or service not found", body = ErrorResponse)
    ),
    tag = "services"
)]
pub async fn update_service_handler(
    State(state): State<AppState>,
    Path((stage_id, id_str)): Path<(i64, String)>,
    Json(update): Json<ServiceUpdate>,
) -> Result<(StatusCode, Json<Service>), ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    let service = state
        .store
        .update_service(stage_id, id, update)
        .await
        .ok_or(ApiError::ServiceNotFound(id))?;

    tracing::info!("Updated service {} in stage {}", id, stage_id);
    Ok((StatusCode::OK, Json(service)))
}

/// DELETE /api/stages/:stage_id/services/:service_id handler - Remove a service
#[utoipa::path(
    delete,
    path = "/api/stages/{stage_id}/services/{service_id}",
    params(
        ("stage_id" = i64, Path, description = "Numeric stage id"),
        ("service_id" = String, Path, description = "UUID of the service")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 400, description = "Invalid UUID format", body = ErrorResponse),
        (status = 404, description = "Stage or service not found", body = ErrorResponse)
    ),
    tag = "services"
)]
pub async fn delete_service_handler(
    State(state): State<AppState>,
    Path((stage_id, id_str)): Path<(i64, String)>,
) -> Result<StatusCode, ApiError> {
    let id = Uuid::parse_str(&id_str).map_err(|_| ApiError::InvalidUuid(id_str.clone()))?;

    if !state.store.delete_service(stage_id, id).await {
        return Err(ApiError::ServiceNotFound(id));
    }

    tracing::info!("Deleted service {} from stage {}", id, stage_id);
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::models::StageCreate;
    use crate::store::Store;
    use axum::{
        body::Body,
        http::Request,
        routing::{get, post, put},
        Router,
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    async fn setup_test_app() -> Router {
        let config = Config {
            service_host: "0.0.0.0".to_string(),
            service_port: 3000,
            seed_file: None,
        };

        let store = Store::new();
        store
            .create_stage(StageCreate {
                id: 1,
                title: "Launch".to_string(),
                subtitle: "From idea to first customers".to_string(),
                phase: "Discovery".to_string(),
                services: vec![],
            })
            .await
            .unwrap();

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        Router::new()
            .route(crate::routes::SERVICE, get(get_service_handler))
            .route(crate::routes::STAGE_SERVICES, post(add_service_handler))
            .route(
                crate::routes::STAGE_SERVICE,
                put(update_service_handler).delete(delete_service_handler),
            )
            .with_state(state)
    }

    async fn add_service(app: &Router, stage_id: i64) -> Service {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/stages/{}/services", stage_id))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "title": "Discovery audit",
                            "description": "Two week review of the current setup",
                            "price": "$1,500",
                            "duration": "2 weeks",
                            "features": ["Kickoff call", "Written report"]
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_add_and_get_service() {
        let app = setup_test_app().await;
        let service = add_service(&app, 1).await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/services/{}", service.service_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let found: Service = serde_json::from_slice(&body).unwrap();
        assert_eq!(found.service_id, service.service_id);
        assert_eq!(found.title, "Discovery audit");
        assert_eq!(found.features.len(), 2);
    }

    #[tokio::test]
    async fn test_get_service_invalid_uuid() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/services/not-a-uuid")
                    .body(Body::empty())
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

    #[tokio::test]
    async fn test_get_service_not_found() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/services/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_service_to_missing_stage() {
        let app = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/stages/42/services")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({
                            "title": "Orphan",
                            "description": "No stage to live in"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_service() {
        let app = setup_test_app().await;
        let service = add_service(&app, 1).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!(
                        "/api/stages/1/services/{}",
                        service.service_id
                    ))
                    .header("content-type", "application/json")
                    .body(Body::from(
                        serde_json::json!({"price": "$2,000"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let updated: Service = serde_json::from_slice(&body).unwrap();
        assert_eq!(updated.price.as_deref(), Some("$2,000"));
        assert_eq!(updated.title, "Discovery audit");
    }

    #[tokio::test]
    async fn test_delete_service() {
        let app = setup_test_app().await;
        let service = add_service(&app, 1).await;

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!(
                        "/api/stages/1/services/{}",
                        service.service_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!("/api/services/{}", service.service_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
