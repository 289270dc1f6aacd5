use crate::error::ApiError;
use crate::models::{Service, Stage};
use crate::state::AppState;
use askama::Template;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use uuid::Uuid;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    stages: &'a [Stage],
}

#[derive(Template)]
#[template(path = "service_detail.html")]
struct ServiceDetailTemplate<'a> {
    service: &'a Service,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate;

/// GET / handler - Home page listing every stage and its services
pub async fn home_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let stages = state.store.stages().await;
    let page = HomeTemplate { stages: &stages };
    Ok(Html(page.render()?))
}

/// GET /service/:service_id handler - Service detail page
///
/// The path parameter is matched leniently: any non-empty segment reaches
/// this handler. Ids that are malformed or unknown get the not-found page
/// with a 404 status; the strict validation boundary lives on the JSON API.
pub async fn service_detail_handler(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<Response, ApiError> {
    let service = match Uuid::parse_str(&service_id) {
        Ok(id) => state.store.service(id).await,
        Err(_) => None,
    };

    match service {
        Some(service) => {
            let page = ServiceDetailTemplate { service: &service };
            Ok(Html(page.render()?).into_response())
        }
        None => {
            tracing::debug!("No service for path parameter '{}'", service_id);
            Ok(render_not_found()?.into_response())
        }
    }
}

/// Fallback handler - Not-found page for any unmatched path
pub async fn not_found_handler() -> Result<Response, ApiError> {
    Ok(render_not_found()?.into_response())
}

fn render_not_found() -> Result<(StatusCode, Html<String>), ApiError> {
    Ok((StatusCode::NOT_FOUND, Html(NotFoundTemplate.render()?)))
}
