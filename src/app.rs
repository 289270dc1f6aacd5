use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Assemble the full route table
///
/// Routes are declared once, here, against the constants in `routes`, and
/// stay immutable for the lifetime of the process. A path matched by none of
/// them falls through to the not-found page.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route(routes::HOME, get(handlers::home_handler))
        .route(routes::SERVICE_DETAIL, get(handlers::service_detail_handler))
        .route(routes::HEALTH, get(handlers::health_handler))
        .route(
            routes::STAGES,
            get(handlers::list_stages_handler).post(handlers::create_stage_handler),
        )
        .route(
            routes::STAGE,
            get(handlers::get_stage_handler)
                .put(handlers::update_stage_handler)
                .delete(handlers::delete_stage_handler),
        )
        .route(routes::STAGE_SERVICES, post(handlers::add_service_handler))
        .route(
            routes::STAGE_SERVICE,
            put(handlers::update_service_handler).delete(handlers::delete_service_handler),
        )
        .route(routes::SERVICE, get(handlers::get_service_handler))
        .route(
            routes::CONTACT,
            get(handlers::list_inquiries_handler).post(handlers::create_inquiry_handler),
        )
        .route(
            routes::CONTACT_STATUS,
            put(handlers::update_inquiry_status_handler),
        )
        .route(
            routes::TIMESLOTS,
            get(handlers::list_timeslots_handler).post(handlers::create_timeslot_handler),
        )
        .route(routes::TIMESLOT, delete(handlers::delete_timeslot_handler))
        .route(
            routes::BOOKINGS,
            get(handlers::list_bookings_handler).post(handlers::create_booking_handler),
        )
        .route(
            routes::BOOKING_STATUS,
            put(handlers::update_booking_status_handler),
        )
        .fallback(handlers::not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
