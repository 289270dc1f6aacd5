use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    BookingStatus, BookingStatusUpdate, ConsultationBooking, ConsultationBookingCreate,
    ContactInquiry, ContactInquiryCreate, InquiryStatus, InquiryStatusUpdate, Service,
    ServiceCreate, ServiceUpdate, Stage, StageCreate, StageUpdate, TimeSlot, TimeSlotCreate,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hdmonks-web API",
        version = "1.0.0",
        description = "Content and booking API behind the HD Monks consulting site"
    ),
    paths(
        handlers::health::health_handler,
        handlers::stages::list_stages_handler,
        handlers::stages::create_stage_handler,
        handlers::stages::get_stage_handler,
        handlers::stages::update_stage_handler,
        handlers::stages::delete_stage_handler,
        handlers::services::get_service_handler,
        handlers::services::add_service_handler,
        handlers::services::update_service_handler,
        handlers::services::delete_service_handler,
        handlers::inquiries::create_inquiry_handler,
        handlers::inquiries::list_inquiries_handler,
        handlers::inquiries::update_inquiry_status_handler,
        handlers::timeslots::list_timeslots_handler,
        handlers::timeslots::create_timeslot_handler,
        handlers::timeslots::delete_timeslot_handler,
        handlers::bookings::create_booking_handler,
        handlers::bookings::list_bookings_handler,
        handlers::bookings::update_booking_status_handler
    ),
    components(
        schemas(
            Stage,
            StageCreate,
            StageUpdate,
            Service,
            ServiceCreate,
            ServiceUpdate,
            ContactInquiry,
            ContactInquiryCreate,
            InquiryStatus,
            InquiryStatusUpdate,
            TimeSlot,
            TimeSlotCreate,
            ConsultationBooking,
            ConsultationBookingCreate,
            BookingStatus,
            BookingStatusUpdate,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "stages", description = "Engagement stages and their services"),
        (name = "services", description = "Individual service offerings"),
        (name = "contact", description = "Contact inquiry intake and triage"),
        (name = "timeslots", description = "Published consultation slots"),
        (name = "bookings", description = "Consultation bookings")
    )
)]
pub struct ApiDoc;
