pub mod bookings;
pub mod health;
pub mod inquiries;
pub mod pages;
pub mod services;
pub mod stages;
pub mod timeslots;

pub use bookings::{create_booking_handler, list_bookings_handler, update_booking_status_handler};
pub use health::health_handler;
pub use inquiries::{
    create_inquiry_handler, list_inquiries_handler, update_inquiry_status_handler,
};
pub use pages::{home_handler, not_found_handler, service_detail_handler};
pub use services::{
    add_service_handler, delete_service_handler, get_service_handler, update_service_handler,
};
pub use stages::{
    create_stage_handler, delete_stage_handler, get_stage_handler, list_stages_handler,
    update_stage_handler,
};
pub use timeslots::{create_timeslot_handler, delete_timeslot_handler, list_timeslots_handler};
