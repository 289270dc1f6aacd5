// Route path constants - single source of truth for all page and API paths

pub const HOME: &str = "/";
pub const SERVICE_DETAIL: &str = "/service/{service_id}";

pub const HEALTH: &str = "/health";

pub const STAGES: &str = "/api/stages";
pub const STAGE: &str = "/api/stages/{stage_id}";
pub const STAGE_SERVICES: &str = "/api/stages/{stage_id}/services";
pub const STAGE_SERVICE: &str = "/api/stages/{stage_id}/services/{service_id}";
pub const SERVICE: &str = "/api/services/{service_id}";

pub const CONTACT: &str = "/api/contact";
pub const CONTACT_STATUS: &str = "/api/contact/{inquiry_id}/status";

pub const TIMESLOTS: &str = "/api/timeslots";
pub const TIMESLOT: &str = "/api/timeslots/{timeslot_id}";

pub const BOOKINGS: &str = "/api/bookings";
pub const BOOKING_STATUS: &str = "/api/bookings/{booking_id}/status";
