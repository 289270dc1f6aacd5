use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single consulting offering, nested inside a stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Service {
    pub service_id: Uuid,
    pub title: String,
    pub description: String,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub features: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a service
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceCreate {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Payload for partially updating a service
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ServiceUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
}

impl Service {
    /// Build a new service with a generated id and current timestamps
    pub fn new(create: ServiceCreate) -> Self {
        let now = Utc::now();
        Service {
            service_id: Uuid::new_v4(),
            title: create.title,
            description: create.description,
            price: create.price,
            duration: create.duration,
            features: create.features,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update, touching `updated_at`
    pub fn apply(&mut self, update: ServiceUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = Some(price);
        }
        if let Some(duration) = update.duration {
            self.duration = Some(duration);
        }
        if let Some(features) = update.features {
            self.features = features;
        }
        self.updated_at = Utc::now();
    }
}

/// A phase of the engagement funnel, grouping services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Stage {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub phase: String,
    pub services: Vec<Service>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a stage (id is caller-assigned and must be unique)
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StageCreate {
    pub id: i64,
    pub title: String,
    pub subtitle: String,
    pub phase: String,
    #[serde(default)]
    pub services: Vec<ServiceCreate>,
}

/// Payload for partially updating a stage
#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StageUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub phase: Option<String>,
}

impl Stage {
    pub fn new(create: StageCreate) -> Self {
        let now = Utc::now();
        Stage {
            id: create.id,
            title: create.title,
            subtitle: create.subtitle,
            phase: create.phase,
            services: create.services.into_iter().map(Service::new).collect(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, update: StageUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(subtitle) = update.subtitle {
            self.subtitle = subtitle;
        }
        if let Some(phase) = update.phase {
            self.phase = phase;
        }
        self.updated_at = Utc::now();
    }
}

/// Lifecycle of a contact inquiry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Contacted,
    Qualified,
    Closed,
}

/// A message sent through the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub message: String,
    pub service_interest: Option<String>,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for submitting a contact inquiry
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactInquiryCreate {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
    #[serde(default)]
    pub service_interest: Option<String>,
}

/// Payload for updating an inquiry's status
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InquiryStatusUpdate {
    pub status: InquiryStatus,
}

impl ContactInquiry {
    pub fn new(create: ContactInquiryCreate) -> Self {
        let now = Utc::now();
        ContactInquiry {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            phone: create.phone,
            company: create.company,
            message: create.message,
            service_interest: create.service_interest,
            status: InquiryStatus::New,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A bookable consultation slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimeSlot {
    pub id: Uuid,
    /// Calendar date in `YYYY-MM-DD` form
    pub date: String,
    /// Time of day in `HH:MM` form
    pub time: String,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a time slot
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TimeSlotCreate {
    pub date: String,
    pub time: String,
}

impl TimeSlot {
    pub fn new(create: TimeSlotCreate) -> Self {
        TimeSlot {
            id: Uuid::new_v4(),
            date: create.date,
            time: create.time,
            is_available: true,
            created_at: Utc::now(),
        }
    }
}

/// Parse a slot date, enforcing the `YYYY-MM-DD` wire format
pub fn parse_slot_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
}

/// Parse a slot time, enforcing the `HH:MM` wire format
pub fn parse_slot_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
}

/// Lifecycle of a consultation booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

/// A confirmed consultation, tied to the slot it consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConsultationBooking {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Option<String>,
    pub service_interest: String,
    pub message: Option<String>,
    pub date: String,
    pub time: String,
    pub timeslot_id: Uuid,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for booking a consultation against an existing slot
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConsultationBookingCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub company: Option<String>,
    pub service_interest: String,
    #[serde(default)]
    pub message: Option<String>,
    pub timeslot_id: Uuid,
}

/// Payload for updating a booking's status
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

impl ConsultationBooking {
    /// Build a booking from its payload and the slot it consumes;
    /// the slot's date and time are denormalized onto the booking
    pub fn from_slot(create: ConsultationBookingCreate, slot: &TimeSlot) -> Self {
        let now = Utc::now();
        ConsultationBooking {
            id: Uuid::new_v4(),
            name: create.name,
            email: create.email,
            phone: create.phone,
            company: create.company,
            service_interest: create.service_interest,
            message: create.message,
            date: slot.date.clone(),
            time: slot.time.clone(),
            timeslot_id: slot.id,
            status: BookingStatus::Confirmed,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Query parameters for paginated list endpoints
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct ListQuery {
    pub skip: Option<u32>,
    pub limit: Option<u32>,
}

/// Query parameters for the available time slot listing
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema)]
pub struct TimeSlotQuery {
    pub date: Option<String>,
}
