use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{
    BookingStatus, ConsultationBooking, ConsultationBookingCreate, ContactInquiry,
    ContactInquiryCreate, InquiryStatus, Service, ServiceCreate, ServiceUpdate, Stage,
    StageCreate, StageUpdate, TimeSlot, TimeSlotCreate,
};

/// Seed payload loaded at startup: stages and time slots in create form
#[derive(Debug, Default, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub stages: Vec<StageCreate>,
    #[serde(default)]
    pub timeslots: Vec<TimeSlotCreate>,
}

/// Why a booking attempt was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    SlotNotFound,
    SlotUnavailable,
}

#[derive(Debug, Default)]
struct StoreInner {
    stages: Vec<Stage>,
    inquiries: Vec<ContactInquiry>,
    timeslots: Vec<TimeSlot>,
    bookings: Vec<ConsultationBooking>,
}

/// Shareable in-process store for use across async handlers
///
/// Holds all site content behind a single `RwLock`. Write operations take the
/// lock once, so compound updates (such as consuming a time slot while
/// creating its booking) are atomic with respect to concurrent requests.
#[derive(Clone, Debug)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Store {
            inner: Arc::new(RwLock::new(StoreInner::default())),
        }
    }

    /// Create a store pre-populated from a seed payload
    ///
    /// Stages with a duplicate id are skipped with a warning rather than
    /// clobbering the earlier entry.
    pub fn from_seed(seed: Seed) -> Self {
        let mut inner = StoreInner::default();
        for create in seed.stages {
            if inner.stages.iter().any(|s| s.id == create.id) {
                tracing::warn!("Seed contains duplicate stage id {}, skipping", create.id);
                continue;
            }
            inner.stages.push(Stage::new(create));
        }
        for create in seed.timeslots {
            inner.timeslots.push(TimeSlot::new(create));
        }
        tracing::info!(
            "Seeded store with {} stages and {} time slots",
            inner.stages.len(),
            inner.timeslots.len()
        );
        Store {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Load a JSON seed file and build a store from it
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid seed JSON
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read seed file: {}", path.display()))?;
        let seed: Seed = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse seed file: {}", path.display()))?;
        Ok(Self::from_seed(seed))
    }

    // ----- stages -----

    /// All stages, sorted by id ascending
    pub async fn stages(&self) -> Vec<Stage> {
        let inner = self.inner.read().await;
        let mut stages = inner.stages.clone();
        stages.sort_by_key(|s| s.id);
        stages
    }

    pub async fn stage(&self, id: i64) -> Option<Stage> {
        let inner = self.inner.read().await;
        inner.stages.iter().find(|s| s.id == id).cloned()
    }

    /// Create a stage; returns `None` if the id is already taken
    pub async fn create_stage(&self, create: StageCreate) -> Option<Stage> {
        let mut inner = self.inner.write().await;
        if inner.stages.iter().any(|s| s.id == create.id) {
            return None;
        }
        let stage = Stage::new(create);
        inner.stages.push(stage.clone());
        tracing::debug!("Created stage {}", stage.id);
        Some(stage)
    }

    pub async fn update_stage(&self, id: i64, update: StageUpdate) -> Option<Stage> {
        let mut inner = self.inner.write().await;
        let stage = inner.stages.iter_mut().find(|s| s.id == id)?;
        stage.apply(update);
        Some(stage.clone())
    }

    pub async fn delete_stage(&self, id: i64) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.stages.len();
        inner.stages.retain(|s| s.id != id);
        inner.stages.len() < before
    }

    // ----- services -----

    /// Look up a service by its id across all stages
    pub async fn service(&self, service_id: Uuid) -> Option<Service> {
        let inner = self.inner.read().await;
        inner
            .stages
            .iter()
            .flat_map(|s| s.services.iter())
            .find(|svc| svc.service_id == service_id)
            .cloned()
    }

    /// Add a service to a stage; returns `None` if the stage does not exist
    pub async fn add_service(&self, stage_id: i64, create: ServiceCreate) -> Option<Service> {
        let mut inner = self.inner.write().await;
        let stage = inner.stages.iter_mut().find(|s| s.id == stage_id)?;
        let service = Service::new(create);
        stage.services.push(service.clone());
        tracing::debug!("Added service {} to stage {}", service.service_id, stage_id);
        Some(service)
    }

    pub async fn update_service(
        &self,
        stage_id: i64,
        service_id: Uuid,
        update: ServiceUpdate,
    ) -> Option<Service> {
        let mut inner = self.inner.write().await;
        let stage = inner.stages.iter_mut().find(|s| s.id == stage_id)?;
        let service = stage
            .services
            .iter_mut()
            .find(|svc| svc.service_id == service_id)?;
        service.apply(update);
        Some(service.clone())
    }

    pub async fn delete_service(&self, stage_id: i64, service_id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let Some(stage) = inner.stages.iter_mut().find(|s| s.id == stage_id) else {
            return false;
        };
        let before = stage.services.len();
        stage.services.retain(|svc| svc.service_id != service_id);
        stage.services.len() < before
    }

    // ----- contact inquiries -----

    pub async fn create_inquiry(&self, create: ContactInquiryCreate) -> ContactInquiry {
        let mut inner = self.inner.write().await;
        let inquiry = ContactInquiry::new(create);
        inner.inquiries.push(inquiry.clone());
        tracing::debug!("Created contact inquiry {}", inquiry.id);
        inquiry
    }

    /// Inquiries sorted newest first, with skip/limit pagination
    pub async fn inquiries(&self, skip: usize, limit: usize) -> Vec<ContactInquiry> {
        let inner = self.inner.read().await;
        let mut inquiries = inner.inquiries.clone();
        inquiries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        inquiries.into_iter().skip(skip).take(limit).collect()
    }

    pub async fn set_inquiry_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
    ) -> Option<ContactInquiry> {
        let mut inner = self.inner.write().await;
        let inquiry = inner.inquiries.iter_mut().find(|i| i.id == id)?;
        inquiry.status = status;
        inquiry.updated_at = chrono::Utc::now();
        Some(inquiry.clone())
    }

    // ----- time slots -----

    /// Available slots, optionally restricted to one date,
    /// sorted by date then time
    pub async fn available_timeslots(&self, date: Option<&str>) -> Vec<TimeSlot> {
        let inner = self.inner.read().await;
        let mut slots: Vec<TimeSlot> = inner
            .timeslots
            .iter()
            .filter(|slot| slot.is_available)
            .filter(|slot| date.is_none_or(|d| slot.date == d))
            .cloned()
            .collect();
        // ISO date and zero-padded HH:MM sort correctly as strings
        slots.sort_by(|a, b| a.date.cmp(&b.date).then(a.time.cmp(&b.time)));
        slots
    }

    pub async fn timeslot(&self, id: Uuid) -> Option<TimeSlot> {
        let inner = self.inner.read().await;
        inner.timeslots.iter().find(|slot| slot.id == id).cloned()
    }

    pub async fn create_timeslot(&self, create: TimeSlotCreate) -> TimeSlot {
        let mut inner = self.inner.write().await;
        let slot = TimeSlot::new(create);
        inner.timeslots.push(slot.clone());
        tracing::debug!("Created time slot {} ({} {})", slot.id, slot.date, slot.time);
        slot
    }

    pub async fn delete_timeslot(&self, id: Uuid) -> bool {
        let mut inner = self.inner.write().await;
        let before = inner.timeslots.len();
        inner.timeslots.retain(|slot| slot.id != id);
        inner.timeslots.len() < before
    }

    // ----- bookings -----

    /// Book a consultation against an existing slot
    ///
    /// Checks the slot and marks it unavailable under a single write lock,
    /// so two concurrent requests cannot both claim it.
    pub async fn book(
        &self,
        create: ConsultationBookingCreate,
    ) -> std::result::Result<ConsultationBooking, BookingError> {
        let mut inner = self.inner.write().await;
        let slot = inner
            .timeslots
            .iter_mut()
            .find(|slot| slot.id == create.timeslot_id)
            .ok_or(BookingError::SlotNotFound)?;
        if !slot.is_available {
            return Err(BookingError::SlotUnavailable);
        }
        slot.is_available = false;
        let booking = ConsultationBooking::from_slot(create, slot);
        inner.bookings.push(booking.clone());
        tracing::debug!(
            "Created booking {} for slot {}",
            booking.id,
            booking.timeslot_id
        );
        Ok(booking)
    }

    /// Bookings sorted newest first, with skip/limit pagination
    pub async fn bookings(&self, skip: usize, limit: usize) -> Vec<ConsultationBooking> {
        let inner = self.inner.read().await;
        let mut bookings = inner.bookings.clone();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        bookings.into_iter().skip(skip).take(limit).collect()
    }

    pub async fn set_booking_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Option<ConsultationBooking> {
        let mut inner = self.inner.write().await;
        let booking = inner.bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        booking.updated_at = chrono::Utc::now();
        Some(booking.clone())
    }
}
