//! Parking spot management service.

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewParkingSpot, ParkingSpot};
use crate::domain::repositories::ParkingSpotRepository;
use crate::error::AppError;

/// Thin orchestration between the HTTP handlers and persistence.
///
/// The one piece of non-trivial logic lives here: registration stamps the
/// immutable `id` and `registration_date`, and updates copy every mutable
/// field onto the stored record while preserving both. Everything else is a
/// passthrough to the repository.
pub struct ParkingSpotService {
    repository: Arc<dyn ParkingSpotRepository>,
}

impl ParkingSpotService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<dyn ParkingSpotRepository>) -> Self {
        Self { repository }
    }

    /// Registers a new parking spot, stamping id and registration date.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a uniqueness constraint rejects the
    /// write. Returns [`AppError::Internal`] on storage errors.
    pub async fn register(&self, input: NewParkingSpot) -> Result<ParkingSpot, AppError> {
        let spot = ParkingSpot::register(input);
        self.repository.save(spot).await
    }

    /// Replaces all mutable fields of an existing spot.
    ///
    /// `id` and `registration_date` are preserved unchanged. Uniqueness is
    /// not re-checked here; the storage constraints still reject duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn update(&self, id: Uuid, input: NewParkingSpot) -> Result<ParkingSpot, AppError> {
        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Parking Spot not found"))?;

        self.repository.save(existing.apply(input)).await
    }

    /// Retrieves a spot by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn get(&self, id: Uuid) -> Result<ParkingSpot, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Parking Spot not found"))
    }

    /// Lists all registered spots.
    pub async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError> {
        self.repository.find_all().await
    }

    /// Deletes a spot by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let spot = self.get(id).await?;
        self.repository.delete(spot).await
    }

    /// True if any record uses this licence plate.
    pub async fn exists_by_licence_plate_car(&self, plate: &str) -> Result<bool, AppError> {
        self.repository.exists_by_licence_plate_car(plate).await
    }

    /// True if any record uses this spot number.
    pub async fn exists_by_parking_spot_number(&self, number: &str) -> Result<bool, AppError> {
        self.repository.exists_by_parking_spot_number(number).await
    }

    /// True if any record is registered for this apartment/block pair.
    pub async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError> {
        self.repository
            .exists_by_apartment_and_block(apartment, block)
            .await
    }
}
