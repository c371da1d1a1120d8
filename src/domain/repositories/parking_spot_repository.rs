//! Repository trait for parking spot storage.

use crate::domain::entities::ParkingSpot;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage interface for parking spot records.
///
/// The three uniqueness rules (licence plate, spot number, apartment+block)
/// are enforced at this boundary, not merely by the callers' existence
/// checks, so that concurrent writers cannot slip in duplicates.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgParkingSpotRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryParkingSpotRepository`] - test fake
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParkingSpotRepository: Send + Sync {
    /// Inserts the record, or updates it when the id already exists.
    ///
    /// The update arm never touches `registration_date`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] on a uniqueness violation.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save(&self, spot: ParkingSpot) -> Result<ParkingSpot, AppError>;

    /// Finds a record by primary key. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError>;

    /// Returns all records.
    async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError>;

    /// Deletes the given record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record no longer exists.
    async fn delete(&self, spot: ParkingSpot) -> Result<(), AppError>;

    /// True if any record uses this licence plate.
    async fn exists_by_licence_plate_car(&self, licence_plate_car: &str)
    -> Result<bool, AppError>;

    /// True if any record uses this spot number.
    async fn exists_by_parking_spot_number(
        &self,
        parking_spot_number: &str,
    ) -> Result<bool, AppError>;

    /// True if any record is registered for this apartment/block pair.
    async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError>;
}
