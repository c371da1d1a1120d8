//! In-memory fake of the parking spot repository.
//!
//! Backs integration tests that exercise the full HTTP stack without a
//! running Postgres. It enforces the same three uniqueness rules as the
//! database constraints and reports them with the same conflict messages,
//! so handler behavior under duplicate writes matches production.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::ParkingSpot;
use crate::domain::repositories::ParkingSpotRepository;
use crate::error::AppError;

/// Map-backed repository with database-equivalent uniqueness enforcement.
#[derive(Default)]
pub struct InMemoryParkingSpotRepository {
    spots: Mutex<HashMap<Uuid, ParkingSpot>>,
}

impl InMemoryParkingSpotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_unique(
        spots: &HashMap<Uuid, ParkingSpot>,
        candidate: &ParkingSpot,
    ) -> Result<(), AppError> {
        // Same priority order as the named Postgres constraints would fire
        // for a typical insert: plate, spot number, apartment+block.
        for existing in spots.values().filter(|s| s.id != candidate.id) {
            if existing.licence_plate_car == candidate.licence_plate_car {
                return Err(AppError::conflict(
                    "Conflict: Licence Plate Car is already in use!",
                ));
            }
            if existing.parking_spot_number == candidate.parking_spot_number {
                return Err(AppError::conflict(
                    "Conflict: Parking Spot is already in use!",
                ));
            }
            if existing.apartment == candidate.apartment && existing.block == candidate.block {
                return Err(AppError::conflict(
                    "Conflict: Parking Spot already registered for this apartment/block!",
                ));
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ParkingSpotRepository for InMemoryParkingSpotRepository {
    async fn save(&self, spot: ParkingSpot) -> Result<ParkingSpot, AppError> {
        let mut spots = self.spots.lock().await;

        Self::check_unique(&spots, &spot)?;

        // Upsert semantics: registration_date of an existing record wins.
        let stored = match spots.get(&spot.id) {
            Some(existing) => ParkingSpot {
                registration_date: existing.registration_date,
                ..spot
            },
            None => spot,
        };

        spots.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        Ok(self.spots.lock().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let mut all: Vec<ParkingSpot> = self.spots.lock().await.values().cloned().collect();
        all.sort_by_key(|s| s.registration_date);
        Ok(all)
    }

    async fn delete(&self, spot: ParkingSpot) -> Result<(), AppError> {
        match self.spots.lock().await.remove(&spot.id) {
            Some(_) => Ok(()),
            None => Err(AppError::not_found("Parking Spot not found")),
        }
    }

    async fn exists_by_licence_plate_car(
        &self,
        licence_plate_car: &str,
    ) -> Result<bool, AppError> {
        Ok(self
            .spots
            .lock()
            .await
            .values()
            .any(|s| s.licence_plate_car == licence_plate_car))
    }

    async fn exists_by_parking_spot_number(
        &self,
        parking_spot_number: &str,
    ) -> Result<bool, AppError> {
        Ok(self
            .spots
            .lock()
            .await
            .values()
            .any(|s| s.parking_spot_number == parking_spot_number))
    }

    async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError> {
        Ok(self
            .spots
            .lock()
            .await
            .values()
            .any(|s| s.apartment == apartment && s.block == block))
    }
}
