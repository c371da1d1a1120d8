//! Parking spot entity: one spot, one vehicle, one apartment/block.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A registered parking spot.
///
/// Three uniqueness rules hold across all records: no two spots share a
/// licence plate, a spot number, or an (apartment, block) pair. `id` and
/// `registration_date` are generated once at registration and never change.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ParkingSpot {
    pub id: Uuid,
    pub parking_spot_number: String,
    pub licence_plate_car: String,
    pub model_car: String,
    pub brand_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
    pub registration_date: DateTime<Utc>,
}

impl ParkingSpot {
    /// Builds a new record from registration input, stamping a fresh id and
    /// the current UTC time as the registration date.
    pub fn register(input: NewParkingSpot) -> Self {
        Self {
            id: Uuid::new_v4(),
            parking_spot_number: input.parking_spot_number,
            licence_plate_car: input.licence_plate_car,
            model_car: input.model_car,
            brand_car: input.brand_car,
            color_car: input.color_car,
            responsible_name: input.responsible_name,
            apartment: input.apartment,
            block: input.block,
            registration_date: Utc::now(),
        }
    }

    /// Copies all mutable fields from `input`, preserving `id` and
    /// `registration_date`.
    pub fn apply(&self, input: NewParkingSpot) -> Self {
        Self {
            id: self.id,
            parking_spot_number: input.parking_spot_number,
            licence_plate_car: input.licence_plate_car,
            model_car: input.model_car,
            brand_car: input.brand_car,
            color_car: input.color_car,
            responsible_name: input.responsible_name,
            apartment: input.apartment,
            block: input.block,
            registration_date: self.registration_date,
        }
    }
}

/// Input data for registering or updating a parking spot.
#[derive(Debug, Clone)]
pub struct NewParkingSpot {
    pub parking_spot_number: String,
    pub licence_plate_car: String,
    pub model_car: String,
    pub brand_car: String,
    pub color_car: String,
    pub responsible_name: String,
    pub apartment: String,
    pub block: String,
}
