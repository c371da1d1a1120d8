//! Translation of Postgres unique-violation errors to conflict responses.
//!
//! The application-level existence checks on create are only an optimization
//! for friendlier error messages; under concurrency two requests can both
//! pass them before either commits. The named unique constraints on
//! `parking_spots` are the actual source of truth, and a violation must be
//! reported as the same 409 the existence checks would have produced.

use crate::error::AppError;

const LICENCE_PLATE_CONSTRAINT: &str = "parking_spots_licence_plate_car_key";
const SPOT_NUMBER_CONSTRAINT: &str = "parking_spots_parking_spot_number_key";
const APARTMENT_BLOCK_CONSTRAINT: &str = "parking_spots_apartment_block_key";

/// Maps a unique-violation database error to its conflict response.
///
/// Returns `None` for anything that is not a unique violation on one of the
/// `parking_spots` constraints.
pub fn conflict_from_unique_violation(e: &sqlx::Error) -> Option<AppError> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    match db_err.constraint() {
        Some(LICENCE_PLATE_CONSTRAINT) => Some(AppError::conflict(
            "Conflict: Licence Plate Car is already in use!",
        )),
        Some(SPOT_NUMBER_CONSTRAINT) => {
            Some(AppError::conflict("Conflict: Parking Spot is already in use!"))
        }
        Some(APARTMENT_BLOCK_CONSTRAINT) => Some(AppError::conflict(
            "Conflict: Parking Spot already registered for this apartment/block!",
        )),
        _ => None,
    }
}
