//! Handlers for the `/parking-spot` resource.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::parking_spot::{ParkingSpotRequest, ParkingSpotResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new parking spot.
///
/// # Endpoint
///
/// `POST /parking-spot`
///
/// The three uniqueness checks run in fixed priority order; only the first
/// violated constraint is reported. The checks are advisory — the storage
/// constraints remain the source of truth under concurrent creates, and a
/// constraint violation surfaces as the same 409.
///
/// # Errors
///
/// Returns 400 if any body field is missing or blank.
/// Returns 409 if the licence plate, spot number, or apartment/block pair
/// is already in use.
pub async fn save_parking_spot_handler(
    State(state): State<AppState>,
    Json(payload): Json<ParkingSpotRequest>,
) -> Result<(StatusCode, Json<ParkingSpotResponse>), AppError> {
    payload.validate()?;

    let service = &state.parking_spot_service;

    if service
        .exists_by_licence_plate_car(&payload.licence_plate_car)
        .await?
    {
        return Err(AppError::conflict(
            "Conflict: Licence Plate Car is already in use!",
        ));
    }

    if service
        .exists_by_parking_spot_number(&payload.parking_spot_number)
        .await?
    {
        return Err(AppError::conflict("Conflict: Parking Spot is already in use!"));
    }

    if service
        .exists_by_apartment_and_block(&payload.apartment, &payload.block)
        .await?
    {
        return Err(AppError::conflict(
            "Conflict: Parking Spot already registered for this apartment/block!",
        ));
    }

    let spot = service.register(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(spot.into())))
}

/// Lists all registered parking spots.
///
/// # Endpoint
///
/// `GET /parking-spot`
pub async fn get_all_parking_spots_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ParkingSpotResponse>>, AppError> {
    let spots = state.parking_spot_service.find_all().await?;

    Ok(Json(spots.into_iter().map(Into::into).collect()))
}

/// Retrieves one parking spot by id.
///
/// # Endpoint
///
/// `GET /parking-spot/{id}`
///
/// # Errors
///
/// Returns 404 if no spot has this id.
pub async fn get_one_parking_spot_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let spot = state.parking_spot_service.get(id).await?;

    Ok(Json(spot.into()))
}

/// Replaces all mutable fields of an existing parking spot.
///
/// # Endpoint
///
/// `PUT /parking-spot/{id}`
///
/// `id` and `registrationDate` are preserved unchanged. Uniqueness is not
/// re-checked at this layer; the storage constraints still reject duplicates
/// with a 409.
///
/// # Errors
///
/// Returns 400 if any body field is missing or blank.
/// Returns 404 if no spot has this id.
pub async fn update_parking_spot_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(payload): Json<ParkingSpotRequest>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    payload.validate()?;

    let spot = state.parking_spot_service.update(id, payload.into()).await?;

    Ok(Json(spot.into()))
}

/// Deletes a parking spot by id.
///
/// # Endpoint
///
/// `DELETE /parking-spot/{id}`
///
/// # Errors
///
/// Returns 404 if no spot has this id.
pub async fn delete_parking_spot_handler(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<String, AppError> {
    state.parking_spot_service.delete(id).await?;

    Ok("Parking Spot deleted successfully.".to_string())
}
