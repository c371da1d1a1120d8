//! DTOs for the parking spot resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::domain::entities::{NewParkingSpot, ParkingSpot};

/// Request body for creating or replacing a parking spot.
///
/// Every field is required and must not be blank (whitespace-only counts
/// as blank).
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotRequest {
    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub parking_spot_number: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub licence_plate_car: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub model_car: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub brand_car: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub color_car: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub responsible_name: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub apartment: String,

    #[validate(custom(function = not_blank, message = "must not be blank"))]
    pub block: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

impl From<ParkingSpotRequest> for NewParkingSpot {
    fn from(dto: ParkingSpotRequest) -> Self {
        Self {
            parking_spot_number: dto.parking_spot_number,
            licence_plate_car: dto.licence_plate_car,
            model_car: dto.model_car,
            brand_car: dto.brand_car,
            color_car: dto.color_car,
            responsible_name: dto.responsible_name,
            apartment: dto.apartment,
            block: dto.block,
        }
    }
}

/// A stored parking spot as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpotResponse {
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

impl From<ParkingSpot> for ParkingSpotResponse {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            id: spot.id,
            parking_spot_number: spot.parking_spot_number,
            licence_plate_car: spot.licence_plate_car,
            model_car: spot.model_car,
            brand_car: spot.brand_car,
            color_car: spot.color_car,
            responsible_name: spot.responsible_name,
            apartment: spot.apartment,
            block: spot.block,
            registration_date: spot.registration_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> ParkingSpotRequest {
        ParkingSpotRequest {
            parking_spot_number: "101A".to_string(),
            licence_plate_car: "ABC1234".to_string(),
            model_car: "Gol".to_string(),
            brand_car: "Volkswagen".to_string(),
            color_car: "white".to_string(),
            responsible_name: "Maria Silva".to_string(),
            apartment: "101".to_string(),
            block: "A".to_string(),
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_blank_field_is_rejected() {
        let mut req = request();
        req.apartment = "   ".to_string();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("apartment"));
    }

    #[test]
    fn test_empty_field_is_rejected() {
        let mut req = request();
        req.licence_plate_car = String::new();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_uses_camel_case_wire_names() {
        let spot = ParkingSpot::register(request().into());
        let json = serde_json::to_value(ParkingSpotResponse::from(spot)).unwrap();

        assert!(json.get("parkingSpotNumber").is_some());
        assert!(json.get("licencePlateCar").is_some());
        assert!(json.get("responsibleName").is_some());
        assert!(json.get("registrationDate").is_some());
        assert!(json.get("parking_spot_number").is_none());
    }
}
