//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::ParkingSpotService;

/// Cloneable handle to the service layer.
///
/// The service is stateless between requests; all durable state lives behind
/// the repository the service wraps.
#[derive(Clone)]
pub struct AppState {
    pub parking_spot_service: Arc<ParkingSpotService>,
}

impl AppState {
    pub fn new(parking_spot_service: Arc<ParkingSpotService>) -> Self {
        Self {
            parking_spot_service,
        }
    }
}
