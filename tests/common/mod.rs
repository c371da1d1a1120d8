#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use parking_control::application::services::ParkingSpotService;
use parking_control::infrastructure::persistence::InMemoryParkingSpotRepository;
use parking_control::state::AppState;
use serde_json::{Value, json};

/// Builds application state backed by the in-memory repository.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(InMemoryParkingSpotRepository::new());
    let service = Arc::new(ParkingSpotService::new(repository));
    AppState::new(service)
}

/// Spins up a test server with the full parking spot route table.
pub fn make_server() -> TestServer {
    let app = Router::new()
        .merge(parking_control::api::routes::parking_spot_routes())
        .with_state(create_test_state());
    TestServer::new(app).unwrap()
}

/// A valid create/update body. Field values are varied by suffix so callers
/// can mint non-conflicting records.
pub fn spot_body(suffix: &str) -> Value {
    json!({
        "parkingSpotNumber": format!("spot-{suffix}"),
        "licencePlateCar": format!("PLT-{suffix}"),
        "modelCar": "Gol",
        "brandCar": "Volkswagen",
        "colorCar": "white",
        "responsibleName": "Maria Silva",
        "apartment": format!("ap-{suffix}"),
        "block": "A"
    })
}

/// Creates a record through the API and returns the stored representation.
pub async fn create_spot(server: &TestServer, suffix: &str) -> Value {
    let response = server.post("/parking-spot").json(&spot_body(suffix)).await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json::<Value>()
}
