mod common;

use axum::http::StatusCode;
use chrono::{DateTime, Duration, Utc};
use serde_json::{Value, json};

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_returns_stored_record() {
    let server = common::make_server();

    let response = server
        .post("/parking-spot")
        .json(&common::spot_body("101"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<Value>();
    assert_eq!(body["parkingSpotNumber"], "spot-101");
    assert_eq!(body["licencePlateCar"], "PLT-101");
    assert_eq!(body["modelCar"], "Gol");
    assert_eq!(body["brandCar"], "Volkswagen");
    assert_eq!(body["colorCar"], "white");
    assert_eq!(body["responsibleName"], "Maria Silva");
    assert_eq!(body["apartment"], "ap-101");
    assert_eq!(body["block"], "A");
    assert!(body.get("id").is_some());

    let id = body["id"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn test_create_stamps_recent_utc_registration_date() {
    let server = common::make_server();

    let body = common::create_spot(&server, "101").await;

    let registered_at: DateTime<Utc> = body["registrationDate"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    assert!(Utc::now() - registered_at < Duration::seconds(5));
}

#[tokio::test]
async fn test_create_duplicate_plate_conflicts() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;

    // Same plate, everything else fresh.
    let mut body = common::spot_body("202");
    body["licencePlateCar"] = json!("PLT-101");

    let response = server.post("/parking-spot").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_text("Conflict: Licence Plate Car is already in use!");
}

#[tokio::test]
async fn test_create_duplicate_spot_number_conflicts() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;

    let mut body = common::spot_body("202");
    body["parkingSpotNumber"] = json!("spot-101");

    let response = server.post("/parking-spot").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_text("Conflict: Parking Spot is already in use!");
}

#[tokio::test]
async fn test_create_duplicate_apartment_block_conflicts() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;

    let mut body = common::spot_body("202");
    body["apartment"] = json!("ap-101");
    body["block"] = json!("A");

    let response = server.post("/parking-spot").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_text("Conflict: Parking Spot already registered for this apartment/block!");
}

#[tokio::test]
async fn test_plate_check_takes_priority_over_other_conflicts() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;

    // Everything duplicated; only the plate conflict is reported.
    let response = server
        .post("/parking-spot")
        .json(&common::spot_body("101"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_text("Conflict: Licence Plate Car is already in use!");
}

#[tokio::test]
async fn test_repeated_duplicate_create_always_conflicts() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;

    for _ in 0..3 {
        let response = server
            .post("/parking-spot")
            .json(&common::spot_body("101"))
            .await;
        response.assert_status(StatusCode::CONFLICT);
    }

    // Still exactly one record.
    let list = server.get("/parking-spot").await.json::<Value>();
    assert_eq!(list.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_blank_field_is_rejected_before_persistence() {
    let server = common::make_server();

    let mut body = common::spot_body("101");
    body["responsibleName"] = json!("   ");

    let response = server.post("/parking-spot").json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    // Nothing was stored, so the non-blank variant still succeeds.
    let list = server.get("/parking-spot").await.json::<Value>();
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_create_missing_field_is_client_error() {
    let server = common::make_server();

    let mut body = common::spot_body("101");
    body.as_object_mut().unwrap().remove("block");

    let response = server.post("/parking-spot").json(&body).await;
    assert!(response.status_code().is_client_error());
}

// ─── LIST / GET ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_returns_all_records() {
    let server = common::make_server();

    for suffix in ["101", "202", "303"] {
        common::create_spot(&server, suffix).await;
    }

    let response = server.get("/parking-spot").await;
    response.assert_status_ok();

    let list = response.json::<Value>();
    let items = list.as_array().unwrap();
    assert_eq!(items.len(), 3);

    let numbers: Vec<&str> = items
        .iter()
        .map(|i| i["parkingSpotNumber"].as_str().unwrap())
        .collect();
    assert!(numbers.contains(&"spot-101"));
    assert!(numbers.contains(&"spot-202"));
    assert!(numbers.contains(&"spot-303"));
}

#[tokio::test]
async fn test_get_returns_record_as_created() {
    let server = common::make_server();
    let created = common::create_spot(&server, "101").await;
    let id = created["id"].as_str().unwrap();

    let response = server.get(&format!("/parking-spot/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let server = common::make_server();

    let response = server
        .get(&format!("/parking-spot/{}", uuid::Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Parking Spot not found");
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_replaces_fields_and_preserves_metadata() {
    let server = common::make_server();
    let created = common::create_spot(&server, "101").await;
    let id = created["id"].as_str().unwrap();

    let response = server
        .put(&format!("/parking-spot/{id}"))
        .json(&json!({
            "parkingSpotNumber": "spot-777",
            "licencePlateCar": "PLT-777",
            "modelCar": "Civic",
            "brandCar": "Honda",
            "colorCar": "silver",
            "responsibleName": "Ana Pereira",
            "apartment": "ap-777",
            "block": "B"
        }))
        .await;

    response.assert_status_ok();

    let updated = response.json::<Value>();
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["registrationDate"], created["registrationDate"]);
    assert_eq!(updated["parkingSpotNumber"], "spot-777");
    assert_eq!(updated["licencePlateCar"], "PLT-777");
    assert_eq!(updated["responsibleName"], "Ana Pereira");
    assert_eq!(updated["block"], "B");

    // The update is visible on subsequent reads.
    let fetched = server.get(&format!("/parking-spot/{id}")).await.json::<Value>();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_unknown_id_is_not_found() {
    let server = common::make_server();

    let response = server
        .put(&format!("/parking-spot/{}", uuid::Uuid::new_v4()))
        .json(&common::spot_body("101"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Parking Spot not found");
}

#[tokio::test]
async fn test_update_blank_field_is_rejected() {
    let server = common::make_server();
    let created = common::create_spot(&server, "101").await;
    let id = created["id"].as_str().unwrap();

    let mut body = common::spot_body("101");
    body["modelCar"] = json!("");

    let response = server.put(&format!("/parking-spot/{id}")).json(&body).await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_into_existing_plate_conflicts_at_storage() {
    let server = common::make_server();
    common::create_spot(&server, "101").await;
    let second = common::create_spot(&server, "202").await;
    let id = second["id"].as_str().unwrap();

    // The handler does not re-check uniqueness on update; the storage
    // constraint still rejects the duplicate plate as a 409.
    let mut body = common::spot_body("202");
    body["licencePlateCar"] = json!("PLT-101");

    let response = server.put(&format!("/parking-spot/{id}")).json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_text("Conflict: Licence Plate Car is already in use!");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let server = common::make_server();
    let created = common::create_spot(&server, "101").await;
    let id = created["id"].as_str().unwrap();

    let response = server.delete(&format!("/parking-spot/{id}")).await;
    response.assert_status_ok();
    response.assert_text("Parking Spot deleted successfully.");

    let response = server.get(&format!("/parking-spot/{id}")).await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let server = common::make_server();

    let response = server
        .delete(&format!("/parking-spot/{}", uuid::Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    response.assert_text("Parking Spot not found");
}

#[tokio::test]
async fn test_delete_frees_spot_for_new_registration() {
    let server = common::make_server();
    let created = common::create_spot(&server, "101").await;
    let id = created["id"].as_str().unwrap();

    server.delete(&format!("/parking-spot/{id}")).await.assert_status_ok();

    // The same plate/spot/apartment can be registered again.
    let response = server
        .post("/parking-spot")
        .json(&common::spot_body("101"))
        .await;
    response.assert_status(StatusCode::CREATED);
}
