//! Route configuration for the parking spot resource.

use crate::api::handlers::{
    delete_parking_spot_handler, get_all_parking_spots_handler, get_one_parking_spot_handler,
    save_parking_spot_handler, update_parking_spot_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Routes for the `/parking-spot` resource.
///
/// # Endpoints
///
/// - `POST   /parking-spot`      - Register a new spot
/// - `GET    /parking-spot`      - List all spots
/// - `GET    /parking-spot/{id}` - Retrieve one spot
/// - `PUT    /parking-spot/{id}` - Replace a spot's mutable fields
/// - `DELETE /parking-spot/{id}` - Delete a spot
pub fn parking_spot_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/parking-spot",
            get(get_all_parking_spots_handler).post(save_parking_spot_handler),
        )
        .route(
            "/parking-spot/{id}",
            get(get_one_parking_spot_handler)
                .put(update_parking_spot_handler)
                .delete(delete_parking_spot_handler),
        )
}
