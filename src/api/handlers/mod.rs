//! HTTP request handlers.

pub mod health;
pub mod parking_spots;

pub use health::health_handler;
pub use parking_spots::{
    delete_parking_spot_handler, get_all_parking_spots_handler, get_one_parking_spot_handler,
    save_parking_spot_handler, update_parking_spot_handler,
};
