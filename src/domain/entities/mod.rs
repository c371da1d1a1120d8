//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is carried by a separate struct ([`NewParkingSpot`]) so that generated
//! fields (`id`, `registration_date`) can never arrive from the outside.

pub mod parking_spot;

pub use parking_spot::{NewParkingSpot, ParkingSpot};
