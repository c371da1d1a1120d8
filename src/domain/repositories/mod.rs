//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are
//! auto-generated via `mockall` for testing.

pub mod parking_spot_repository;

pub use parking_spot_repository::ParkingSpotRepository;

#[cfg(test)]
pub use parking_spot_repository::MockParkingSpotRepository;
