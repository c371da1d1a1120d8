//! Repository implementations.
//!
//! - [`PgParkingSpotRepository`] - PostgreSQL storage via SQLx, the
//!   production implementation
//! - [`InMemoryParkingSpotRepository`] - a map-backed fake that enforces the
//!   same uniqueness rules, used by integration tests

pub mod in_memory_parking_spot_repository;
pub mod pg_parking_spot_repository;

pub use in_memory_parking_spot_repository::InMemoryParkingSpotRepository;
pub use pg_parking_spot_repository::PgParkingSpotRepository;
