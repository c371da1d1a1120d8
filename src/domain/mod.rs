//! Domain layer containing the business entity and repository contract.
//!
//! - [`entities`] - The parking spot record and its creation input
//! - [`repositories`] - Data access trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on the HTTP or persistence layers;
//! orchestration lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
