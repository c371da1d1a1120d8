//! REST API layer: DTOs, handlers, and route configuration.

pub mod dto;
pub mod handlers;
pub mod routes;
