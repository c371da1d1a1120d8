//! DTO for the health check endpoint.

use serde::Serialize;

/// Service liveness information.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
