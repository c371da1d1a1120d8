//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/parking-spot`  - CRUD resource (see [`crate::api::routes`])
//! - `GET /health`    - Liveness check
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin, preflight cached for 3600 seconds
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use axum::{Router, routing::get};
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let router = Router::new()
        .merge(api::routes::parking_spot_routes())
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
