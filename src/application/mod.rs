//! Application layer: service orchestration between HTTP and persistence.

pub mod services;
