//! Infrastructure layer: concrete implementations of domain contracts.

pub mod persistence;
