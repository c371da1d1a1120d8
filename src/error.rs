//! Application error type and HTTP translation.
//!
//! Every domain error is fully handled here and turned into a status code
//! plus a plain-text body. Nothing is logged-and-swallowed: unexpected
//! database failures are logged and surfaced as 500, never retried.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::utils::db_error::conflict_from_unique_violation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Malformed or incomplete input, rejected before persistence is touched.
    Validation(String),
    /// Unknown record id on get/update/delete.
    NotFound(String),
    /// Uniqueness constraint violation (plate, spot number, apartment+block).
    Conflict(String),
    /// Unexpected storage failure.
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            AppError::Conflict(message) => (StatusCode::CONFLICT, message),
            AppError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        (status, message).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        // A unique violation means a concurrent writer won the check-then-act
        // race; it must surface as the documented 409, not a generic 500.
        if let Some(conflict) = conflict_from_unique_violation(&e) {
            return conflict;
        }

        tracing::error!("database error: {e}");
        AppError::internal("Internal server error")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(m) => format!("{field}: {m}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .next()
            .unwrap_or_else(|| "Invalid request body".to_string());

        AppError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_409() {
        let response =
            AppError::conflict("Conflict: Licence Plate Car is already in use!").into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = AppError::not_found("Parking Spot not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response = AppError::bad_request("apartment: must not be blank").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let response = AppError::internal("Internal server error").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
