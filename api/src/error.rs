//! Unified error types for the CVHub API
//!
//! This module defines error types for each layer:
//! - `DomainError`: Core business logic errors
//! - `PricingError`: Pricing engine failures on corrupt numeric state
//! - `EmailCheckError`: DNS-over-HTTPS resolver errors
//! - `AuthError`: Password hashing and token errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::ValidationErrors;

/// Domain layer errors - pure business logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Pricing engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("original price cannot be negative")]
    NegativeOriginalPrice,

    #[error("price values must be finite numbers")]
    NotANumber,
}

impl From<PricingError> for DomainError {
    fn from(e: PricingError) -> Self {
        DomainError::InvalidArgument(e.to_string())
    }
}

/// Domain-existence resolver errors
#[derive(Debug, Error)]
pub enum EmailCheckError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Resolver timed out after {0} ms")]
    Timeout(u64),

    #[error("Resolver returned status {0}")]
    Status(u16),

    #[error("Malformed resolver response: {0}")]
    Malformed(String),
}

/// Password hashing and token errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Failed to hash password: {0}")]
    Hashing(String),

    #[error("Failed to generate token: {0}")]
    Token(String),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Expected {expected} token")]
    WrongTokenType { expected: &'static str },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Conflict: {0}")]
    Conflict(ValidationErrors),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden")]
    Forbidden,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

/// Field-keyed error body: `{"errors": {"email": "..."}}`
#[derive(Serialize)]
struct FieldErrorResponse<'a> {
    errors: &'a ValidationErrors,
}

fn field_errors(status: StatusCode, errors: &ValidationErrors) -> Response {
    (status, Json(FieldErrorResponse { errors })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Validation(errors) => {
                return field_errors(StatusCode::UNPROCESSABLE_ENTITY, errors);
            }
            AppError::Conflict(errors) => {
                return field_errors(StatusCode::CONFLICT, errors);
            }
            AppError::Domain(DomainError::NotFound(msg)) => {
                (StatusCode::NOT_FOUND, "Not found", Some(msg.clone()))
            }
            AppError::Domain(DomainError::AlreadyExists(msg)) => {
                (StatusCode::CONFLICT, "Already exists", Some(msg.clone()))
            }
            AppError::Domain(DomainError::InvalidArgument(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid argument",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Auth(e) => match e {
                AuthError::InvalidToken(_) | AuthError::WrongTokenType { .. } => {
                    (StatusCode::UNAUTHORIZED, "Unauthorized", None)
                }
                _ => {
                    tracing::error!("Auth error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error",
                        None,
                    )
                }
            },
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden", None),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
