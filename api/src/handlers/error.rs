//! Mapping from domain errors to HTTP responses.
//!
//! This is the single place where `DomainError` becomes a status code.
//! Every response carries a fixed, non-leaking message; the original error
//! detail is logged and never serialized to the client.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use ch_core::errors::DomainError;

use crate::dto::ErrorResponse;

/// Fixed detail for failed credential/token checks
pub const CREDENTIALS_DETAIL: &str = "Could not validate credentials";

/// Convert a domain error to its HTTP response
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    match &error {
        DomainError::Auth(auth_error) => {
            // AuthError messages are fixed by construction.
            ErrorResponse::new("unauthorized", auth_error.to_string())
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Token(token_error) => {
            tracing::debug!(error = %token_error, "token rejected");
            ErrorResponse::new("unauthorized", CREDENTIALS_DETAIL)
                .to_response(StatusCode::UNAUTHORIZED)
        }
        DomainError::Unauthorized => ErrorResponse::new("unauthorized", CREDENTIALS_DETAIL)
            .to_response(StatusCode::UNAUTHORIZED),
        DomainError::Conflict { resource } => {
            let message = match resource.as_str() {
                "user" => "User with this email already exists.",
                "contact" => "Contact with this email already exists.",
                _ => "Resource already exists.",
            };
            ErrorResponse::new("conflict", message).to_response(StatusCode::CONFLICT)
        }
        DomainError::NotFound { resource } => {
            let message = match resource.as_str() {
                "contact" => "Contact not found",
                "user" => "User not found",
                _ => "Resource not found",
            };
            ErrorResponse::new("not_found", message).to_response(StatusCode::NOT_FOUND)
        }
        DomainError::UnprocessableEntity { message } => {
            ErrorResponse::new("unprocessable_entity", message)
                .to_response(StatusCode::UNPROCESSABLE_ENTITY)
        }
        DomainError::Validation { message } => {
            ErrorResponse::new("validation_error", message).to_response(StatusCode::BAD_REQUEST)
        }
        DomainError::Database(detail) => {
            tracing::error!(error = %detail, "storage failure");
            ErrorResponse::new("internal_error", "An unexpected database error occurred.")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
        DomainError::Internal { message } => {
            tracing::error!(error = %message, "internal failure");
            ErrorResponse::new("internal_error", "An internal error occurred")
                .to_response(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Convert request-body validation failures to a 400 response
pub fn handle_validation_errors(errors: ValidationErrors) -> HttpResponse {
    let detail: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let messages: Vec<String> = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{field}: {}", messages.join(", "))
        })
        .collect();

    ErrorResponse::new("validation_error", detail.join("; "))
        .to_response(StatusCode::BAD_REQUEST)
}
