//! Domain-specific error types for authentication and token operations
//!
//! These errors carry the fixed, non-leaking messages returned to clients;
//! anything sensitive stays in logs at the boundary layer.

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown account or wrong password; one message for both so the
    /// response does not reveal whether the account exists
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Email not verified")]
    EmailNotVerified,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid scope for token")]
    InvalidScope,

    #[error("Missing subject claim")]
    MissingSubject,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
