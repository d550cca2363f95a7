//! Login request and token response DTOs.

use serde::{Deserialize, Serialize};

use ch_core::domain::entities::TokenPair;

/// Form body for POST /auth/login
///
/// `username` holds either the username or the email address; the auth
/// service dispatches on the presence of `@`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Token pair returned on successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
        }
    }
}
