//! Signup request and account response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ch_core::domain::entities::User;
use ch_core::domain::value_objects::NewUser;

/// Request body for POST /auth/signup
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 2, max = 50, message = "must be 2-50 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: String,
}

impl From<SignupRequest> for NewUser {
    fn from(body: SignupRequest) -> Self {
        Self {
            email: body.email,
            username: body.username,
            password: body.password,
        }
    }
}

/// Account representation returned to clients; never carries the password
/// hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub verified: bool,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            verified: user.verified,
            avatar_url: user.avatar_url,
            created_at: user.created_at,
        }
    }
}
