//! Data-transfer structs validated at the boundary.

pub mod auth;
pub mod contact;
pub mod error;
pub mod user;

pub use auth::{LoginRequest, TokenResponse};
pub use contact::{ContactRequest, ContactResponse, ContactSearchQuery, ContactUpdateRequest};
pub use error::ErrorResponse;
pub use user::{SignupRequest, UserResponse};
