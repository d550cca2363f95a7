//! Signup input for the user service.

use serde::{Deserialize, Serialize};

/// Data required to register a new account
///
/// The password is still plaintext here; it is hashed by the user service
/// before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub password: String,
}
