//! Password hashing utilities
//!
//! bcrypt with the default cost factor. Verification goes through the
//! bcrypt verifier, which compares digests in constant time.

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::errors::DomainError;

/// Hashes a plaintext password for storage
pub fn hash_password(plain: &str) -> Result<String, DomainError> {
    hash(plain, DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("password hashing failed: {e}"),
    })
}

/// Checks a plaintext password against a stored hash
///
/// Any malformed hash counts as a failed verification rather than an error;
/// the caller cannot distinguish the two and must not leak the difference.
pub fn verify_password(plain: &str, hashed: &str) -> bool {
    verify(plain, hashed).unwrap_or(false)
}
