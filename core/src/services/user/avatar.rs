//! Avatar resolution seam.

use async_trait::async_trait;
use thiserror::Error;

/// Failure from an avatar provider
///
/// Avatar lookup is best-effort: callers log this and continue without an
/// avatar, they never fail the parent operation on it.
#[derive(Error, Debug, Clone)]
#[error("avatar lookup failed: {0}")]
pub struct AvatarError(pub String);

/// Provider resolving an avatar URL for an email address
#[async_trait]
pub trait AvatarProvider: Send + Sync {
    /// Resolve an avatar URL for `email`
    ///
    /// # Returns
    /// * `Ok(Some(url))` - an avatar exists
    /// * `Ok(None)` - the provider has no avatar for this address
    /// * `Err(AvatarError)` - the lookup itself failed
    async fn avatar_url(&self, email: &str) -> Result<Option<String>, AvatarError>;
}

/// Provider that never yields an avatar, for tests and minimal deployments
pub struct NoopAvatarProvider;

#[async_trait]
impl AvatarProvider for NoopAvatarProvider {
    async fn avatar_url(&self, _email: &str) -> Result<Option<String>, AvatarError> {
        Ok(None)
    }
}
