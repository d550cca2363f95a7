//! User repository trait defining the interface for account persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations handle the actual database access while keeping the
/// abstraction boundary between domain and infrastructure layers. Email
/// uniqueness is enforced by the store; `create` must surface a uniqueness
/// violation as `DomainError::Conflict` so the race between an optimistic
/// existence check and the insert resolves to the same error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - the created user
    /// * `Err(DomainError::Conflict)` - the email is already registered
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Flip the verification flag for a user
    ///
    /// # Returns
    /// * `Ok(true)` - user found and marked verified
    /// * `Ok(false)` - no user with that id
    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError>;
}
