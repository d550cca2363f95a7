//! User service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::value_objects::NewUser;
use crate::errors::DomainError;
use crate::repositories::UserRepository;
use crate::services::auth::hash_password;

use super::avatar::AvatarProvider;

/// Service for account creation and lookups
pub struct UserService<U: UserRepository, A: AvatarProvider> {
    users: Arc<U>,
    avatars: Arc<A>,
}

impl<U: UserRepository, A: AvatarProvider> UserService<U, A> {
    /// Creates a new user service
    pub fn new(users: Arc<U>, avatars: Arc<A>) -> Self {
        Self { users, avatars }
    }

    /// Registers a new account
    ///
    /// The existence check is optimistic; the store's unique constraint
    /// decides the race between two concurrent signups, and the repository
    /// surfaces its violation as the same `Conflict`. Avatar resolution is
    /// best-effort and never fails the signup.
    pub async fn create_user(&self, body: NewUser) -> Result<User, DomainError> {
        if self.users.find_by_email(&body.email).await?.is_some() {
            return Err(DomainError::conflict("user"));
        }

        let password_hash = hash_password(&body.password)?;

        let avatar_url = match self.avatars.avatar_url(&body.email).await {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(email = %body.email, error = %e, "could not retrieve avatar");
                None
            }
        };

        let mut user = User::new(body.email, body.username, password_hash);
        user.avatar_url = avatar_url;

        self.users.create(user).await
    }

    /// Looks up a user by id
    pub async fn get_user_by_id(&self, user_id: Uuid) -> Result<Option<User>, DomainError> {
        self.users.find_by_id(user_id).await
    }

    /// Looks up a user by username
    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.users.find_by_username(username).await
    }

    /// Looks up a user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.users.find_by_email(email).await
    }
}
