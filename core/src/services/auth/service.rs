//! Authentication service implementation

use std::sync::Arc;

use crate::domain::entities::token::{TokenPair, TokenScope};
use crate::domain::entities::User;
use crate::errors::{AuthError, DomainError, TokenError};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

use super::password::verify_password;

/// Service for login, bearer-token identity resolution and email
/// confirmation
///
/// Owns the token service; the user repository is injected per the
/// repository abstraction so the service is testable against mocks.
pub struct AuthService<U: UserRepository> {
    users: Arc<U>,
    tokens: TokenService,
}

impl<U: UserRepository> AuthService<U> {
    /// Creates a new authentication service
    pub fn new(users: Arc<U>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Authenticates a user and issues an access/refresh token pair
    ///
    /// The identifier is an email when it contains `@`, a username
    /// otherwise. Unknown account and wrong password produce the same
    /// error. An unverified account is rejected even with the correct
    /// password.
    pub async fn login(&self, identifier: &str, password: &str) -> Result<TokenPair, DomainError> {
        let user = if identifier.contains('@') {
            self.users.find_by_email(identifier).await?
        } else {
            self.users.find_by_username(identifier).await?
        };

        let user = match user {
            Some(user) if verify_password(password, &user.password_hash) => user,
            _ => return Err(AuthError::InvalidCredentials.into()),
        };

        if !user.verified {
            return Err(AuthError::EmailNotVerified.into());
        }

        let access_token = self.tokens.create_access_token(&user.email, None)?;
        let refresh_token = self.tokens.create_refresh_token(&user.email)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Resolves the account behind a bearer access token
    ///
    /// This is the per-request identity resolution used to guard protected
    /// endpoints: decode with the access scope, then look the account up by
    /// the decoded email.
    pub async fn resolve_bearer(&self, token: &str) -> Result<User, DomainError> {
        let email = self.tokens.decode(token, TokenScope::Access)?;

        self.users
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::Unauthorized)
    }

    /// Issues an email-verification token for `email`
    pub fn issue_email_token(&self, email: &str) -> Result<String, DomainError> {
        Ok(self.tokens.create_email_token(email)?)
    }

    /// Confirms an account from an email-verification token
    ///
    /// A token that fails signature/expiry/format checks is unprocessable
    /// (the link is broken), while a well-formed token of the wrong scope
    /// is an authorization failure.
    pub async fn confirm_email(&self, token: &str) -> Result<User, DomainError> {
        let email = self
            .tokens
            .decode(token, TokenScope::EmailVerification)
            .map_err(|e| match e {
                TokenError::InvalidScope | TokenError::MissingSubject => DomainError::Token(e),
                _ => DomainError::UnprocessableEntity {
                    message: "Invalid token for email verification".to_string(),
                },
            })?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or_else(|| DomainError::not_found("user"))?;

        self.users.mark_verified(user.id).await?;

        Ok(User {
            verified: true,
            ..user
        })
    }
}
