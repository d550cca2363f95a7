//! PostgreSQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ch_core::domain::entities::User;
use ch_core::errors::DomainError;
use ch_core::repositories::UserRepository;

use super::is_unique_violation;

/// PostgreSQL implementation of UserRepository
pub struct PgUserRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PostgreSQL user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a User entity
    fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
        Ok(User {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("failed to get id: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("failed to get email: {e}")))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::Database(format!("failed to get username: {e}")))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::Database(format!("failed to get password_hash: {e}")))?,
            verified: row
                .try_get("verified")
                .map_err(|e| DomainError::Database(format!("failed to get verified: {e}")))?,
            avatar_url: row
                .try_get("avatar_url")
                .map_err(|e| DomainError::Database(format!("failed to get avatar_url: {e}")))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Database(format!("failed to get created_at: {e}")))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Database(format!("failed to get updated_at: {e}")))?,
        })
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, password_hash,
                   verified, avatar_url, created_at, updated_at
            FROM users
            WHERE id = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, password_hash,
                   verified, avatar_url, created_at, updated_at
            FROM users
            WHERE email = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = r#"
            SELECT id, email, username, password_hash,
                   verified, avatar_url, created_at, updated_at
            FROM users
            WHERE username = $1
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, username, password_hash,
                verified, avatar_url, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#;

        sqlx::query(query)
            .bind(user.id)
            .bind(&user.email)
            .bind(&user.username)
            .bind(&user.password_hash)
            .bind(user.verified)
            .bind(&user.avatar_url)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::conflict("user")
                } else {
                    DomainError::Database(format!("failed to create user: {e}"))
                }
            })?;

        Ok(user)
    }

    async fn mark_verified(&self, id: Uuid) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE users
            SET verified = TRUE, updated_at = NOW()
            WHERE id = $1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("failed to mark user verified: {e}")))?;

        Ok(result.rows_affected() > 0)
    }
}
