//! PostgreSQL implementation of the ContactRepository trait.
//!
//! Every query filters on `user_id`, so a contact is only ever visible to
//! the account that owns it.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use ch_core::domain::entities::Contact;
use ch_core::domain::value_objects::{ContactFilter, ContactUpdate};
use ch_core::errors::DomainError;
use ch_core::repositories::ContactRepository;
use ch_shared::types::PageQuery;

use super::is_unique_violation;

/// PostgreSQL implementation of ContactRepository
pub struct PgContactRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgContactRepository {
    /// Create a new PostgreSQL contact repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to a Contact entity
    fn row_to_contact(row: &sqlx::postgres::PgRow) -> Result<Contact, DomainError> {
        Ok(Contact {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::Database(format!("failed to get id: {e}")))?,
            user_id: row
                .try_get("user_id")
                .map_err(|e| DomainError::Database(format!("failed to get user_id: {e}")))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::Database(format!("failed to get first_name: {e}")))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::Database(format!("failed to get last_name: {e}")))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::Database(format!("failed to get email: {e}")))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(|e| DomainError::Database(format!("failed to get phone_number: {e}")))?,
            birthday: row
                .try_get::<Option<NaiveDate>, _>("birthday")
                .map_err(|e| DomainError::Database(format!("failed to get birthday: {e}")))?,
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
impl ContactRepository for PgContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        let query = r#"
            INSERT INTO contacts (
                id, user_id, first_name, last_name, email,
                phone_number, birthday, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#;

        sqlx::query(query)
            .bind(contact.id)
            .bind(contact.user_id)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone_number)
            .bind(contact.birthday)
            .bind(contact.created_at)
            .bind(contact.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::conflict("contact")
                } else {
                    DomainError::Database(format!("failed to create contact: {e}"))
                }
            })?;

        Ok(contact)
    }

    async fn find_by_id(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let query = r#"
            SELECT id, user_id, first_name, last_name, email,
                   phone_number, birthday, created_at, updated_at
            FROM contacts
            WHERE id = $1 AND user_id = $2
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_contact(&row)?)),
            None => Ok(None),
        }
    }

    async fn search(
        &self,
        owner: Uuid,
        filter: &ContactFilter,
        page: PageQuery,
    ) -> Result<Vec<Contact>, DomainError> {
        // Filters are OR-combined: a row matches when ANY given field
        // matches; with no filters every row of the owner matches.
        let query = r#"
            SELECT id, user_id, first_name, last_name, email,
                   phone_number, birthday, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
              AND (
                   ($2::text IS NULL AND $3::text IS NULL AND $4::text IS NULL)
                OR ($2::text IS NOT NULL AND first_name ILIKE '%' || $2 || '%')
                OR ($3::text IS NOT NULL AND last_name  ILIKE '%' || $3 || '%')
                OR ($4::text IS NOT NULL AND email      ILIKE '%' || $4 || '%')
              )
            ORDER BY created_at, id
            OFFSET $5 LIMIT $6
        "#;

        let rows = sqlx::query(query)
            .bind(owner)
            .bind(&filter.first_name)
            .bind(&filter.last_name)
            .bind(&filter.email)
            .bind(page.offset_i64())
            .bind(page.limit_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        update: ContactUpdate,
    ) -> Result<Option<Contact>, DomainError> {
        // Fetch, apply the partial update in memory, write back. An absent
        // contact short-circuits to None without touching the store.
        let mut contact = match self.find_by_id(owner, id).await? {
            Some(contact) => contact,
            None => return Ok(None),
        };

        contact.apply_update(update);

        let query = r#"
            UPDATE contacts
            SET first_name = $1,
                last_name = $2,
                email = $3,
                phone_number = $4,
                birthday = $5,
                updated_at = $6
            WHERE id = $7 AND user_id = $8
        "#;

        sqlx::query(query)
            .bind(&contact.first_name)
            .bind(&contact.last_name)
            .bind(&contact.email)
            .bind(&contact.phone_number)
            .bind(contact.birthday)
            .bind(contact.updated_at)
            .bind(contact.id)
            .bind(owner)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::conflict("contact")
                } else {
                    DomainError::Database(format!("failed to update contact: {e}"))
                }
            })?;

        Ok(Some(contact))
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let query = r#"
            DELETE FROM contacts
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, first_name, last_name, email,
                      phone_number, birthday, created_at, updated_at
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("failed to delete contact: {e}")))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_contact(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_birthday(
        &self,
        owner: Uuid,
        dates: &[(u32, u32)],
    ) -> Result<Vec<Contact>, DomainError> {
        if dates.is_empty() {
            return Ok(Vec::new());
        }

        // Each (month, day) pair is encoded as month * 100 + day so the
        // whole window binds as one int array.
        let encoded: Vec<i32> = dates.iter().map(|(m, d)| (m * 100 + d) as i32).collect();

        let query = r#"
            SELECT id, user_id, first_name, last_name, email,
                   phone_number, birthday, created_at, updated_at
            FROM contacts
            WHERE user_id = $1
              AND birthday IS NOT NULL
              AND (EXTRACT(MONTH FROM birthday)::int * 100
                   + EXTRACT(DAY FROM birthday)::int) = ANY($2)
            ORDER BY created_at, id
        "#;

        let rows = sqlx::query(query)
            .bind(owner)
            .bind(&encoded)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Database(format!("database query failed: {e}")))?;

        rows.iter().map(Self::row_to_contact).collect()
    }
}
