//! Contact repository trait defining the interface for contact persistence.

use async_trait::async_trait;
use ch_shared::types::PageQuery;
use uuid::Uuid;

use crate::domain::entities::Contact;
use crate::domain::value_objects::{ContactFilter, ContactUpdate};
use crate::errors::DomainError;

/// Repository trait for Contact entity persistence operations
///
/// Every operation is scoped to the owning account: `owner` is always part
/// of the query, so one account can never read or mutate another's
/// contacts. Contact email uniqueness is enforced by the store and surfaces
/// from `create` as `DomainError::Conflict`.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact
    ///
    /// # Returns
    /// * `Ok(Contact)` - the created contact
    /// * `Err(DomainError::Conflict)` - a contact with that email exists
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError>;

    /// Find one of `owner`'s contacts by id
    async fn find_by_id(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError>;

    /// Search `owner`'s contacts
    ///
    /// Filter fields are case-insensitive substrings, OR-combined when more
    /// than one is given; an empty filter lists everything. Results are
    /// paginated by `page`.
    async fn search(
        &self,
        owner: Uuid,
        filter: &ContactFilter,
        page: PageQuery,
    ) -> Result<Vec<Contact>, DomainError>;

    /// Apply a partial update to one of `owner`'s contacts
    ///
    /// # Returns
    /// * `Ok(Some(Contact))` - the updated contact
    /// * `Ok(None)` - no such contact for this owner
    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        update: ContactUpdate,
    ) -> Result<Option<Contact>, DomainError>;

    /// Delete one of `owner`'s contacts, returning the deleted record
    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError>;

    /// Find `owner`'s contacts whose birthday `(month, day)` is in `dates`,
    /// ignoring the birth year
    async fn find_by_birthday(
        &self,
        owner: Uuid,
        dates: &[(u32, u32)],
    ) -> Result<Vec<Contact>, DomainError>;
}
