//! Contact service implementation

use std::sync::Arc;

use ch_shared::types::PageQuery;
use chrono::{Datelike, Days, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::entities::Contact;
use crate::domain::value_objects::{ContactFilter, ContactUpdate, NewContact};
use crate::errors::DomainError;
use crate::repositories::ContactRepository;

/// Length of the rolling upcoming-birthday window, in days (today
/// inclusive)
pub const BIRTHDAY_WINDOW_DAYS: u64 = 7;

/// The `(month, day)` pairs covered by a `days`-long window starting at
/// `start`, inclusive
///
/// Uses calendar addition, so the window wraps month and year boundaries
/// correctly (Dec 30 reaches into early January).
pub fn birthday_window(start: NaiveDate, days: u64) -> Vec<(u32, u32)> {
    (0..days)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|date| (date.month(), date.day()))
        .collect()
}

/// Service for CRUD and queries over an account's contacts
///
/// Every operation executes on behalf of the owning account; the owner id
/// is threaded into each repository call.
pub struct ContactService<C: ContactRepository> {
    contacts: Arc<C>,
}

impl<C: ContactRepository> ContactService<C> {
    /// Creates a new contact service
    pub fn new(contacts: Arc<C>) -> Self {
        Self { contacts }
    }

    /// Creates a contact owned by `owner`
    pub async fn create_contact(
        &self,
        owner: Uuid,
        body: NewContact,
    ) -> Result<Contact, DomainError> {
        self.contacts.create(Contact::new(owner, body)).await
    }

    /// Searches `owner`'s contacts (OR-combined substring filters,
    /// paginated)
    pub async fn search_contacts(
        &self,
        owner: Uuid,
        filter: ContactFilter,
        page: PageQuery,
    ) -> Result<Vec<Contact>, DomainError> {
        self.contacts.search(owner, &filter, page.validate()).await
    }

    /// Fetches one of `owner`'s contacts by id
    pub async fn get_contact_by_id(
        &self,
        owner: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Contact>, DomainError> {
        self.contacts.find_by_id(owner, contact_id).await
    }

    /// Applies a partial update; `None` means the contact does not exist
    /// for this owner
    pub async fn update_contact(
        &self,
        owner: Uuid,
        contact_id: Uuid,
        body: ContactUpdate,
    ) -> Result<Option<Contact>, DomainError> {
        self.contacts.update(owner, contact_id, body).await
    }

    /// Deletes a contact, returning the deleted record
    pub async fn delete_contact(
        &self,
        owner: Uuid,
        contact_id: Uuid,
    ) -> Result<Option<Contact>, DomainError> {
        self.contacts.delete(owner, contact_id).await
    }

    /// Contacts whose birthday falls within the next seven days (today
    /// inclusive), ignoring the birth year
    pub async fn get_upcoming_birthdays(&self, owner: Uuid) -> Result<Vec<Contact>, DomainError> {
        let today = Utc::now().date_naive();
        let dates = birthday_window(today, BIRTHDAY_WINDOW_DAYS);
        self.contacts.find_by_birthday(owner, &dates).await
    }
}
