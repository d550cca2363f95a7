//! Mock implementation of ContactRepository for testing

use async_trait::async_trait;
use ch_shared::types::PageQuery;
use chrono::Datelike;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Contact;
use crate::domain::value_objects::{ContactFilter, ContactUpdate};
use crate::errors::DomainError;

use super::trait_::ContactRepository;

/// In-memory contact repository for tests and examples
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl MockContactRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Owner-scoped snapshot in insertion-time order
    async fn owned_sorted(&self, owner: Uuid) -> Vec<Contact> {
        let contacts = self.contacts.read().await;
        let mut owned: Vec<Contact> = contacts
            .values()
            .filter(|c| c.user_id == owner)
            .cloned()
            .collect();
        owned.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        owned
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        let mut contacts = self.contacts.write().await;

        // Same outcome as the store's unique index on email
        if contacts.values().any(|c| c.email == contact.email) {
            return Err(DomainError::conflict("contact"));
        }

        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn find_by_id(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let contacts = self.contacts.read().await;
        Ok(contacts
            .get(&id)
            .filter(|c| c.user_id == owner)
            .cloned())
    }

    async fn search(
        &self,
        owner: Uuid,
        filter: &ContactFilter,
        page: PageQuery,
    ) -> Result<Vec<Contact>, DomainError> {
        let owned = self.owned_sorted(owner).await;
        Ok(owned
            .into_iter()
            .filter(|c| filter.matches(c))
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn update(
        &self,
        owner: Uuid,
        id: Uuid,
        update: ContactUpdate,
    ) -> Result<Option<Contact>, DomainError> {
        let mut contacts = self.contacts.write().await;
        match contacts.get_mut(&id).filter(|c| c.user_id == owner) {
            Some(contact) => {
                contact.apply_update(update);
                Ok(Some(contact.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, owner: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let mut contacts = self.contacts.write().await;
        if contacts.get(&id).map(|c| c.user_id) != Some(owner) {
            return Ok(None);
        }
        Ok(contacts.remove(&id))
    }

    async fn find_by_birthday(
        &self,
        owner: Uuid,
        dates: &[(u32, u32)],
    ) -> Result<Vec<Contact>, DomainError> {
        let owned = self.owned_sorted(owner).await;
        Ok(owned
            .into_iter()
            .filter(|c| {
                c.birthday
                    .map_or(false, |b| dates.contains(&(b.month(), b.day())))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::NewContact;
    use chrono::NaiveDate;

    fn contact(owner: Uuid, first: &str, email: &str, birthday: Option<NaiveDate>) -> Contact {
        Contact::new(
            owner,
            NewContact {
                first_name: first.to_string(),
                last_name: "Test".to_string(),
                email: email.to_string(),
                phone_number: None,
                birthday,
            },
        )
    }

    #[tokio::test]
    async fn test_owner_isolation() {
        let repo = MockContactRepository::new();
        let owner = Uuid::new_v4();
        let other = Uuid::new_v4();

        let created = repo
            .create(contact(owner, "Ann", "ann@example.com", None))
            .await
            .unwrap();

        // Another account can neither read nor delete it.
        assert!(repo.find_by_id(other, created.id).await.unwrap().is_none());
        assert!(repo.delete(other, created.id).await.unwrap().is_none());
        assert!(repo.find_by_id(owner, created.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let repo = MockContactRepository::new();
        let owner = Uuid::new_v4();
        repo.create(contact(owner, "Ann", "ann@example.com", None))
            .await
            .unwrap();

        let err = repo
            .create(contact(owner, "Ann2", "ann@example.com", None))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_search_pagination() {
        let repo = MockContactRepository::new();
        let owner = Uuid::new_v4();
        for i in 0..5 {
            repo.create(contact(owner, "Ann", &format!("ann{i}@example.com"), None))
                .await
                .unwrap();
        }

        let page = repo
            .search(owner, &ContactFilter::default(), PageQuery::new(2, 2))
            .await
            .unwrap();
        assert_eq!(page.len(), 2);
    }
}
