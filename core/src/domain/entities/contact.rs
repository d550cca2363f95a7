//! Contact entity representing a single address-book entry.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::value_objects::{ContactUpdate, NewContact};

/// An address-book entry owned by a single account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: Uuid,

    /// Owning account
    pub user_id: Uuid,

    pub first_name: String,

    pub last_name: String,

    /// Email address (unique across the contacts table)
    pub email: String,

    pub phone_number: Option<String>,

    /// Birthday; only month and day are meaningful, the year may be arbitrary
    pub birthday: Option<NaiveDate>,

    /// Timestamp when the contact was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the contact was last updated
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Creates a new contact owned by `user_id`
    pub fn new(user_id: Uuid, body: NewContact) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone_number: body.phone_number,
            birthday: body.birthday,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update; fields absent from `update` stay unchanged
    pub fn apply_update(&mut self, update: ContactUpdate) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone_number) = update.phone_number {
            self.phone_number = Some(phone_number);
        }
        if let Some(birthday) = update.birthday {
            self.birthday = Some(birthday);
        }
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_contact() -> Contact {
        Contact::new(
            Uuid::new_v4(),
            NewContact {
                first_name: "Ann".to_string(),
                last_name: "Smith".to_string(),
                email: "ann.smith@example.com".to_string(),
                phone_number: Some("555-0101".to_string()),
                birthday: NaiveDate::from_ymd_opt(1990, 1, 3),
            },
        )
    }

    #[test]
    fn test_new_contact_carries_owner() {
        let owner = Uuid::new_v4();
        let contact = Contact::new(
            owner,
            NewContact {
                first_name: "Bob".to_string(),
                last_name: "Jones".to_string(),
                email: "bob@example.com".to_string(),
                phone_number: None,
                birthday: None,
            },
        );

        assert_eq!(contact.user_id, owner);
        assert!(contact.phone_number.is_none());
        assert!(contact.birthday.is_none());
    }

    #[test]
    fn test_partial_update_changes_only_given_fields() {
        let mut contact = sample_contact();

        contact.apply_update(ContactUpdate {
            phone_number: Some("555".to_string()),
            ..ContactUpdate::default()
        });

        assert_eq!(contact.first_name, "Ann");
        assert_eq!(contact.last_name, "Smith");
        assert_eq!(contact.email, "ann.smith@example.com");
        assert_eq!(contact.phone_number.as_deref(), Some("555"));
    }

    #[test]
    fn test_full_update() {
        let mut contact = sample_contact();

        contact.apply_update(ContactUpdate {
            first_name: Some("Anna".to_string()),
            last_name: Some("Smythe".to_string()),
            email: Some("anna@example.com".to_string()),
            phone_number: Some("555-0202".to_string()),
            birthday: NaiveDate::from_ymd_opt(1991, 2, 4),
        });

        assert_eq!(contact.first_name, "Anna");
        assert_eq!(contact.last_name, "Smythe");
        assert_eq!(contact.email, "anna@example.com");
        assert_eq!(contact.phone_number.as_deref(), Some("555-0202"));
        assert_eq!(contact.birthday, NaiveDate::from_ymd_opt(1991, 2, 4));
    }
}
