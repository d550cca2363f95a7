//! Contact request/response DTOs and the search query binding.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use ch_core::domain::entities::Contact;
use ch_core::domain::value_objects::{ContactFilter, ContactUpdate, NewContact};
use ch_shared::types::PageQuery;

/// Request body for POST /contacts
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub last_name: String,

    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub phone_number: Option<String>,

    pub birthday: Option<NaiveDate>,
}

impl From<ContactRequest> for NewContact {
    fn from(body: ContactRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone_number: body.phone_number,
            birthday: body.birthday,
        }
    }
}

/// Partial request body for PATCH /contacts/{id}; absent fields stay
/// unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactUpdateRequest {
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub phone_number: Option<String>,

    pub birthday: Option<NaiveDate>,
}

impl From<ContactUpdateRequest> for ContactUpdate {
    fn from(body: ContactUpdateRequest) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone_number: body.phone_number,
            birthday: body.birthday,
        }
    }
}

/// Query string for GET /contacts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSearchQuery {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,

    #[serde(default)]
    pub skip: u32,

    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl ContactSearchQuery {
    /// Split into the service-level filter and page
    ///
    /// Empty filter values count as "not given", so `?first_name=` does not
    /// turn into a match-everything pattern.
    pub fn into_parts(self) -> (ContactFilter, PageQuery) {
        let filter = ContactFilter {
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            email: non_empty(self.email),
        };
        (filter, PageQuery::new(self.skip, self.limit))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_limit() -> u32 {
    10
}

/// Contact representation returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponse {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            email: contact.email,
            phone_number: contact.phone_number,
            birthday: contact.birthday,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_defaults() {
        let query: ContactSearchQuery = serde_json::from_str("{}").unwrap();
        let (filter, page) = query.into_parts();

        assert!(filter.is_empty());
        assert_eq!(page.skip, 0);
        assert_eq!(page.limit, 10);
    }

    #[test]
    fn test_search_query_limit_is_clamped() {
        let query: ContactSearchQuery =
            serde_json::from_str(r#"{"limit": 9999, "skip": 5}"#).unwrap();
        let (_, page) = query.into_parts();

        assert_eq!(page.skip, 5);
        assert_eq!(page.limit, 100);
    }

    #[test]
    fn test_empty_filter_values_are_dropped() {
        let query: ContactSearchQuery =
            serde_json::from_str(r#"{"first_name": "", "email": "x"}"#).unwrap();
        let (filter, _) = query.into_parts();

        assert!(filter.first_name.is_none());
        assert_eq!(filter.email.as_deref(), Some("x"));
    }

    #[test]
    fn test_update_request_all_fields_optional() {
        let body: ContactUpdateRequest =
            serde_json::from_str(r#"{"phone_number": "555"}"#).unwrap();
        let update: ContactUpdate = body.into();

        assert_eq!(update.phone_number.as_deref(), Some("555"));
        assert!(update.first_name.is_none());
        assert!(update.birthday.is_none());
    }
}
