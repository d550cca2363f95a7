//! Search filter for contact listings.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Contact;

/// Optional substring filters for contact search
///
/// When several fields are given the filter is OR-combined: a contact
/// matches if ANY given field matches. An empty filter matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl ContactFilter {
    /// Whether no filter fields were given
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }

    /// Case-insensitive OR-combined substring match against a contact
    pub fn matches(&self, contact: &Contact) -> bool {
        if self.is_empty() {
            return true;
        }

        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        self.first_name
            .as_deref()
            .map_or(false, |n| contains(&contact.first_name, n))
            || self
                .last_name
                .as_deref()
                .map_or(false, |n| contains(&contact.last_name, n))
            || self
                .email
                .as_deref()
                .map_or(false, |n| contains(&contact.email, n))
    }
}
