//! Creation and partial-update inputs for the contact service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fields required to create a contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub birthday: Option<NaiveDate>,
}

/// Partial update for a contact
///
/// `None` means "leave unchanged"; only fields carrying a value are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub birthday: Option<NaiveDate>,
}

impl ContactUpdate {
    /// Whether the update carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
            && self.birthday.is_none()
    }
}
