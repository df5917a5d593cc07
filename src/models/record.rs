//! Contact record: a name with its phones and an optional birthday.
//!
//! Serde support is for interchange; the assistant itself persists nothing.

use crate::domain::{Birthday, PersonName, PhoneNumber};
use serde::{Deserialize, Serialize};

/// One contact in the address book.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    /// Display name (lookups ignore case)
    pub name: PersonName,

    /// Phone numbers in the order they were added; duplicates are kept
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<PhoneNumber>,

    /// Birthday, if one has been recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create a record with no phones and no birthday.
    pub fn new(name: PersonName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Append a phone number.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Replace the whole phone list with a single number.
    pub fn replace_phones(&mut self, phone: PhoneNumber) {
        self.phones.clear();
        self.phones.push(phone);
    }

    /// Set or overwrite the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Phones joined with `", "` for display.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
