//! PersonName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name.
///
/// Names are trimmed and must not be empty. The original casing is kept for
/// display, while [`PersonName::key`] gives the lowercased form used for
/// case-insensitive lookup.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::PersonName;
///
/// let name = PersonName::new("Alice").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// assert!(name.matches("ALICE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty or only
    /// whitespace.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if trimmed.len() == name.len() {
            Ok(Self(name))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lookup key: the lowercased name.
    pub fn key(&self) -> String {
        normalize(&self.0)
    }

    /// Case-insensitive comparison against a raw name.
    pub fn matches(&self, other: &str) -> bool {
        self.key() == normalize(other)
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Normalize a raw name into its lookup key.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
