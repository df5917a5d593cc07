//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the values a contact is made
//! of: names, phone numbers and birthdays. These value objects validate at
//! construction time and prevent invalid data from being represented in the
//! address book. Their serde impls validate too, so values read back from
//! JSON interchange obey the same rules.

pub mod birthday;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use person_name::PersonName;
pub use phone::PhoneNumber;
