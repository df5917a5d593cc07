//! Contact Assistant - an interactive command-line address book.
//!
//! Keeps names, phone numbers and birthdays in memory and reports which
//! contacts should be greeted in the coming days.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, birthdays)
//! - **models**: The contact record aggregate
//! - **repositories**: The in-memory address book
//! - **services**: Upcoming-birthday computation
//! - **commands**: Input parsing, command handlers and the prompt loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{Birthday, PersonName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError};
pub use models::ContactRecord;
pub use repositories::{AddressBook, ContactUpdate, Listing, LookupOutcome};
pub use services::{upcoming_birthdays, Clock, FixedClock, GreetingPolicy, UpcomingBirthday};
