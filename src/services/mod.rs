//! Service layer.
//!
//! Business logic that reads across the whole address book.

pub mod birthday_service;

pub use birthday_service::{
    upcoming_birthdays, Clock, FixedClock, GreetingPolicy, SystemClock, UpcomingBirthday,
    DEFAULT_WINDOW_DAYS,
};
