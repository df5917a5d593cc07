//! Shared fixtures for integration tests.

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Assistant, Config, FixedClock, Reply};

/// Build a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// A session frozen on `today` with default configuration.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::with_clock(Config::default(), Box::new(FixedClock(today)))
}

/// Send one line and return the printed reply.
#[allow(dead_code)]
pub fn send(assistant: &mut Assistant, line: &str) -> String {
    match assistant.handle_line(line) {
        Reply::Message(text) | Reply::Exit(text) => text,
        Reply::Silent => String::new(),
    }
}

/// An address book where every entry gets phone 1234567890 and, if given,
/// the birthday.
#[allow(dead_code)]
pub fn sample_book(entries: &[(&str, Option<&str>)]) -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in entries {
        book.add_contact(name, "1234567890")
            .expect("fixture phone is valid");
        if let Some(birthday) = birthday {
            book.add_birthday(name, birthday)
                .expect("fixture birthday is valid");
        }
    }
    book
}
