//! Upcoming-birthday computation.
//!
//! Pure functions over the address book. "Today" is always supplied by the
//! caller; [`Clock`] exists so the command layer can be driven by a fixed
//! date in tests.

use crate::domain::{Birthday, PersonName};
use crate::repositories::AddressBook;
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use std::fmt;
use std::str::FromStr;

/// Default length of the lookahead window, in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// How the greeting date is derived from the projected birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreetingPolicy {
    /// Saturday and Sunday birthdays are greeted on the following Monday
    #[default]
    WeekendToMonday,
    /// Greet on the birthday itself
    Exact,
    /// Greet a fixed number of days after the birthday
    FixedShift(u32),
}

impl GreetingPolicy {
    /// Greeting date for a birthday observed on `birthday`.
    ///
    /// Returns `None` if the shifted date is past the end of the calendar.
    pub fn greeting_date(&self, birthday: NaiveDate) -> Option<NaiveDate> {
        let shift = match self {
            Self::Exact => 0,
            Self::FixedShift(days) => u64::from(*days),
            Self::WeekendToMonday => match birthday.weekday() {
                Weekday::Sat => 2,
                Weekday::Sun => 1,
                _ => 0,
            },
        };
        birthday.checked_add_days(Days::new(shift))
    }
}

impl FromStr for GreetingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        match value.as_str() {
            "weekend-to-monday" | "monday" => Ok(Self::WeekendToMonday),
            "exact" => Ok(Self::Exact),
            _ => match value.strip_prefix("shift:") {
                Some(days) => days
                    .parse::<u32>()
                    .map(Self::FixedShift)
                    .map_err(|_| format!("Invalid shift length: {}", days)),
                None => Err(format!(
                    "Unknown greeting policy '{}' (expected weekend-to-monday, exact or shift:<days>)",
                    s
                )),
            },
        }
    }
}

impl fmt::Display for GreetingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeekendToMonday => write!(f, "weekend-to-monday"),
            Self::Exact => write!(f, "exact"),
            Self::FixedShift(days) => write!(f, "shift:{}", days),
        }
    }
}

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// A contact due for a greeting inside the lookahead window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub name: PersonName,
    /// The anniversary the greeting belongs to (may be just before today)
    pub birthday: NaiveDate,
    /// Day the greeting should be sent
    pub greeting_date: NaiveDate,
}

/// The earliest greeting on or after `today`, with the anniversary it is for.
///
/// Last year's anniversary is considered too, since a shifted greeting for a
/// birthday that has already passed can still be due.
fn next_greeting(
    birthday: Birthday,
    today: NaiveDate,
    policy: GreetingPolicy,
) -> Option<(NaiveDate, NaiveDate)> {
    // Greeting dates grow with the year, so the first hit is the earliest
    (today.year() - 1..=today.year() + 1)
        .filter_map(|year| {
            let anniversary = birthday.anniversary_in(year)?;
            Some((anniversary, policy.greeting_date(anniversary)?))
        })
        .find(|&(_, greeting)| greeting >= today)
}

/// Contacts whose greeting date falls in `[today, today + window_days)`.
///
/// Results follow address book order.
pub fn upcoming_birthdays(
    book: &AddressBook,
    today: NaiveDate,
    window_days: u32,
    policy: GreetingPolicy,
) -> Vec<UpcomingBirthday> {
    let Some(window_end) = today.checked_add_days(Days::new(u64::from(window_days))) else {
        return Vec::new();
    };

    book.iter()
        .filter_map(|record| {
            let (birthday, greeting_date) = next_greeting(record.birthday?, today, policy)?;
            if greeting_date >= window_end {
                return None;
            }
            Some(UpcomingBirthday {
                name: record.name.clone(),
                birthday,
                greeting_date,
            })
        })
        .collect()
}
