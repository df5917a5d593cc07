//! Command handlers.
//!
//! [`Assistant`] is the session context: it owns the address book, the
//! configuration and the clock, and every handler runs against it.

use super::parser::Command;
use crate::config::Config;
use crate::domain::birthday::BIRTHDAY_FORMAT;
use crate::error::{CommandError, CommandResult};
use crate::repositories::{AddressBook, ContactUpdate, Listing, LookupOutcome};
use crate::services::{upcoming_birthdays, Clock, SystemClock};

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the message and keep reading
    Message(String),
    /// Print the message and stop
    Exit(String),
    /// Nothing to print (blank input)
    Silent,
}

/// Session state shared by all command handlers.
pub struct Assistant {
    book: AddressBook,
    config: Config,
    clock: Box<dyn Clock>,
}

impl Assistant {
    /// Create a session reading "today" from the system clock.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Create a session with an explicit clock.
    pub fn with_clock(config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one raw input line.
    ///
    /// Command errors are converted to their message here and never escape.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let command = match Command::parse(line) {
            None => return Reply::Silent,
            Some(Ok(command)) => command,
            Some(Err(e)) => return self.reject(line, e),
        };

        tracing::debug!(?command, "Dispatching command");
        match self.execute(command) {
            Ok(reply) => reply,
            Err(e) => self.reject(line, e),
        }
    }

    fn reject(&self, line: &str, error: CommandError) -> Reply {
        tracing::warn!(input = %line.trim(), %error, "Command rejected");
        Reply::Message(error.to_string())
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        let message = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change { name, phone } => self.change_contact(&name, &phone)?,
            Command::Phone { name } => self.show_phone(&name),
            Command::All => self.show_all(),
            Command::AddBirthday { name, date } => self.add_birthday(&name, &date)?,
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => self.show_upcoming_birthdays(),
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
            Command::Unknown(_) => "Invalid command.".to_string(),
        };
        Ok(Reply::Message(message))
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        let message = match self.book.add_contact(name, phone)? {
            ContactUpdate::Added => "Contact added.",
            ContactUpdate::Updated => "Contact updated.",
        };
        Ok(message.to_string())
    }

    fn change_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        Ok(match self.book.replace_phone(name, phone)? {
            LookupOutcome::Found => format!("Phone number updated for {}.", name),
            LookupOutcome::NotFound => "Contact not found.".to_string(),
        })
    }

    fn show_phone(&self, name: &str) -> String {
        match self.book.find(name) {
            Some(record) => record.phones_display(),
            None => format!("Contact {} not found.", name),
        }
    }

    fn show_all(&self) -> String {
        match self.book.list_all() {
            Listing::Empty => "No contacts in the address book.".to_string(),
            Listing::Contacts(entries) => entries
                .iter()
                .map(|(name, phones)| {
                    let phones: Vec<&str> = phones.iter().map(|p| p.as_str()).collect();
                    format!("{}: {}", name, phones.join(", "))
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    fn add_birthday(&mut self, name: &str, date: &str) -> CommandResult<String> {
        Ok(match self.book.add_birthday(name, date)? {
            LookupOutcome::Found => format!("Birthday added for {}.", name),
            LookupOutcome::NotFound => format!("Contact {} not found.", name),
        })
    }

    fn show_birthday(&self, name: &str) -> String {
        match self.book.find(name).and_then(|r| r.birthday) {
            Some(birthday) => format!("{}'s birthday is on {}.", name, birthday),
            None => format!("No birthday found for {}.", name),
        }
    }

    fn show_upcoming_birthdays(&self) -> String {
        let today = self.clock.today();
        let upcoming = upcoming_birthdays(
            &self.book,
            today,
            self.config.lookahead_days,
            self.config.greeting_policy,
        );
        tracing::debug!(%today, count = upcoming.len(), "Computed upcoming birthdays");

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        let lines: Vec<String> = upcoming
            .iter()
            .map(|u| format!("{}: {}", u.name, u.greeting_date.format(BIRTHDAY_FORMAT)))
            .collect();
        format!("Upcoming birthdays:\n{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{FixedClock, GreetingPolicy};
    use chrono::NaiveDate;

    fn assistant_on(y: i32, m: u32, d: u32) -> Assistant {
        let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        Assistant::with_clock(Config::default(), Box::new(FixedClock(today)))
    }

    fn say(assistant: &mut Assistant, line: &str) -> String {
        match assistant.handle_line(line) {
            Reply::Message(text) | Reply::Exit(text) => text,
            Reply::Silent => String::new(),
        }
    }

    #[test]
    fn test_hello_and_unknown() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(say(&mut a, "hello"), "How can I help you?");
        assert_eq!(say(&mut a, "dance"), "Invalid command.");
    }

    #[test]
    fn test_blank_line_is_silent() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(a.handle_line("   "), Reply::Silent);
    }

    #[test]
    fn test_exit_and_close() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(a.handle_line("exit"), Reply::Exit("Good bye!".to_string()));
        assert_eq!(a.handle_line("CLOSE"), Reply::Exit("Good bye!".to_string()));
    }

    #[test]
    fn test_validation_errors_become_messages() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(
            say(&mut a, "add John 12345"),
            "Invalid phone number format. Use 10 digits."
        );
        assert!(a.book().is_empty());

        say(&mut a, "add John 1234567890");
        assert_eq!(
            say(&mut a, "add-birthday John 1990-01-01"),
            "Invalid date format. Use DD.MM.YYYY."
        );
        assert_eq!(say(&mut a, "add"), "Usage: add <name> <phone>");
    }

    #[test]
    fn test_not_found_replies() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(say(&mut a, "change Ghost 1234567890"), "Contact not found.");
        assert_eq!(say(&mut a, "phone Ghost"), "Contact Ghost not found.");
        assert_eq!(
            say(&mut a, "add-birthday Ghost 01.01.1990"),
            "Contact Ghost not found."
        );
        assert_eq!(say(&mut a, "show-birthday Ghost"), "No birthday found for Ghost.");
    }

    #[test]
    fn test_all_lists_contacts() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(say(&mut a, "all"), "No contacts in the address book.");

        say(&mut a, "add John 1234567890");
        say(&mut a, "add John 0987654321");
        say(&mut a, "add Jane 5555555555");
        assert_eq!(
            say(&mut a, "all"),
            "John: 1234567890, 0987654321\nJane: 5555555555"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut a = assistant_on(2024, 1, 1);
        say(&mut a, "add Jane 5555555555");
        assert_eq!(say(&mut a, "show-birthday Jane"), "No birthday found for Jane.");
        assert_eq!(
            say(&mut a, "add-birthday jane 01.01.1990"),
            "Birthday added for jane."
        );
        assert_eq!(
            say(&mut a, "show-birthday Jane"),
            "Jane's birthday is on 01.01.1990."
        );
        assert_eq!(say(&mut a, "birthdays"), "Upcoming birthdays:\nJane: 01.01.2024");
    }

    #[test]
    fn test_birthdays_report_greeting_date() {
        // Saturday 2024-01-06 is greeted on Monday 2024-01-08
        let mut a = assistant_on(2024, 1, 2);
        say(&mut a, "add Sam 1234567890");
        say(&mut a, "add-birthday Sam 06.01.1980");
        assert_eq!(say(&mut a, "birthdays"), "Upcoming birthdays:\nSam: 08.01.2024");
    }

    #[test]
    fn test_birthdays_with_exact_policy() {
        let config = Config {
            greeting_policy: GreetingPolicy::Exact,
            ..Config::default()
        };
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut a = Assistant::with_clock(config, Box::new(FixedClock(today)));
        say(&mut a, "add Sam 1234567890");
        say(&mut a, "add-birthday Sam 06.01.1980");
        assert_eq!(say(&mut a, "birthdays"), "Upcoming birthdays:\nSam: 06.01.2024");
    }

    #[test]
    fn test_birthdays_include_weekend_greeting_due_today() {
        // Monday 2024-06-03 greets the Saturday birthday from two days ago
        let mut a = assistant_on(2024, 6, 3);
        say(&mut a, "add Sam 1234567890");
        say(&mut a, "add-birthday Sam 01.06.1990");
        assert_eq!(say(&mut a, "birthdays"), "Upcoming birthdays:\nSam: 03.06.2024");
    }

    #[test]
    fn test_no_upcoming_birthdays() {
        let mut a = assistant_on(2024, 1, 1);
        assert_eq!(say(&mut a, "birthdays"), "No upcoming birthdays.");
        say(&mut a, "add Far 1234567890");
        say(&mut a, "add-birthday Far 20.01.1990");
        assert_eq!(say(&mut a, "birthdays"), "No upcoming birthdays.");
    }
}
