//! In-memory address book.
//!
//! Records are kept in insertion order for listing, with a side index from
//! lowercased name to the position of the first record carrying that name.

use crate::domain::person_name::normalize;
use crate::domain::{Birthday, PersonName, PhoneNumber, ValidationError};
use crate::models::ContactRecord;
use std::collections::HashMap;

/// Whether `add_contact` created a record or extended an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactUpdate {
    Added,
    Updated,
}

/// Result of an operation that targets an existing contact by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
}

/// Snapshot of the whole book for display.
#[derive(Debug, PartialEq, Eq)]
pub enum Listing<'a> {
    /// The book holds no contacts
    Empty,
    /// Every contact's name and phones, in insertion order
    Contacts(Vec<(&'a PersonName, &'a [PhoneNumber])>),
}

/// Ordered, name-indexed collection of contact records.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    ///
    /// Names are not unique; if a record with the same name already exists
    /// the new one is stored but lookups keep returning the earlier one.
    pub fn add_record(&mut self, record: ContactRecord) {
        let position = self.records.len();
        self.index.entry(record.name.key()).or_insert(position);
        self.records.push(record);
    }

    /// Find the first record whose name matches, ignoring case.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index
            .get(&normalize(name))
            .and_then(|&i| self.records.get(i))
    }

    /// Mutable variant of [`AddressBook::find`].
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(&normalize(name)) {
            Some(&i) => self.records.get_mut(i),
            None => None,
        }
    }

    /// Add a phone to `name`, creating the contact if needed.
    ///
    /// Both values are validated before the book is touched, so a bad phone
    /// never leaves an empty record behind.
    pub fn add_contact(&mut self, name: &str, phone: &str) -> Result<ContactUpdate, ValidationError> {
        let name = PersonName::new(name)?;
        let phone = PhoneNumber::new(phone)?;

        if let Some(record) = self.find_mut(name.as_str()) {
            record.add_phone(phone);
            tracing::debug!(name = %record.name, phones = record.phones.len(), "Contact updated");
            return Ok(ContactUpdate::Updated);
        }

        let mut record = ContactRecord::new(name);
        record.add_phone(phone);
        tracing::debug!(name = %record.name, "Contact added");
        self.add_record(record);
        Ok(ContactUpdate::Added)
    }

    /// Replace the phone list of `name` with a single phone.
    pub fn replace_phone(&mut self, name: &str, phone: &str) -> Result<LookupOutcome, ValidationError> {
        let phone = PhoneNumber::new(phone)?;

        match self.find_mut(name) {
            Some(record) => {
                record.replace_phones(phone);
                tracing::debug!(name = %record.name, "Phones replaced");
                Ok(LookupOutcome::Found)
            }
            None => Ok(LookupOutcome::NotFound),
        }
    }

    /// Set or overwrite the birthday of `name`.
    pub fn add_birthday(&mut self, name: &str, date: &str) -> Result<LookupOutcome, ValidationError> {
        let birthday = Birthday::parse(date)?;

        match self.find_mut(name) {
            Some(record) => {
                record.set_birthday(birthday);
                tracing::debug!(name = %record.name, %birthday, "Birthday set");
                Ok(LookupOutcome::Found)
            }
            None => Ok(LookupOutcome::NotFound),
        }
    }

    /// Every contact's name and phones, or `Listing::Empty`.
    pub fn list_all(&self) -> Listing<'_> {
        if self.records.is_empty() {
            return Listing::Empty;
        }

        Listing::Contacts(
            self.records
                .iter()
                .map(|r| (&r.name, r.phones.as_slice()))
                .collect(),
        )
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book_with(entries: &[(&str, &str)]) -> AddressBook {
        let mut book = AddressBook::new();
        for (name, phone) in entries {
            book.add_contact(name, phone).unwrap();
        }
        book
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let book = book_with(&[("Alice", "1234567890")]);

        let exact = book.find("Alice").unwrap();
        let lower = book.find("alice").unwrap();
        let upper = book.find("ALICE").unwrap();
        assert!(std::ptr::eq(exact, lower));
        assert!(std::ptr::eq(exact, upper));
        assert_eq!(exact.name.as_str(), "Alice");
    }

    #[test]
    fn test_find_missing_returns_none() {
        let book = book_with(&[("Alice", "1234567890")]);
        assert!(book.find("Bob").is_none());
        assert!(book.find("Ali").is_none());
    }

    #[test]
    fn test_add_contact_creates_then_updates() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.add_contact("John", "1234567890").unwrap(),
            ContactUpdate::Added
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones.len(), 1);

        assert_eq!(
            book.add_contact("john", "0987654321").unwrap(),
            ContactUpdate::Updated
        );
        assert_eq!(book.len(), 1);
        let record = book.find("John").unwrap();
        assert_eq!(record.name.as_str(), "John");
        assert_eq!(record.phones_display(), "1234567890, 0987654321");
    }

    #[test]
    fn test_add_contact_invalid_phone_leaves_book_untouched() {
        let mut book = AddressBook::new();
        let err = book.add_contact("John", "12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(book.is_empty());
        assert!(book.find("John").is_none());
    }

    #[test]
    fn test_replace_phone_leaves_exactly_one() {
        let mut book = book_with(&[
            ("John", "1234567890"),
            ("John", "0987654321"),
            ("John", "5555555555"),
        ]);
        assert_eq!(
            book.replace_phone("JOHN", "1112223333").unwrap(),
            LookupOutcome::Found
        );
        assert_eq!(book.find("John").unwrap().phones_display(), "1112223333");
    }

    #[test]
    fn test_replace_phone_not_found() {
        let mut book = AddressBook::new();
        assert_eq!(
            book.replace_phone("Ghost", "1112223333").unwrap(),
            LookupOutcome::NotFound
        );
        assert!(book.is_empty());
    }

    #[test]
    fn test_replace_phone_validates_before_lookup() {
        let mut book = book_with(&[("John", "1234567890")]);
        assert!(book.replace_phone("John", "abc").is_err());
        assert_eq!(book.find("John").unwrap().phones_display(), "1234567890");
    }

    #[test]
    fn test_add_birthday_sets_and_overwrites() {
        let mut book = book_with(&[("Jane", "1234567890")]);
        assert_eq!(
            book.add_birthday("jane", "01.01.1990").unwrap(),
            LookupOutcome::Found
        );
        assert_eq!(
            book.add_birthday("Jane", "15.06.1991").unwrap(),
            LookupOutcome::Found
        );
        assert_eq!(
            book.find("Jane").unwrap().birthday.unwrap().to_string(),
            "15.06.1991"
        );
    }

    #[test]
    fn test_add_birthday_errors() {
        let mut book = book_with(&[("Jane", "1234567890")]);
        assert!(book.add_birthday("Jane", "1990-01-01").is_err());
        assert!(book.find("Jane").unwrap().birthday.is_none());
        assert_eq!(
            book.add_birthday("Ghost", "01.01.1990").unwrap(),
            LookupOutcome::NotFound
        );
    }

    #[test]
    fn test_list_all_empty() {
        assert_eq!(AddressBook::new().list_all(), Listing::Empty);
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let book = book_with(&[
            ("Zed", "1111111111"),
            ("Amy", "2222222222"),
            ("Zed", "3333333333"),
        ]);
        match book.list_all() {
            Listing::Contacts(entries) => {
                let names: Vec<&str> = entries.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["Zed", "Amy"]);
                assert_eq!(entries[0].1.len(), 2);
            }
            Listing::Empty => panic!("expected contacts"),
        }
    }

    #[test]
    fn test_duplicate_records_resolve_to_first() {
        let mut book = AddressBook::new();
        let mut first = ContactRecord::new(PersonName::new("Sam").unwrap());
        first.add_phone(PhoneNumber::new("1111111111").unwrap());
        let mut second = ContactRecord::new(PersonName::new("SAM").unwrap());
        second.add_phone(PhoneNumber::new("2222222222").unwrap());

        book.add_record(first);
        book.add_record(second);

        assert_eq!(book.len(), 2);
        assert_eq!(book.find("sam").unwrap().phones_display(), "1111111111");
        assert_eq!(book.iter().count(), 2);
    }
}
