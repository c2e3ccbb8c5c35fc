//! Contact record: a name and its phone numbers.

use crate::domain::{ContactName, PhoneNumber};
use crate::error::{PhoneBookError, PhoneBookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact in the phone book.
///
/// Phone numbers keep insertion order and never contain duplicates. The
/// fields are private so every mutation goes through the checks below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord")]
pub struct Contact {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

/// Unchecked serde shape of a [`Contact`].
#[derive(Deserialize)]
struct ContactRecord {
    name: ContactName,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl TryFrom<ContactRecord> for Contact {
    type Error = PhoneBookError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        let mut contact = Contact::new(record.name);
        for phone in record.phones {
            contact.add_phone(phone)?;
        }
        Ok(contact)
    }
}

impl Contact {
    /// Create a contact with no phone numbers.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
        }
    }

    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phone numbers in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn has_phone(&self, phone: &PhoneNumber) -> bool {
        self.phones.contains(phone)
    }

    /// Append a phone number.
    ///
    /// # Errors
    ///
    /// `DuplicatePhone` if the number is already on the record.
    pub fn add_phone(&mut self, phone: PhoneNumber) -> PhoneBookResult<()> {
        if self.has_phone(&phone) {
            return Err(PhoneBookError::DuplicatePhone {
                name: self.name.clone(),
                phone,
            });
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number, keeping the order of the others.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if the number is not on the record.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> PhoneBookResult<()> {
        let index = self.position(phone)?;
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old` with `new`, appending `new` at the end.
    ///
    /// Both checks run before anything is mutated, so on error the record is
    /// unchanged.
    ///
    /// # Errors
    ///
    /// `DuplicatePhone` if `new` is already present (checked first), then
    /// `PhoneNotFound` if `old` is absent.
    pub fn replace_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> PhoneBookResult<()> {
        if self.has_phone(&new) {
            return Err(PhoneBookError::DuplicatePhone {
                name: self.name.clone(),
                phone: new,
            });
        }
        let index = self.position(old)?;
        self.phones.remove(index);
        self.phones.push(new);
        Ok(())
    }

    fn position(&self, phone: &PhoneNumber) -> PhoneBookResult<usize> {
        self.phones
            .iter()
            .position(|p| p == phone)
            .ok_or_else(|| PhoneBookError::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.clone(),
            })
    }
}

/// Renders as `Name : phone1; phone2`.
impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "{} : {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> PhoneNumber {
        PhoneNumber::new(s).unwrap()
    }

    fn contact() -> Contact {
        Contact::new(ContactName::new("bob").unwrap())
    }

    #[test]
    fn test_add_phone_keeps_order() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        c.add_phone(phone("2222222222")).unwrap();
        assert_eq!(c.phones(), &[phone("1111111111"), phone("2222222222")]);
    }

    #[test]
    fn test_add_duplicate_phone_fails() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        let err = c.add_phone(phone("1111111111")).unwrap_err();
        assert_eq!(err.kind(), "DuplicatePhone");
        assert_eq!(c.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_preserves_order() {
        let mut c = contact();
        for p in ["1111111111", "2222222222", "3333333333"] {
            c.add_phone(phone(p)).unwrap();
        }
        c.remove_phone(&phone("2222222222")).unwrap();
        assert_eq!(c.phones(), &[phone("1111111111"), phone("3333333333")]);
    }

    #[test]
    fn test_remove_missing_phone_fails() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        let err = c.remove_phone(&phone("9999999999")).unwrap_err();
        assert_eq!(err.kind(), "PhoneNotFound");
        assert_eq!(c.phones(), &[phone("1111111111")]);
    }

    #[test]
    fn test_replace_phone_appends_new() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        c.add_phone(phone("2222222222")).unwrap();
        c.replace_phone(&phone("1111111111"), phone("3333333333"))
            .unwrap();
        assert_eq!(c.phones(), &[phone("2222222222"), phone("3333333333")]);
    }

    #[test]
    fn test_replace_phone_duplicate_checked_first() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        // old is missing and new is a duplicate: duplicate wins
        let err = c
            .replace_phone(&phone("9999999999"), phone("1111111111"))
            .unwrap_err();
        assert_eq!(err.kind(), "DuplicatePhone");
        assert_eq!(c.phones(), &[phone("1111111111")]);
    }

    #[test]
    fn test_replace_missing_old_leaves_record_untouched() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        let err = c
            .replace_phone(&phone("9999999999"), phone("2222222222"))
            .unwrap_err();
        assert_eq!(err.kind(), "PhoneNotFound");
        assert_eq!(c.phones(), &[phone("1111111111")]);
    }

    #[test]
    fn test_display() {
        let mut c = contact();
        assert_eq!(c.to_string(), "Bob : ");
        c.add_phone(phone("1111111111")).unwrap();
        c.add_phone(phone("22222222222")).unwrap();
        assert_eq!(c.to_string(), "Bob : 1111111111; 22222222222");
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut c = contact();
        c.add_phone(phone("1111111111")).unwrap();
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"name":"Bob","phones":["1111111111"]}"#);
        let back: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_phones() {
        let json = r#"{"name":"bob","phones":["1111111111","1111111111"]}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
