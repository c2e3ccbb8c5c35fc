use crate::domain::{ContactName, PhoneNumber};
use crate::error::PhoneBookResult;
use crate::models::Contact;

/// Result of enumerating the whole store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// The store holds no contacts.
    Empty,

    /// Every contact, in order of first creation.
    Contacts(Vec<Contact>),
}

/// Repository for managing contacts.
///
/// Abstracts contact storage so the interpreter can be driven by the
/// in-memory [`ContactStore`](super::ContactStore) or a test double.
pub trait ContactRepository {
    /// Return the contact for `name`, creating an empty one if absent.
    ///
    /// The flag is `true` when the contact was created by this call.
    fn create_or_get(&mut self, name: &ContactName) -> (Contact, bool);

    /// Append a phone to the contact, creating the contact if absent.
    fn add_phone(&mut self, name: &ContactName, phone: PhoneNumber) -> PhoneBookResult<()>;

    /// Remove a phone from an existing contact.
    fn remove_phone(&mut self, name: &ContactName, phone: &PhoneNumber) -> PhoneBookResult<()>;

    /// Swap `old` for `new` on an existing contact, all or nothing.
    fn replace_phone(
        &mut self,
        name: &ContactName,
        old: &PhoneNumber,
        new: PhoneNumber,
    ) -> PhoneBookResult<()>;

    /// Remove the whole contact.
    fn delete_contact(&mut self, name: &ContactName) -> PhoneBookResult<()>;

    /// Retrieve a single contact by name.
    fn get(&self, name: &ContactName) -> Option<Contact>;

    /// Enumerate all contacts.
    fn list_all(&self) -> Listing;
}
