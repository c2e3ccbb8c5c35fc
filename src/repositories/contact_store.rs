//! In-memory contact store.

use super::traits::{ContactRepository, Listing};
use crate::domain::{ContactName, PhoneNumber};
use crate::error::{PhoneBookError, PhoneBookResult};
use crate::models::Contact;
use std::collections::HashMap;
use tracing::debug;

/// Session-lifetime contact store.
///
/// Contacts are keyed by their normalized name. A separate order vector
/// remembers first-creation order for listings.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: HashMap<ContactName, Contact>,
    order: Vec<ContactName>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts in the store.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn entry(&mut self, name: &ContactName) -> (&mut Contact, bool) {
        let is_new = !self.contacts.contains_key(name);
        if is_new {
            debug!(name = %name, "Creating contact");
            self.order.push(name.clone());
        }
        let contact = self
            .contacts
            .entry(name.clone())
            .or_insert_with(|| Contact::new(name.clone()));
        (contact, is_new)
    }

    fn existing_mut(&mut self, name: &ContactName) -> PhoneBookResult<&mut Contact> {
        self.contacts
            .get_mut(name)
            .ok_or_else(|| PhoneBookError::ContactNotFound(name.clone()))
    }
}

impl ContactRepository for ContactStore {
    fn create_or_get(&mut self, name: &ContactName) -> (Contact, bool) {
        let (contact, is_new) = self.entry(name);
        (contact.clone(), is_new)
    }

    fn add_phone(&mut self, name: &ContactName, phone: PhoneNumber) -> PhoneBookResult<()> {
        // Check before creating so a rejected phone never leaves a new contact behind
        if let Some(contact) = self.contacts.get(name) {
            if contact.has_phone(&phone) {
                return Err(PhoneBookError::DuplicatePhone {
                    name: name.clone(),
                    phone,
                });
            }
        }
        debug!(name = %name, phone = %phone, "Adding phone");
        let (contact, _) = self.entry(name);
        contact.add_phone(phone)
    }

    fn remove_phone(&mut self, name: &ContactName, phone: &PhoneNumber) -> PhoneBookResult<()> {
        debug!(name = %name, phone = %phone, "Removing phone");
        self.existing_mut(name)?.remove_phone(phone)
    }

    fn replace_phone(
        &mut self,
        name: &ContactName,
        old: &PhoneNumber,
        new: PhoneNumber,
    ) -> PhoneBookResult<()> {
        debug!(name = %name, old = %old, new = %new, "Replacing phone");
        self.existing_mut(name)?.replace_phone(old, new)
    }

    fn delete_contact(&mut self, name: &ContactName) -> PhoneBookResult<()> {
        if self.contacts.remove(name).is_none() {
            return Err(PhoneBookError::ContactNotFound(name.clone()));
        }
        self.order.retain(|n| n != name);
        debug!(name = %name, "Deleted contact");
        Ok(())
    }

    fn get(&self, name: &ContactName) -> Option<Contact> {
        self.contacts.get(name).cloned()
    }

    fn list_all(&self) -> Listing {
        if self.contacts.is_empty() {
            return Listing::Empty;
        }
        Listing::Contacts(
            self.order
                .iter()
                .filter_map(|name| self.contacts.get(name).cloned())
                .collect(),
        )
    }
}
