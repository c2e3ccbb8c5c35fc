use phone_book::domain::{ContactName, PhoneNumber};
use phone_book::error::PhoneBookResult;
use phone_book::models::Contact;
use phone_book::repositories::{ContactRepository, ContactStore, Listing};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Mock contact repository for testing.
///
/// Wraps a real in-memory store and records how often each method was
/// called. Clones share state, so a test can hand one clone to the
/// interpreter and inspect the other.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    store: Rc<RefCell<ContactStore>>,
    call_counts: Rc<RefCell<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a contact with phones without counting calls.
    pub fn add_contact(&self, name: &str, phones: &[&str]) {
        let name = ContactName::new(name).unwrap();
        let mut store = self.store.borrow_mut();
        store.create_or_get(&name);
        for phone in phones {
            store
                .add_phone(&name, PhoneNumber::new(*phone).unwrap())
                .unwrap();
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn create_or_get(&mut self, name: &ContactName) -> (Contact, bool) {
        self.track_call("create_or_get");
        self.store.borrow_mut().create_or_get(name)
    }

    fn add_phone(&mut self, name: &ContactName, phone: PhoneNumber) -> PhoneBookResult<()> {
        self.track_call("add_phone");
        self.store.borrow_mut().add_phone(name, phone)
    }

    fn remove_phone(&mut self, name: &ContactName, phone: &PhoneNumber) -> PhoneBookResult<()> {
        self.track_call("remove_phone");
        self.store.borrow_mut().remove_phone(name, phone)
    }

    fn replace_phone(
        &mut self,
        name: &ContactName,
        old: &PhoneNumber,
        new: PhoneNumber,
    ) -> PhoneBookResult<()> {
        self.track_call("replace_phone");
        self.store.borrow_mut().replace_phone(name, old, new)
    }

    fn delete_contact(&mut self, name: &ContactName) -> PhoneBookResult<()> {
        self.track_call("delete_contact");
        self.store.borrow_mut().delete_contact(name)
    }

    fn get(&self, name: &ContactName) -> Option<Contact> {
        self.track_call("get");
        self.store.borrow().get(name)
    }

    fn list_all(&self) -> Listing {
        self.track_call("list_all");
        self.store.borrow().list_all()
    }
}
