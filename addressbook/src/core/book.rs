//! In-memory contact collection keyed by name.

use std::collections::BTreeMap;

use super::contact::Contact;

/// Mapping from contact name to contact.
///
/// At most one contact exists per name; [`AddressBook::add`] overwrites.
/// Iteration order is by name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressBook {
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `contact`, replacing any existing entry with the same name.
    pub fn add(&mut self, contact: Contact) {
        self.contacts.insert(contact.name.clone(), contact);
    }

    /// Remove the entry for `name`. Absent names are a no-op.
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    pub fn find(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    pub fn all(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl Extend<Contact> for AddressBook {
    fn extend<I: IntoIterator<Item = Contact>>(&mut self, iter: I) {
        for contact in iter {
            self.add(contact);
        }
    }
}

impl FromIterator<Contact> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        let mut book = Self::new();
        book.extend(iter);
        book
    }
}
