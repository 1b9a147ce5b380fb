//! Named address books holding contacts keyed by contact name.

use crate::contact::Contact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named address book holding at most one contact per contact name.
///
/// Contacts live in a map keyed by their name, so the "no duplicate names"
/// rule is enforced by the container itself rather than by an equality
/// convention: inserting a contact whose name is already present replaces
/// the earlier entry, and removal needs only the name. Iteration yields
/// contacts in name order.
///
/// Books are plain containers. All validation (non-empty names, non-empty
/// phones) happens in [`Directory`](crate::directory::Directory) before a
/// contact reaches a book, and every method here is total; nothing on
/// `AddressBook` can fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    /// The book's name, its key within a directory.
    name: String,

    /// Contacts keyed by contact name.
    contacts: BTreeMap<String, Contact>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: BTreeMap::new(),
        }
    }

    /// The book's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a contact, keyed by its name.
    ///
    /// Returns the replaced contact when one with the same name was already
    /// present (overwrite-by-name), `None` when the name is new.
    pub fn insert(&mut self, contact: Contact) -> Option<Contact> {
        self.contacts.insert(contact.name().to_string(), contact)
    }

    /// Remove the contact with this name.
    ///
    /// Returns the removed contact, or `None` when no contact had the name
    /// (removing a non-member is a no-op).
    pub fn remove(&mut self, name: &str) -> Option<Contact> {
        self.contacts.remove(name)
    }

    /// Look up a contact by name.
    pub fn get(&self, name: &str) -> Option<&Contact> {
        self.contacts.get(name)
    }

    /// Check whether a contact with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.contacts.contains_key(name)
    }

    /// Number of contacts in the book.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Check whether the book holds no contacts.
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The contacts, in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.values()
    }

    /// The contact names, in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contacts.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_book() -> AddressBook {
        let mut book = AddressBook::new("Manager");
        book.insert(Contact::new("Mario", "0433567453"));
        book.insert(Contact::new("Ian", "0433897853"));
        book.insert(Contact::new("Daniel", "0433327493"));
        book
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new("Manager");
        assert_eq!(book.name(), "Manager");
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
    }

    #[test]
    fn test_add_contact() {
        let mut book = manager_book();
        assert_eq!(book.len(), 3);

        let replaced = book.insert(Contact::new("Todd", "0433127293"));
        assert!(replaced.is_none());
        assert_eq!(book.len(), 4);
        assert!(book.contains("Todd"));
    }

    #[test]
    fn test_remove_contact() {
        let mut book = manager_book();

        let removed = book.remove("Mario");
        assert_eq!(removed.unwrap().phone(), "0433567453");
        assert_eq!(book.len(), 2);
        assert!(!book.contains("Mario"));
    }

    #[test]
    fn test_remove_non_member_is_noop() {
        let mut book = manager_book();
        assert!(book.remove("Nobody").is_none());
        assert_eq!(book.len(), 3);
    }

    #[test]
    fn test_insert_same_name_replaces() {
        let mut book = manager_book();

        let replaced = book.insert(Contact::new("Ian", "0400000000"));
        assert_eq!(replaced.unwrap().phone(), "0433897853");
        assert_eq!(book.len(), 3);
        assert_eq!(book.get("Ian").unwrap().phone(), "0400000000");
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let book = manager_book();
        let names: Vec<&str> = book.names().collect();
        assert_eq!(names, vec!["Daniel", "Ian", "Mario"]);

        let from_iter: Vec<&str> = book.iter().map(|c| c.name()).collect();
        assert_eq!(from_iter, names);
    }

    #[test]
    fn test_serialization_round_trip() {
        let book = manager_book();
        let json = serde_json::to_string(&book).unwrap();
        let recovered: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, book);
    }
}
