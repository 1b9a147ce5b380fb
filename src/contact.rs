//! Contact model shared by every directory operation.

use serde::{Deserialize, Serialize};

/// A directory entry: a name and a phone number.
///
/// The name IS the contact's identity. Address books key their contents by
/// contact name, so a book never holds two contacts with the same name and
/// inserting a duplicate name replaces the earlier entry. The phone number
/// is payload only and never participates in identity.
///
/// Construction accepts any strings; the required-field checks (non-empty
/// name, non-empty phone) run when the contact is added to a
/// [`Directory`](crate::directory::Directory), so a half-filled contact can
/// exist while a caller assembles it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Contact name; identity within a book, fixed after construction.
    name: String,

    /// Phone number, replaceable at any time.
    phone: String,

    /// Back-link to the book holding this contact, set on add.
    /// Informational only; never consulted for identity or lookups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    book: Option<String>,
}

impl Contact {
    /// Create a new contact.
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            book: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contact's phone number.
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Replace the phone number.
    ///
    /// There is no `set_name`: the name keys the containing book, so
    /// renaming is remove + add.
    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    /// Name of the address book holding this contact, if it has been added
    /// to a directory.
    pub fn book(&self) -> Option<&str> {
        self.book.as_deref()
    }

    pub(crate) fn set_book(&mut self, book: impl Into<String>) {
        self.book = Some(book.into());
    }
}

impl std::fmt::Display for Contact {
    /// One diagnostic line: name, three spaces, phone.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}   {}", self.name, self.phone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_creation() {
        let contact = Contact::new("Harry", "04 22179380");
        assert_eq!(contact.name(), "Harry");
        assert_eq!(contact.phone(), "04 22179380");
        assert_eq!(contact.book(), None);
    }

    #[test]
    fn test_set_phone() {
        let mut contact = Contact::new("Lisa", "04 2299888");
        contact.set_phone("04 4555678");
        assert_eq!(contact.phone(), "04 4555678");
        assert_eq!(contact.name(), "Lisa");
    }

    #[test]
    fn test_display_line() {
        let contact = Contact::new("Jack", "04 22189900");
        assert_eq!(contact.to_string(), "Jack   04 22189900");
    }

    #[test]
    fn test_serialization_skips_unset_book() {
        let contact = Contact::new("Sava", "04 25664445");
        let json = serde_json::to_string(&contact).unwrap();
        assert!(!json.contains("book"));

        let recovered: Contact = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, contact);
    }

    #[test]
    fn test_deserialization_without_book_field() {
        let json = r#"{"name": "Chris", "phone": "04 35665775"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.name(), "Chris");
        assert_eq!(contact.book(), None);
    }
}
