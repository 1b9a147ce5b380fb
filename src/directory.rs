//! The directory: named address books and every operation on them.

use crate::book::AddressBook;
use crate::contact::Contact;
use crate::errors::{DirectoryError, DirectoryResult};
use crate::events::{DirectoryEvent, EventManager, EventReceiver};
use crate::report;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use tracing::{debug, info};

// ═══════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════

/// Configuration for a [`Directory`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Name of the book that exists from construction and receives
    /// contacts when no book is named.
    pub default_book: String,

    /// Broadcast channel capacity for event subscribers.
    pub event_capacity: usize,

    /// How many events the recent-events buffer keeps for polling.
    pub max_recent_events: usize,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            default_book: Directory::HOME.to_string(),
            event_capacity: 256,
            max_recent_events: 100,
        }
    }
}

impl DirectoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default book name.
    pub fn default_book(mut self, name: impl Into<String>) -> Self {
        self.default_book = name.into();
        self
    }

    /// Set the event broadcast capacity.
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity;
        self
    }

    /// Set the recent-events buffer length.
    pub fn max_recent_events(mut self, limit: usize) -> Self {
        self.max_recent_events = limit;
        self
    }
}

// ═══════════════════════════════════════════════════════════════════
// Directory
// ═══════════════════════════════════════════════════════════════════

/// An in-memory contact directory: a name-keyed collection of
/// [`AddressBook`]s plus the validated operations on them.
///
/// The directory is the sole entry point for mutations. Each operation
/// validates its inputs, resolves (or lazily creates) the target book,
/// delegates the container work to it, and emits a [`DirectoryEvent`]
/// describing the change. Book names are case-sensitive and, like contact
/// names within a book, unique by construction.
///
/// Nothing persists: dropping the directory drops every book and contact.
/// Mutations take `&mut self`; callers sharing a directory across threads
/// supply their own synchronization.
#[derive(Debug)]
pub struct Directory {
    /// Books keyed by book name.
    books: BTreeMap<String, AddressBook>,

    /// Where unaddressed adds and removals go.
    default_book: String,

    /// Mutation event fan-out.
    events: EventManager,
}

impl Directory {
    /// Name of the book every default-configured directory starts with.
    pub const HOME: &'static str = "HOME";

    /// Create a directory holding one empty book named [`Directory::HOME`].
    pub fn new() -> Self {
        Self::with_config(DirectoryConfig::default())
    }

    /// Create a directory from explicit configuration.
    ///
    /// The configured default book exists immediately. An empty
    /// default-book name falls back to [`Directory::HOME`], since a book
    /// with an empty name can never be addressed.
    pub fn with_config(config: DirectoryConfig) -> Self {
        let default_book = if config.default_book.is_empty() {
            Self::HOME.to_string()
        } else {
            config.default_book
        };

        let mut books = BTreeMap::new();
        books.insert(default_book.clone(), AddressBook::new(default_book.clone()));

        Self {
            books,
            default_book,
            events: EventManager::with_limits(config.event_capacity, config.max_recent_events),
        }
    }

    /// The name of the default book.
    pub fn default_book(&self) -> &str {
        &self.default_book
    }

    // ═══════════════════════════════════════════════════════════
    // Book operations
    // ═══════════════════════════════════════════════════════════

    /// Register a fresh, empty book under `name` and return it.
    ///
    /// An existing book of the same name is replaced wholesale, contacts
    /// included. Fails with [`DirectoryError::InvalidArgument`] when `name`
    /// is empty; the directory is unchanged in that case.
    pub fn create_book(&mut self, name: &str) -> DirectoryResult<&mut AddressBook> {
        if name.is_empty() {
            return Err(DirectoryError::book_name_required());
        }

        let book = match self.books.entry(name.to_string()) {
            Entry::Occupied(mut entry) => {
                entry.insert(AddressBook::new(name));
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(AddressBook::new(name)),
        };

        self.events.emit(DirectoryEvent::book_created(name));
        Ok(book)
    }

    /// Return the book named `name`, creating it first when absent.
    ///
    /// Unlike [`Directory::create_book`], an existing book is returned
    /// untouched. Fails with [`DirectoryError::InvalidArgument`] when
    /// `name` is empty.
    pub fn open_book(&mut self, name: &str) -> DirectoryResult<&mut AddressBook> {
        if name.is_empty() {
            return Err(DirectoryError::book_name_required());
        }

        let created = !self.books.contains_key(name);
        let book = self
            .books
            .entry(name.to_string())
            .or_insert_with(|| AddressBook::new(name));

        if created {
            self.events.emit(DirectoryEvent::book_created(name));
        }
        Ok(book)
    }

    /// Remove the book named `name`, contacts and all.
    ///
    /// Returns the removed book, or `None` when no book had the name
    /// (removing an unknown book is a no-op). The default book is not
    /// special here; removing it leaves unaddressed adds to lazily
    /// recreate it.
    pub fn remove_book(&mut self, name: &str) -> Option<AddressBook> {
        let removed = self.books.remove(name);
        if removed.is_some() {
            debug!(book = name, "book removed");
            self.events.emit(DirectoryEvent::book_removed(name));
        }
        removed
    }

    /// A read view of the named book.
    ///
    /// Fails with [`DirectoryError::BookNotFound`] when no book has the
    /// name; lookups never create books.
    pub fn book(&self, name: &str) -> DirectoryResult<&AddressBook> {
        self.books
            .get(name)
            .ok_or_else(|| DirectoryError::book_not_found(name))
    }

    /// Names of all registered books, in order.
    pub fn book_names(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    /// Number of registered books.
    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Check whether a book with this name is registered.
    pub fn contains_book(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════
    // Contact operations
    // ═══════════════════════════════════════════════════════════

    /// Add a contact to the default book. See [`Directory::add_contact_to`].
    pub fn add_contact(&mut self, contact: Contact) -> DirectoryResult<Contact> {
        let book = self.default_book.clone();
        self.add_contact_to(&book, contact)
    }

    /// Add a contact to the named book, creating the book when absent.
    ///
    /// The contact's name and phone must both be non-empty; the name is
    /// checked first. On success the contact is stored keyed by its name,
    /// replacing any same-named entry, and returned with its book
    /// back-link set.
    pub fn add_contact_to(
        &mut self,
        book_name: &str,
        mut contact: Contact,
    ) -> DirectoryResult<Contact> {
        if contact.name().is_empty() {
            return Err(DirectoryError::contact_name_required());
        }
        if contact.phone().is_empty() {
            return Err(DirectoryError::contact_phone_required());
        }

        contact.set_book(book_name);
        let stored = contact.clone();
        let name = stored.name().to_string();

        let book = self.open_book(book_name)?;
        let replaced = book.insert(contact).is_some();

        debug!(book = book_name, contact = %name, replaced, "contact added");
        self.events
            .emit(DirectoryEvent::contact_added(book_name, &name, replaced));
        Ok(stored)
    }

    /// Remove a contact from the default book by name.
    /// See [`Directory::remove_contact_from`].
    pub fn remove_contact(&mut self, name: &str) -> DirectoryResult<Option<Contact>> {
        let book = self.default_book.clone();
        self.remove_contact_from(&book, name)
    }

    /// Remove the contact named `name` from the named book.
    ///
    /// Fails with [`DirectoryError::BookNotFound`] when the book does not
    /// exist. A book that exists but has no contact under `name` yields
    /// `Ok(None)`: the absent contact is a silent no-op, the absent book
    /// is not.
    pub fn remove_contact_from(
        &mut self,
        book_name: &str,
        name: &str,
    ) -> DirectoryResult<Option<Contact>> {
        let book = self
            .books
            .get_mut(book_name)
            .ok_or_else(|| DirectoryError::book_not_found(book_name))?;

        let removed = book.remove(name);
        if removed.is_some() {
            debug!(book = book_name, contact = name, "contact removed");
            self.events
                .emit(DirectoryEvent::contact_removed(book_name, name));
        }
        Ok(removed)
    }

    // ═══════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════

    /// The contacts of the named book, in name order.
    pub fn contacts(&self, book_name: &str) -> DirectoryResult<impl Iterator<Item = &Contact>> {
        Ok(self.book(book_name)?.iter())
    }

    /// Every contact in the directory, deduplicated by name.
    ///
    /// Contact identity is the name alone, so a name held by several books
    /// collapses to one entry here even though each book still reports its
    /// own copy. The surviving copy comes from the alphabetically first
    /// book holding the name. Results are in name order.
    pub fn all_contacts(&self) -> Vec<&Contact> {
        let mut merged: BTreeMap<&str, &Contact> = BTreeMap::new();
        for book in self.books.values() {
            for contact in book.iter() {
                merged.entry(contact.name()).or_insert(contact);
            }
        }
        merged.into_values().collect()
    }

    // ═══════════════════════════════════════════════════════════
    // Events
    // ═══════════════════════════════════════════════════════════

    /// Subscribe to mutation events.
    pub fn subscribe(&self) -> EventReceiver {
        self.events.subscribe()
    }

    /// The most recent mutation events, newest first.
    pub fn recent_events(&self, limit: usize) -> Vec<DirectoryEvent> {
        self.events.recent(limit)
    }

    // ═══════════════════════════════════════════════════════════
    // Diagnostics
    // ═══════════════════════════════════════════════════════════

    /// Log every contact in the directory at INFO, one line per contact
    /// (deduplicated across books, like [`Directory::all_contacts`]).
    /// Diagnostic output only; directory state is untouched.
    pub fn display_all_contacts(&self) {
        info!("listing all contacts");
        for line in report::render_lines(self.all_contacts()) {
            info!("{line}");
        }
    }

    /// Log every contact of the named book at INFO.
    ///
    /// Fails with [`DirectoryError::BookNotFound`] like any other lookup.
    pub fn display_contacts(&self, book_name: &str) -> DirectoryResult<()> {
        let book = self.book(book_name)?;
        info!(book = book_name, "listing contacts");
        for line in report::render_lines(book.iter()) {
            info!("{line}");
        }
        Ok(())
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}
