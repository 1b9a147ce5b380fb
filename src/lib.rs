//! # Contact Directory
//!
//! An in-memory contact directory: contacts grouped into named address
//! books, with operations to create and remove books, add and remove
//! contacts, and query contacts per book or across the whole directory.
//!
//! The pieces:
//!
//! - **[`Contact`]**: a name + phone pair. The name IS the identity: a
//!   book never holds two contacts with the same name, and adding a
//!   duplicate name overwrites the earlier entry.
//! - **[`AddressBook`]**: a named, name-keyed contact collection. Plain
//!   container; every method is total.
//! - **[`Directory`]**: owns the books and validates every operation. A
//!   default `"HOME"` book exists from construction, and unaddressed adds
//!   and removals go there.
//! - **[`DirectoryRequest`] / [`Directory::apply`]**: the same operations
//!   as data, for front ends driving the directory from deserialized
//!   input.
//! - **[`DirectoryEvent`]**: emitted on every successful mutation, over a
//!   broadcast channel plus a polled recent-events buffer.
//!
//! Nothing persists. All state lives in the [`Directory`] value and is
//! gone when it drops; mutations take `&mut self`, so sharing across
//! threads is the caller's synchronization problem.
//!
//! ## Usage
//!
//! ```
//! use contact_directory::prelude::*;
//!
//! let mut directory = Directory::new();
//! directory.add_contact(Contact::new("Harry", "04 22179380"))?;
//! directory.add_contact_to("WORK", Contact::new("Sava", "04 25664445"))?;
//!
//! assert_eq!(directory.book(Directory::HOME)?.len(), 1);
//! assert_eq!(directory.book_count(), 2);
//! assert_eq!(directory.all_contacts().len(), 2);
//! # Ok::<(), contact_directory::DirectoryError>(())
//! ```

pub mod book;
pub mod contact;
pub mod directory;
pub mod errors;
pub mod events;
pub mod report;
pub mod request;

// Re-export everything in prelude for convenience
pub mod prelude {
    pub use crate::book::*;
    pub use crate::contact::*;
    pub use crate::directory::*;
    pub use crate::errors::*;
    pub use crate::events::*;
    pub use crate::report::*;
    pub use crate::request::*;
}

// Also re-export at crate root
pub use prelude::*;
