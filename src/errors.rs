//! Standard error types for directory operations.
//!
//! Three failure kinds, all raised synchronously by the operation that hit
//! them:
//!
//! 1. **InvalidArgument** — an empty string was supplied where a value is
//!    required (book name, contact name, contact phone).
//!
//! 2. **MissingContact** — an add request arrived without a contact payload.
//!    Only representable at the request boundary; the typed API takes
//!    contacts by value.
//!
//! 3. **BookNotFound** — a lookup, listing, or contact removal referenced a
//!    book name with no registered book.
//!
//! # Validation Rule
//!
//! Every operation validates before it mutates. A returned error means the
//! directory is exactly as it was before the call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════
// Error type
// ═══════════════════════════════════════════════════════════════════

/// Standard error type for ALL directory operations.
///
/// Carries enough structure for callers to match on the failure kind and
/// recover (retry with a non-empty value, create the missing book, attach
/// the contact payload).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DirectoryError {
    /// An empty string was supplied where a value is required.
    #[error("{field} is required")]
    InvalidArgument {
        /// Which required field was empty.
        field: RequiredField,
    },

    /// An add request was applied without a contact payload.
    #[error("a contact is required")]
    MissingContact,

    /// The named address book is not registered in the directory.
    #[error("address book not found: {name}")]
    BookNotFound {
        /// The book name that had no entry.
        name: String,
    },
}

impl DirectoryError {
    // ═══════════════════════════════════════════════════════════
    // Common error constructors
    // ═══════════════════════════════════════════════════════════

    /// Empty address book name
    pub fn book_name_required() -> Self {
        Self::InvalidArgument {
            field: RequiredField::BookName,
        }
    }

    /// Empty contact name
    pub fn contact_name_required() -> Self {
        Self::InvalidArgument {
            field: RequiredField::ContactName,
        }
    }

    /// Empty contact phone
    pub fn contact_phone_required() -> Self {
        Self::InvalidArgument {
            field: RequiredField::ContactPhone,
        }
    }

    /// Unknown address book
    pub fn book_not_found(name: impl Into<String>) -> Self {
        Self::BookNotFound { name: name.into() }
    }

    /// Check if this error reports a missing required value
    /// (as opposed to a failed lookup).
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::MissingContact)
    }
}

/// The required fields an operation can reject as empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredField {
    /// Name of an address book
    BookName,

    /// Name of a contact
    ContactName,

    /// Phone number of a contact
    ContactPhone,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BookName => write!(f, "address book name"),
            Self::ContactName => write!(f, "contact name"),
            Self::ContactPhone => write!(f, "contact phone"),
        }
    }
}

/// Result type alias for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;
