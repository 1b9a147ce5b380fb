//! Directory operations as data.
//!
//! Front ends that receive operations as structured input (scripted
//! fixtures, JSON command streams) drive the directory through
//! [`DirectoryRequest`] values instead of direct method calls. This is
//! also the one boundary where an add can arrive *without* a contact
//! payload; [`Directory::apply`] rejects that with
//! [`DirectoryError::MissingContact`] before touching any state.

use crate::contact::Contact;
use crate::directory::Directory;
use crate::errors::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};

/// A single directory operation, as data.
///
/// For the operations that target a book, `book: None` selects the
/// directory's default book; for [`DirectoryRequest::GetContacts`] it
/// instead means the whole directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DirectoryRequest {
    /// Register a fresh book, replacing any existing book of that name.
    CreateBook { name: String },

    /// Remove a book and everything in it.
    RemoveBook { name: String },

    /// Add a contact. The payload is optional at this boundary so that a
    /// request missing it can be rejected rather than fail to parse.
    AddContact {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        book: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        contact: Option<Contact>,
    },

    /// Remove a contact by name.
    RemoveContact {
        name: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        book: Option<String>,
    },

    /// List the contacts of one book, or of the whole directory.
    GetContacts {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        book: Option<String>,
    },

    /// List the names of all registered books.
    ListBooks,
}

impl DirectoryRequest {
    /// Parse a request from its JSON form.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The JSON form of this request.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// What a successfully applied request produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum DirectoryResponse {
    /// A book was registered.
    Book { name: String },

    /// A removal finished; `existed` reports whether anything was
    /// actually removed.
    Removed { existed: bool },

    /// A contact was stored.
    Contact { contact: Contact },

    /// A contact listing.
    Contacts { contacts: Vec<Contact> },

    /// A book-name listing.
    Books { names: Vec<String> },
}

impl DirectoryResponse {
    /// The JSON form of this response.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Directory {
    /// Apply one request, mapping it onto the equivalent typed operation.
    ///
    /// Requests fail exactly where their typed counterparts do, plus
    /// [`DirectoryError::MissingContact`] for an add with no payload. A
    /// failed request leaves the directory unchanged.
    pub fn apply(&mut self, request: DirectoryRequest) -> DirectoryResult<DirectoryResponse> {
        match request {
            DirectoryRequest::CreateBook { name } => {
                let book = self.create_book(&name)?;
                Ok(DirectoryResponse::Book {
                    name: book.name().to_string(),
                })
            }

            DirectoryRequest::RemoveBook { name } => Ok(DirectoryResponse::Removed {
                existed: self.remove_book(&name).is_some(),
            }),

            DirectoryRequest::AddContact { book, contact } => {
                let contact = contact.ok_or(DirectoryError::MissingContact)?;
                let book = book.unwrap_or_else(|| self.default_book().to_string());
                let stored = self.add_contact_to(&book, contact)?;
                Ok(DirectoryResponse::Contact { contact: stored })
            }

            DirectoryRequest::RemoveContact { name, book } => {
                let book = book.unwrap_or_else(|| self.default_book().to_string());
                let removed = self.remove_contact_from(&book, &name)?;
                Ok(DirectoryResponse::Removed {
                    existed: removed.is_some(),
                })
            }

            DirectoryRequest::GetContacts { book } => {
                let contacts = match book {
                    Some(name) => self.book(&name)?.iter().cloned().collect(),
                    None => self.all_contacts().into_iter().cloned().collect(),
                };
                Ok(DirectoryResponse::Contacts { contacts })
            }

            DirectoryRequest::ListBooks => Ok(DirectoryResponse::Books {
                names: self.book_names().map(String::from).collect(),
            }),
        }
    }
}
