//! Directory mutation events for observability.
//!
//! Every successful mutation emits one event describing exactly what
//! changed (two when an add lazily creates its target book). Consumers
//! subscribe over a broadcast channel, or poll a bounded buffer of recent
//! events. Failed operations emit nothing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

/// Unique event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub Uuid);

impl EventId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "evt_{}", self.0)
    }
}

/// The mutations a directory reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum EventKind {
    // ═══════════════════════════════════════════════════════
    // BOOK EVENTS
    // ═══════════════════════════════════════════════════════
    /// A book was created, directly or lazily by an add.
    BookCreated { book: String },

    /// A book was removed together with all its contacts.
    BookRemoved { book: String },

    // ═══════════════════════════════════════════════════════
    // CONTACT EVENTS
    // ═══════════════════════════════════════════════════════
    /// A contact was stored in a book. `replaced` is true when a contact
    /// with the same name was overwritten.
    ContactAdded {
        book: String,
        name: String,
        replaced: bool,
    },

    /// A contact was removed from a book.
    ContactRemoved { book: String, name: String },
}

impl EventKind {
    /// Stable label for this kind, matching its serialized `event_type` tag.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BookCreated { .. } => "book_created",
            Self::BookRemoved { .. } => "book_removed",
            Self::ContactAdded { .. } => "contact_added",
            Self::ContactRemoved { .. } => "contact_removed",
        }
    }

    /// The book this event concerns.
    pub fn book(&self) -> &str {
        match self {
            Self::BookCreated { book }
            | Self::BookRemoved { book }
            | Self::ContactAdded { book, .. }
            | Self::ContactRemoved { book, .. } => book,
        }
    }
}

/// Event emitted by a directory mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEvent {
    /// Unique event ID.
    pub id: EventId,

    /// What changed.
    #[serde(flatten)]
    pub kind: EventKind,

    /// When it changed.
    pub timestamp: DateTime<Utc>,
}

impl DirectoryEvent {
    /// Create a new event stamped with the current time.
    pub fn new(kind: EventKind) -> Self {
        Self {
            id: EventId::new(),
            kind,
            timestamp: Utc::now(),
        }
    }

    // Event constructors

    pub fn book_created(book: impl Into<String>) -> Self {
        Self::new(EventKind::BookCreated { book: book.into() })
    }

    pub fn book_removed(book: impl Into<String>) -> Self {
        Self::new(EventKind::BookRemoved { book: book.into() })
    }

    pub fn contact_added(book: impl Into<String>, name: impl Into<String>, replaced: bool) -> Self {
        Self::new(EventKind::ContactAdded {
            book: book.into(),
            name: name.into(),
            replaced,
        })
    }

    pub fn contact_removed(book: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(EventKind::ContactRemoved {
            book: book.into(),
            name: name.into(),
        })
    }
}

/// Filter for consuming a subset of events.
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Only match events concerning this book.
    pub book: Option<String>,

    /// Only match events whose [`EventKind::label`] is listed here.
    pub kinds: Option<Vec<String>>,
}

impl EventFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn for_book(mut self, book: impl Into<String>) -> Self {
        self.book = Some(book.into());
        self
    }

    pub fn for_kind(mut self, label: impl Into<String>) -> Self {
        self.kinds.get_or_insert_with(Vec::new).push(label.into());
        self
    }

    /// Check if an event matches this filter.
    pub fn matches(&self, event: &DirectoryEvent) -> bool {
        if let Some(book) = &self.book {
            if event.kind.book() != book {
                return false;
            }
        }

        if let Some(kinds) = &self.kinds {
            if !kinds.iter().any(|k| k == event.kind.label()) {
                return false;
            }
        }

        true
    }
}

/// Event receiver (broadcast channel).
pub type EventReceiver = broadcast::Receiver<DirectoryEvent>;

/// Event sender (broadcast channel).
pub type EventSender = broadcast::Sender<DirectoryEvent>;

/// Helper struct for managing event emission.
#[derive(Debug)]
pub struct EventManager {
    sender: EventSender,
    recent: std::sync::Mutex<Vec<DirectoryEvent>>,
    max_recent: usize,
}

impl EventManager {
    /// Create a new event manager. A zero capacity is bumped to one, since
    /// the broadcast channel requires at least one slot.
    pub fn new(capacity: usize) -> Self {
        Self::with_limits(capacity, 100)
    }

    /// Create an event manager with an explicit recent-buffer length.
    pub fn with_limits(capacity: usize, max_recent: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self {
            sender,
            recent: std::sync::Mutex::new(Vec::new()),
            max_recent,
        }
    }

    /// Emit an event.
    pub fn emit(&self, event: DirectoryEvent) {
        // Store in recent
        {
            let mut recent = self.recent.lock().unwrap();
            recent.push(event.clone());
            if recent.len() > self.max_recent {
                recent.remove(0);
            }
        }

        // Broadcast (ignore errors if no subscribers)
        let _ = self.sender.send(event);
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> EventReceiver {
        self.sender.subscribe()
    }

    /// Get recent events, newest first.
    pub fn recent(&self, limit: usize) -> Vec<DirectoryEvent> {
        let recent = self.recent.lock().unwrap();
        recent.iter().rev().take(limit).cloned().collect()
    }
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_creation() {
        let event = DirectoryEvent::contact_added("WORK", "Sava", false);
        assert_eq!(
            event.kind,
            EventKind::ContactAdded {
                book: "WORK".to_string(),
                name: "Sava".to_string(),
                replaced: false,
            }
        );
        assert_eq!(event.kind.book(), "WORK");
        assert_eq!(event.kind.label(), "contact_added");
        assert!(event.id.to_string().starts_with("evt_"));
    }

    #[test]
    fn test_event_filter() {
        let event = DirectoryEvent::book_created("FRIENDS");

        let filter = EventFilter::new().for_book("FRIENDS");
        assert!(filter.matches(&event));

        let filter2 = EventFilter::new().for_book("HOME");
        assert!(!filter2.matches(&event));

        let filter3 = EventFilter::new().for_kind("book_created");
        assert!(filter3.matches(&event));

        let filter4 = EventFilter::new()
            .for_book("FRIENDS")
            .for_kind("book_removed");
        assert!(!filter4.matches(&event));
    }

    #[test]
    fn test_event_manager() {
        let manager = EventManager::new(10);

        manager.emit(DirectoryEvent::book_created("WORK"));
        manager.emit(DirectoryEvent::contact_added("WORK", "Sava", false));

        let recent = manager.recent(10);
        assert_eq!(recent.len(), 2);
        // Newest first
        assert_eq!(recent[0].kind.label(), "contact_added");
        assert_eq!(recent[1].kind.label(), "book_created");
    }

    #[test]
    fn test_recent_buffer_is_bounded() {
        let manager = EventManager::with_limits(16, 3);
        for i in 0..5 {
            manager.emit(DirectoryEvent::book_created(format!("BOOK{}", i)));
        }

        let recent = manager.recent(10);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].kind.book(), "BOOK4");
        assert_eq!(recent[2].kind.book(), "BOOK2");
    }

    #[test]
    fn test_subscriber_receives_events() {
        let manager = EventManager::new(10);
        let mut rx = manager.subscribe();

        manager.emit(DirectoryEvent::contact_removed("HOME", "Harry"));

        let event = rx.try_recv().unwrap();
        assert_eq!(
            event.kind,
            EventKind::ContactRemoved {
                book: "HOME".to_string(),
                name: "Harry".to_string(),
            }
        );
    }

    #[test]
    fn test_event_serialization_flattens_kind() {
        let event = DirectoryEvent::book_removed("WORK");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event_type"], "book_removed");
        assert_eq!(json["book"], "WORK");

        let recovered: DirectoryEvent = serde_json::from_value(json).unwrap();
        assert_eq!(recovered.kind, event.kind);
        assert_eq!(recovered.id, event.id);
    }
}
