//! Change notification for views bound to the store.

use super::document::Document;
use super::history::EditKind;

/// What just happened in the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreEvent {
    /// A mutation committed a new snapshot
    Committed { kind: EditKind },
    /// The cursor moved back one snapshot
    Undone,
    /// The cursor moved forward one snapshot
    Redone,
    /// The selection changed; the document did not
    SelectionChanged,
}

impl StoreEvent {
    /// Whether the live document may differ from before the event.
    pub fn changes_document(&self) -> bool {
        !matches!(self, Self::SelectionChanged)
    }
}

/// Receives store events after they take effect.
///
/// Observers see the live document as of the event. Any `FnMut(&StoreEvent,
/// &Document)` closure is an observer.
pub trait StoreObserver {
    fn notify(&mut self, event: &StoreEvent, document: &Document);
}

impl<F> StoreObserver for F
where
    F: FnMut(&StoreEvent, &Document),
{
    fn notify(&mut self, event: &StoreEvent, document: &Document) {
        self(event, document)
    }
}

/// Handle returned by `EditorStore::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
