//! Linear undo history.
//!
//! History is an ordered list of snapshots plus a cursor marking the active
//! one. Recording a snapshot discards everything after the cursor; undo and
//! redo only move the cursor.

use super::document::Document;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which store operation produced a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    AddNode,
    MoveNode,
    RemoveNode,
    ConnectNodes,
    Replace,
}

impl EditKind {
    /// Human-readable name, suitable for "Undo <name>" menu entries.
    pub fn name(&self) -> &str {
        match self {
            Self::AddNode => "Add State",
            Self::MoveNode => "Move State",
            Self::RemoveNode => "Remove State",
            Self::ConnectNodes => "Connect States",
            Self::Replace => "Replace Diagram",
        }
    }
}

/// Immutable document value stored in history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// The document as it was after the edit
    pub document: Arc<Document>,
    /// The edit that produced it
    pub kind: EditKind,
    /// When the edit was committed
    pub committed_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(document: Document, kind: EditKind) -> Self {
        Self {
            document: Arc::new(document),
            kind,
            committed_at: Utc::now(),
        }
    }
}

/// Ordered snapshots with a cursor.
///
/// Invariant: the cursor is `None` exactly when there are no entries, and
/// otherwise indexes an existing entry.
///
/// # Example
///
/// ```rust
/// use stateboard::core::{Document, EditKind, History, Snapshot};
///
/// let mut history = History::new();
/// history.record(Snapshot::new(Document::default(), EditKind::Replace));
/// history.record(Snapshot::new(Document::default(), EditKind::Replace));
/// assert_eq!(history.cursor(), Some(1));
///
/// assert!(history.undo().is_some());
/// assert_eq!(history.cursor(), Some(0));
///
/// // Recording after an undo drops the undone entry
/// history.record(Snapshot::new(Document::default(), EditKind::Replace));
/// assert_eq!(history.len(), 2);
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
        }
    }

    /// Truncate to the cursor, append `snapshot`, and move the cursor to it.
    pub fn record(&mut self, snapshot: Snapshot) {
        let keep = self.cursor.map_or(0, |c| c + 1);
        self.entries.truncate(keep);
        self.entries.push(snapshot);
        self.cursor = Some(self.entries.len() - 1);
    }

    /// Step the cursor back one entry. Returns the newly active snapshot, or
    /// `None` without changing anything when there is no earlier entry.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let target = self.undo_target()?;
        self.cursor = Some(target);
        self.entries.get(target)
    }

    /// Step the cursor forward one entry. Returns the newly active snapshot,
    /// or `None` without changing anything when there is no later entry.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let target = self.redo_target()?;
        self.cursor = Some(target);
        self.entries.get(target)
    }

    pub fn can_undo(&self) -> bool {
        self.undo_target().is_some()
    }

    pub fn can_redo(&self) -> bool {
        self.redo_target().is_some()
    }

    // Only indexes of existing entries are valid targets.
    fn undo_target(&self) -> Option<usize> {
        let target = self.cursor?.checked_sub(1)?;
        (target < self.entries.len()).then_some(target)
    }

    fn redo_target(&self) -> Option<usize> {
        let target = self.cursor?.checked_add(1)?;
        (target < self.entries.len()).then_some(target)
    }

    /// The active snapshot, if any edit has been recorded.
    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.entries.get(c))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

}
