//! The editor document store.
//!
//! Holds the live diagram, its undo history and the current selection. Every
//! structural mutation builds a new document from the live one and commits it
//! as a snapshot; undo and redo only move the history cursor. Selection lives
//! outside history.

use super::document::{Document, NodeId, StateNode, Transition, EMPTY_DOCUMENT};
use super::history::{EditKind, History, Snapshot};
use super::observer::{StoreEvent, StoreObserver, SubscriptionId};
use std::fmt;

/// Mutable document model with linear undo/redo.
///
/// The store is an ordinary value owned by the application shell; pass it by
/// reference to whatever needs it. Operations never fail: malformed or
/// dangling data is accepted as-is.
///
/// # Example
///
/// ```rust
/// use stateboard::{EditorStore, StateNode};
///
/// let mut store = EditorStore::new();
/// store.add_node(StateNode::new("a", "State 1", 0.0, 0.0));
/// store.add_node(StateNode::new("b", "State 2", 0.0, 0.0));
/// store.connect_nodes(&"a".into(), &"b".into());
///
/// assert_eq!(store.document().connections[0].label.as_deref(), Some("event1"));
/// assert_eq!(store.history().len(), 3);
///
/// store.undo();
/// assert!(store.document().connections.is_empty());
/// store.redo();
/// assert_eq!(store.document().connections.len(), 1);
/// ```
#[derive(Default)]
pub struct EditorStore {
    history: History,
    selected: Option<NodeId>,
    observers: Vec<(SubscriptionId, Box<dyn StoreObserver>)>,
    next_subscription: u64,
}

impl EditorStore {
    /// Create an empty store with empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The live document: the active history entry, or the empty document
    /// before the first commit.
    pub fn document(&self) -> &Document {
        self.history
            .current()
            .map(|s| s.document.as_ref())
            .unwrap_or(&EMPTY_DOCUMENT)
    }

    pub fn nodes(&self) -> &[StateNode] {
        &self.document().nodes
    }

    pub fn connections(&self) -> &[Transition] {
        &self.document().connections
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the active history entry, `None` while history is empty.
    pub fn history_index(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn selected_node(&self) -> Option<&NodeId> {
        self.selected.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Append `node` as given. Duplicate ids are not checked.
    pub fn add_node(&mut self, node: StateNode) {
        let mut next = self.document().clone();
        next.nodes.push(node);
        self.commit(next, EditKind::AddNode);
    }

    /// Set the position of every node with `id`.
    ///
    /// A snapshot is committed even when no node matches, so an unknown id
    /// still adds an (unchanged) history entry.
    pub fn move_node(&mut self, id: &NodeId, x: f64, y: f64) {
        let mut next = self.document().clone();
        let mut matched = false;
        for node in next.nodes.iter_mut().filter(|n| n.id == *id) {
            node.x = x;
            node.y = y;
            matched = true;
        }
        if !matched {
            tracing::debug!(node_id = %id, "move_node matched no node, committing unchanged document");
        }
        self.commit(next, EditKind::MoveNode);
    }

    /// Delete the node with `id` and every transition touching it.
    pub fn remove_node(&mut self, id: &NodeId) {
        let current = self.document();
        let next = Document {
            nodes: current
                .nodes
                .iter()
                .filter(|n| n.id != *id)
                .cloned()
                .collect(),
            connections: current
                .connections
                .iter()
                .filter(|c| !c.touches(id))
                .cloned()
                .collect(),
        };
        self.commit(next, EditKind::RemoveNode);
    }

    /// Append a transition labeled `event<N>`, N being the connection count
    /// after the append. Neither endpoint is checked; self-loops and dangling
    /// transitions are allowed.
    pub fn connect_nodes(&mut self, from: &NodeId, to: &NodeId) {
        let mut next = self.document().clone();
        let label = format!("event{}", next.connections.len() + 1);
        next.connections
            .push(Transition::new(from.clone(), to.clone()).with_label(label));
        self.commit(next, EditKind::ConnectNodes);
    }

    /// Set or clear the selection. Not recorded in history.
    pub fn select_node(&mut self, id: Option<NodeId>) {
        self.selected = id;
        self.emit(StoreEvent::SelectionChanged);
    }

    /// Replace the whole document, committing it as one snapshot.
    pub fn set_state(&mut self, document: Document) {
        self.commit(document, EditKind::Replace);
    }

    /// Move back one snapshot. Does nothing at the first entry.
    pub fn undo(&mut self) {
        if self.history.undo().is_some() {
            tracing::debug!(cursor = ?self.history.cursor(), "undo");
            self.emit(StoreEvent::Undone);
        }
    }

    /// Move forward one snapshot. Does nothing at the last entry.
    pub fn redo(&mut self) {
        if self.history.redo().is_some() {
            tracing::debug!(cursor = ?self.history.cursor(), "redo");
            self.emit(StoreEvent::Redone);
        }
    }

    /// Register an observer, notified after every commit, undo, redo and
    /// selection change.
    pub fn subscribe(&mut self, observer: impl StoreObserver + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn commit(&mut self, document: Document, kind: EditKind) {
        self.history.record(Snapshot::new(document, kind));
        tracing::debug!(
            kind = kind.name(),
            len = self.history.len(),
            cursor = ?self.history.cursor(),
            "committed snapshot"
        );
        self.emit(StoreEvent::Committed { kind });
    }

    fn emit(&mut self, event: StoreEvent) {
        let document = self
            .history
            .current()
            .map(|s| s.document.as_ref())
            .unwrap_or(&EMPTY_DOCUMENT);
        for (_, observer) in &mut self.observers {
            observer.notify(&event, document);
        }
    }
}

impl fmt::Debug for EditorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorStore")
            .field("document", self.document())
            .field("history_len", &self.history.len())
            .field("history_index", &self.history.cursor())
            .field("selected", &self.selected)
            .field("observers", &self.observers.len())
            .finish()
    }
}
