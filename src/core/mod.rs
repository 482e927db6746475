//! Editor core: the diagram entity model and the undoable document store.
//!
//! - `Document`, `StateNode` and `Transition` describe one diagram
//! - `History` keeps snapshots with a cursor for linear undo/redo
//! - `EditorStore` applies edits, commits snapshots and notifies observers
//!
//! Nothing in this module performs I/O.

mod document;
mod history;
mod observer;
mod store;

pub use document::{Document, NodeId, StateNode, Transition};
pub use history::{EditKind, History, Snapshot};
pub use observer::{StoreEvent, StoreObserver, SubscriptionId};
pub use store::EditorStore;
