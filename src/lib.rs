//! Stateboard: the document model behind a state-machine diagram editor
//!
//! Users place named states on a canvas, draw labeled transitions between
//! them, share diagrams as links and export them as state-machine
//! descriptions. This crate is everything below the pixels: the entity model,
//! the undoable store, the link codec, persistence and export.
//!
//! # Core Concepts
//!
//! - **Document**: nodes and transitions of one diagram
//! - **Store**: applies edits, records each result as a snapshot in a linear
//!   history, and supports undo/redo over it
//! - **Shell**: owns the store, restores from a link or storage on mount and
//!   mirrors every change back to storage
//!
//! # Example
//!
//! ```rust
//! use stateboard::export::export_json;
//! use stateboard::{EditorStore, StateNode};
//!
//! let mut store = EditorStore::new();
//! store.add_node(StateNode::new("a", "State 1", 0.0, 0.0));
//! store.add_node(StateNode::new("b", "State 2", 0.0, 0.0));
//! store.connect_nodes(&"a".into(), &"b".into());
//!
//! let machine: serde_json::Value =
//!     serde_json::from_str(&export_json(store.document()).unwrap()).unwrap();
//! assert_eq!(
//!     machine,
//!     serde_json::json!({
//!         "State 1": { "on": { "event1": "State 2" } },
//!         "State 2": { "on": {} }
//!     })
//! );
//! ```

pub mod codec;
pub mod config;
pub mod core;
pub mod export;
pub mod persistence;
pub mod shell;

// Re-export commonly used types
pub use config::EditorConfig;
pub use core::{Document, EditorStore, NodeId, StateNode, StoreEvent, StoreObserver, Transition};
pub use shell::{BuildError, EditorBuilder, EditorShell};
