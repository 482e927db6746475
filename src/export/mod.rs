//! Projection of a document into a state-machine description.
//!
//! The description maps each state name to `{ "on": { <event>: <target> } }`,
//! keyed by display name rather than id. Keys keep node insertion order.
//!
//! # Example
//!
//! ```rust
//! use stateboard::export::export_json;
//! use stateboard::{Document, StateNode, Transition};
//!
//! let doc = Document::new(
//!     vec![
//!         StateNode::new("a", "State 1", 0.0, 0.0),
//!         StateNode::new("b", "State 2", 0.0, 0.0),
//!     ],
//!     vec![Transition::new("a", "b").with_label("event1")],
//! );
//!
//! let json: serde_json::Value = serde_json::from_str(&export_json(&doc).unwrap()).unwrap();
//! assert_eq!(json["State 1"]["on"]["event1"], "State 2");
//! ```

use crate::core::Document;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Event key used for transitions without a label.
pub const DEFAULT_EVENT: &str = "event";

/// Outgoing transitions of one state: event label to target state name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateEntry {
    pub on: IndexMap<String, String>,
}

/// State name to its outgoing transitions.
pub type MachineDescription = IndexMap<String, StateEntry>;

/// Build the description for `document`.
///
/// Every node gets an entry, even with no outgoing transitions. Transitions
/// whose endpoints do not both exist are skipped. Nodes sharing a name
/// collapse into one entry (the key keeps its first position); a warning is
/// logged, see [`duplicate_state_names`].
pub fn export_machine(document: &Document) -> MachineDescription {
    let duplicates = duplicate_state_names(document);
    if !duplicates.is_empty() {
        tracing::warn!(names = ?duplicates, "duplicate state names collapse on export");
    }

    let mut machine = MachineDescription::new();
    for node in &document.nodes {
        machine.insert(node.name.clone(), StateEntry::default());
    }

    for (conn, from, to) in document.resolved_connections() {
        let event = conn
            .label
            .as_deref()
            .filter(|label| !label.is_empty())
            .unwrap_or(DEFAULT_EVENT);
        if let Some(entry) = machine.get_mut(&from.name) {
            entry.on.insert(event.to_string(), to.name.clone());
        }
    }

    machine
}

/// The description as pretty-printed JSON text (two-space indent).
pub fn export_json(document: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&export_machine(document))
}

/// Names carried by more than one node, in order of first repetition.
pub fn duplicate_state_names(document: &Document) -> Vec<String> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for node in &document.nodes {
        *counts.entry(node.name.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(name, _)| name.to_string())
        .collect()
}
