//! Diagram entities: state nodes, transitions and the document that holds them.
//!
//! A [`Document`] is a plain value. The store keeps immutable copies of it in
//! history, and the codec and persistence layers serialize it as
//! `{ "nodes": [...], "connections": [...] }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of a state node.
///
/// Identity is by id only. Ids coming from shared links or storage are
/// arbitrary strings; fresh ids are random UUIDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    ///
    /// ```rust
    /// use stateboard::NodeId;
    ///
    /// let a = NodeId::generate();
    /// let b = NodeId::generate();
    /// assert_ne!(a, b);
    /// ```
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A named state placed on the canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateNode {
    pub id: NodeId,
    /// Display label, also the key used on export. Not required to be unique.
    pub name: String,
    pub x: f64,
    pub y: f64,
}

impl StateNode {
    pub fn new(id: impl Into<NodeId>, name: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            x,
            y,
        }
    }
}

/// Directed, optionally labeled edge between two nodes, referenced by id.
///
/// Either endpoint may name a node that does not exist (a dangling
/// transition); consumers skip such entries instead of rejecting them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Transition {
    pub fn new(from: impl Into<NodeId>, to: impl Into<NodeId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether either endpoint is `id`.
    pub fn touches(&self, id: &NodeId) -> bool {
        self.from == *id || self.to == *id
    }
}

/// One diagram state: nodes and transitions in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<StateNode>,
    pub connections: Vec<Transition>,
}

pub(crate) static EMPTY_DOCUMENT: Document = Document {
    nodes: Vec::new(),
    connections: Vec::new(),
};

impl Document {
    pub fn new(nodes: Vec<StateNode>, connections: Vec<Transition>) -> Self {
        Self { nodes, connections }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.connections.is_empty()
    }

    /// First node with the given id.
    pub fn node(&self, id: &NodeId) -> Option<&StateNode> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Transitions whose endpoints both resolve to existing nodes, paired
    /// with those nodes.
    pub fn resolved_connections(
        &self,
    ) -> impl Iterator<Item = (&Transition, &StateNode, &StateNode)> + '_ {
        self.connections.iter().filter_map(move |conn| {
            let from = self.node(&conn.from)?;
            let to = self.node(&conn.to)?;
            Some((conn, from, to))
        })
    }

    /// Transitions with at least one endpoint missing.
    pub fn dangling_connections(&self) -> impl Iterator<Item = &Transition> + '_ {
        self.connections
            .iter()
            .filter(move |c| self.node(&c.from).is_none() || self.node(&c.to).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(
            vec![
                StateNode::new("a", "Idle", 0.0, 0.0),
                StateNode::new("b", "Busy", 10.0, 20.0),
            ],
            vec![
                Transition::new("a", "b").with_label("start"),
                Transition::new("b", "ghost"),
            ],
        )
    }

    #[test]
    fn node_lookup_by_id() {
        let doc = sample();
        assert_eq!(doc.node(&"b".into()).map(|n| n.name.as_str()), Some("Busy"));
        assert!(doc.node(&"missing".into()).is_none());
    }

    #[test]
    fn resolved_connections_skip_dangling() {
        let doc = sample();
        let resolved: Vec<_> = doc.resolved_connections().collect();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].1.name, "Idle");
        assert_eq!(resolved[0].2.name, "Busy");

        let dangling: Vec<_> = doc.dangling_connections().collect();
        assert_eq!(dangling.len(), 1);
        assert_eq!(dangling[0].to, NodeId::from("ghost"));
    }

    #[test]
    fn document_serializes_with_wire_field_names() {
        let doc = sample();
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["nodes"][0]["id"], "a");
        assert_eq!(json["nodes"][1]["x"], 10.0);
        assert_eq!(json["connections"][0]["label"], "start");
        // Absent labels are omitted rather than written as null
        assert!(json["connections"][1].get("label").is_none());
    }

    #[test]
    fn missing_label_deserializes_as_none() {
        let conn: Transition = serde_json::from_str(r#"{"from":"a","to":"b"}"#).unwrap();
        assert_eq!(conn.label, None);
    }

    #[test]
    fn generated_ids_are_uuids() {
        let id = NodeId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn empty_document_is_empty() {
        assert!(EMPTY_DOCUMENT.is_empty());
        assert!(!sample().is_empty());
        assert_eq!(Document::default(), EMPTY_DOCUMENT);
    }

    #[test]
    fn touches_checks_both_endpoints() {
        let conn = Transition::new("a", "b");
        assert!(conn.touches(&"a".into()));
        assert!(conn.touches(&"b".into()));
        assert!(!conn.touches(&"c".into()));
    }
}
