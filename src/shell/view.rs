//! Geometry handed to renderers for drawing transitions.

use crate::config::EditorConfig;
use crate::core::{Document, NodeId};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A drawable transition: a line between two node anchors and, when the
/// transition is labeled, where its label goes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeView {
    pub from: NodeId,
    pub to: NodeId,
    pub start: Point,
    pub end: Point,
    pub label: Option<String>,
    pub label_at: Point,
}

/// Edges for every transition whose endpoints both exist, in document order.
/// Dangling transitions are left out.
pub fn edges(document: &Document, config: &EditorConfig) -> Vec<EdgeView> {
    document
        .resolved_connections()
        .map(|(conn, from, to)| {
            let start = Point {
                x: from.x + config.anchor_dx,
                y: from.y + config.anchor_dy,
            };
            let end = Point {
                x: to.x + config.anchor_dx,
                y: to.y + config.anchor_dy,
            };
            EdgeView {
                from: conn.from.clone(),
                to: conn.to.clone(),
                start,
                end,
                label: conn.label.clone().filter(|l| !l.is_empty()),
                label_at: Point {
                    x: (start.x + end.x) / 2.0,
                    y: (start.y + end.y) / 2.0 - config.label_lift,
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{StateNode, Transition};

    #[test]
    fn edge_attaches_at_anchor_offset() {
        let doc = Document::new(
            vec![
                StateNode::new("a", "A", 0.0, 0.0),
                StateNode::new("b", "B", 100.0, 40.0),
            ],
            vec![Transition::new("a", "b").with_label("go")],
        );

        let edges = edges(&doc, &EditorConfig::default());

        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].start, Point { x: 60.0, y: 30.0 });
        assert_eq!(edges[0].end, Point { x: 160.0, y: 70.0 });
        assert_eq!(edges[0].label_at, Point { x: 110.0, y: 40.0 });
        assert_eq!(edges[0].label.as_deref(), Some("go"));
    }

    #[test]
    fn dangling_transitions_are_not_drawn() {
        let doc = Document::new(
            vec![StateNode::new("a", "A", 0.0, 0.0)],
            vec![Transition::new("a", "gone"), Transition::new("a", "a")],
        );

        let edges = edges(&doc, &EditorConfig::default());
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].to, NodeId::from("a"));
        assert_eq!(edges[0].label, None);
    }
}
