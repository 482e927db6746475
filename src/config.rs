//! Editor configuration.

use serde::{Deserialize, Serialize};

/// Tunables for the editor shell. Every field has a default, so partial JSON
/// is accepted.
///
/// ```rust
/// use stateboard::EditorConfig;
///
/// let config = EditorConfig::from_json(r#"{ "storage_key": "scratch" }"#).unwrap();
/// assert_eq!(config.storage_key, "scratch");
/// assert_eq!(config.share_param, "data");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Storage key the document is mirrored under
    pub storage_key: String,
    /// Query parameter carrying the link token
    pub share_param: String,
    /// New nodes are named `<prefix><count + 1>`
    pub node_name_prefix: String,
    pub spawn_x: f64,
    pub spawn_y: f64,
    /// Offset from a node's position to where edges attach
    pub anchor_dx: f64,
    pub anchor_dy: f64,
    /// Distance a transition label sits above its edge midpoint
    pub label_lift: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            storage_key: "state-machine".to_string(),
            share_param: "data".to_string(),
            node_name_prefix: "State ".to_string(),
            spawn_x: 100.0,
            spawn_y: 100.0,
            anchor_dx: 60.0,
            anchor_dy: 30.0,
            label_lift: 10.0,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Problems that make the config unusable, empty when it is fine.
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.storage_key.is_empty() {
            problems.push("storage_key must not be empty".to_string());
        }
        if self.share_param.is_empty() {
            problems.push("share_param must not be empty".to_string());
        }
        let numbers = [
            ("spawn_x", self.spawn_x),
            ("spawn_y", self.spawn_y),
            ("anchor_dx", self.anchor_dx),
            ("anchor_dy", self.anchor_dy),
            ("label_lift", self.label_lift),
        ];
        for (name, value) in numbers {
            if !value.is_finite() {
                problems.push(format!("{name} must be finite"));
            }
        }
        problems
    }
}
