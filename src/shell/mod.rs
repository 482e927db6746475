//! Application shell around the store.
//!
//! The shell owns the [`EditorStore`] and translates user gestures (add,
//! click, drag, clear, share, export) into store calls. It restores the
//! document once when mounted and, from then on, mirrors every document
//! change to storage.
//!
//! # Example
//!
//! ```rust
//! use stateboard::persistence::{load_document, MemoryStorage};
//! use stateboard::EditorBuilder;
//!
//! let storage = MemoryStorage::new();
//! let mut shell = EditorBuilder::new().storage(storage.clone()).build().unwrap();
//! shell.mount(None);
//!
//! let a = shell.add_state();
//! let b = shell.add_state();
//! shell.click_node(&a);
//! shell.click_node(&b);
//!
//! assert_eq!(shell.document().connections.len(), 1);
//! let saved = load_document(&storage, "state-machine").unwrap().unwrap();
//! assert_eq!(&saved, shell.document());
//! ```

pub mod builder;
pub mod view;

pub use builder::{BuildError, EditorBuilder};
pub use view::{edges, EdgeView, Point};

use crate::codec::{self, DecodeError, EncodeError};
use crate::config::EditorConfig;
use crate::core::{Document, EditorStore, NodeId, StateNode};
use crate::export;
use crate::persistence::{self, Persister, SnapshotStorage};

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&mut self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, message: &str) -> bool {
        self(message)
    }
}

const CLEAR_PROMPT: &str = "Are you sure you want to clear all states and connections?";

/// The top-level editor: store, config and storage wiring.
pub struct EditorShell {
    store: EditorStore,
    config: EditorConfig,
    storage: Option<Box<dyn SnapshotStorage>>,
    mounted: bool,
    exported: Option<String>,
}

impl EditorShell {
    pub(crate) fn from_parts(
        store: EditorStore,
        config: EditorConfig,
        storage: Option<Box<dyn SnapshotStorage>>,
    ) -> Self {
        Self {
            store,
            config,
            storage,
            mounted: false,
            exported: None,
        }
    }

    pub fn store(&self) -> &EditorStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut EditorStore {
        &mut self.store
    }

    pub fn document(&self) -> &Document {
        self.store.document()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Restore the initial document and start persisting.
    ///
    /// A link token, when given, takes precedence and storage is not read
    /// even if the token turns out to be invalid. Without a token the stored
    /// snapshot is restored. Either source is applied with one `set_state`
    /// only when it decodes; failures are logged and the document is left as
    /// it was. Calling `mount` again does nothing.
    pub fn mount(&mut self, link_token: Option<&str>) {
        if self.mounted {
            return;
        }

        match link_token {
            Some(token) => match codec::decode_token(token) {
                Ok(document) => self.store.set_state(document),
                Err(err) => tracing::warn!(error = %err, "ignoring invalid share link"),
            },
            None => {
                if let Some(storage) = self.storage.as_deref() {
                    match persistence::load_document(storage, &self.config.storage_key) {
                        Ok(Some(document)) => self.store.set_state(document),
                        Ok(None) => {}
                        Err(err) => {
                            tracing::warn!(error = %err, "ignoring unreadable stored document")
                        }
                    }
                }
            }
        }

        if let Some(storage) = self.storage.take() {
            let mut persister = Persister::new(storage, self.config.storage_key.clone());
            persister.persist(self.store.document());
            self.store.subscribe(persister);
        }
        self.mounted = true;
    }

    /// Add a node named `<prefix><count + 1>` at the spawn point.
    pub fn add_state(&mut self) -> NodeId {
        let id = NodeId::generate();
        let name = format!(
            "{}{}",
            self.config.node_name_prefix,
            self.store.nodes().len() + 1
        );
        self.store.add_node(StateNode::new(
            id.clone(),
            name,
            self.config.spawn_x,
            self.config.spawn_y,
        ));
        id
    }

    /// Click on a node: with another node selected, connect it to this one
    /// and clear the selection; otherwise select this node.
    pub fn click_node(&mut self, id: &NodeId) {
        match self.store.selected_node().cloned() {
            Some(selected) if selected != *id => {
                self.store.connect_nodes(&selected, id);
                self.store.select_node(None);
            }
            _ => self.store.select_node(Some(id.clone())),
        }
    }

    /// End of a drag: move the node by the drag offset. Unknown ids are
    /// ignored.
    pub fn drag_node(&mut self, id: &NodeId, dx: f64, dy: f64) {
        let Some((x, y)) = self.store.document().node(id).map(|n| (n.x, n.y)) else {
            tracing::debug!(node_id = %id, "drag ended on unknown node");
            return;
        };
        self.store.move_node(id, x + dx, y + dy);
    }

    pub fn undo(&mut self) {
        self.store.undo();
    }

    pub fn redo(&mut self) {
        self.store.redo();
    }

    pub fn can_undo(&self) -> bool {
        self.store.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.store.can_redo()
    }

    /// Export the document as state-machine JSON and keep it for display.
    pub fn export_json(&mut self) -> Result<&str, serde_json::Error> {
        let json = export::export_json(self.store.document())?;
        Ok(self.exported.insert(json).as_str())
    }

    /// The last export, cleared by [`clear`](Self::clear).
    pub fn exported(&self) -> Option<&str> {
        self.exported.as_deref()
    }

    /// Path that reopens the editor on the current document.
    pub fn share_path(&self) -> Result<String, EncodeError> {
        codec::share_path(self.store.document(), &self.config.share_param)
    }

    /// Replace the document with an empty one after confirmation. Returns
    /// whether the document was cleared.
    pub fn clear(&mut self, confirm: &mut impl Confirm) -> bool {
        if !confirm.confirm(CLEAR_PROMPT) {
            return false;
        }
        self.store.set_state(Document::default());
        self.exported = None;
        true
    }

    /// Edge geometry for the current document.
    pub fn edges(&self) -> Vec<EdgeView> {
        view::edges(self.store.document(), &self.config)
    }

    /// Decode a link token for read-only display.
    pub fn preview(token: &str) -> Result<Document, DecodeError> {
        codec::decode_token(token)
    }
}
