//! Builder for the editor shell.

use super::EditorShell;
use crate::config::EditorConfig;
use crate::core::{EditorStore, StoreObserver};
use crate::persistence::SnapshotStorage;
use thiserror::Error;

/// Errors that can occur when building an editor shell.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),
}

/// Fluent construction of an [`EditorShell`].
///
/// Storage is optional; without it the shell neither restores nor persists.
pub struct EditorBuilder {
    config: EditorConfig,
    storage: Option<Box<dyn SnapshotStorage>>,
    store: EditorStore,
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            storage: None,
            store: EditorStore::new(),
        }
    }

    pub fn config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    /// Storage to restore from on mount and mirror to afterwards.
    pub fn storage(mut self, storage: impl SnapshotStorage + 'static) -> Self {
        self.storage = Some(Box::new(storage));
        self
    }

    /// Register a view observer on the store.
    pub fn observer(mut self, observer: impl StoreObserver + 'static) -> Self {
        self.store.subscribe(observer);
        self
    }

    /// Build the shell. Returns an error if the config is unusable.
    pub fn build(self) -> Result<EditorShell, BuildError> {
        let problems = self.config.problems();
        if !problems.is_empty() {
            return Err(BuildError::InvalidConfig(problems.join("; ")));
        }

        Ok(EditorShell::from_parts(self.store, self.config, self.storage))
    }
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
