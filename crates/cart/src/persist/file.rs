//! JSON file snapshot backend.
//!
//! The snapshot is a JSON array of line items at a configurable path.
//! Writes are atomic via a temp-rename pattern to prevent corruption from
//! crashes mid-write: readers never see a partially-written file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::item::LineItem;

use super::{SnapshotError, SnapshotStore};

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to the given snapshot path.
    ///
    /// The file and its parent directories do not need to exist yet; they
    /// are created on the first `save`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn try_load(&self) -> Result<Vec<LineItem>, SnapshotError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn try_save(&self, items: &[LineItem]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let contents = serde_json::to_string_pretty(items)?;
        fs::write(&tmp, contents)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> Vec<LineItem> {
        // A missing file is "no prior state", not a problem worth logging.
        if !self.path.exists() {
            return Vec::new();
        }

        match self.try_load() {
            Ok(items) => items,
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "discarding unreadable cart snapshot"
                );
                Vec::new()
            }
        }
    }

    fn save(&self, items: &[LineItem]) {
        if let Err(error) = self.try_save(items) {
            warn!(
                path = %self.path.display(),
                %error,
                "failed to persist cart snapshot"
            );
        }
    }
}
