//! JSON snapshot mirroring for in-memory stores.

use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StorageError;

const SNAPSHOT_VERSION: u32 = 1;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocument<T> {
    version: u32,
    records: Vec<T>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotDocumentRef<'a, T> {
    version: u32,
    records: &'a [T],
}

/// A JSON file holding the full contents of a store.
///
/// The whole collection is rewritten on every save. Writes go to a sibling
/// temp file first and are renamed into place.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads all records. A missing file is an empty store.
    pub fn load<T: DeserializeOwned>(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            debug!("No snapshot at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        let document: SnapshotDocument<T> = serde_json::from_str(&contents)?;
        debug!(
            "Loaded {} records (snapshot version {}) from {}",
            document.records.len(),
            document.version,
            self.path.display()
        );
        Ok(document.records)
    }

    /// Replaces the file contents with the given records.
    pub fn save<T: Serialize>(&self, records: &[T]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let document = SnapshotDocumentRef {
            version: SNAPSHOT_VERSION,
            records,
        };
        let json = serde_json::to_string_pretty(&document)?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
