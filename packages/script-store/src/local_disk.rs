//! Disk-backed script store.
//!
//! Rows live in a single JSON file as an array of `{id, name, script}`
//! objects. There is no schema versioning; a missing file is an empty
//! store.

use std::io;
use std::path::PathBuf;
use std::{fs, path};

use crate::{ScriptRecord, ScriptStore, StoreError};

/// A script store persisted to one JSON file on local disk.
///
/// Every operation reads the file fresh and `save` rewrites it whole,
/// so concurrent processes see each other's rows at file granularity.
#[derive(Debug)]
pub struct LocalDiskStore {
    path: PathBuf,
}

impl LocalDiskStore {
    /// Open a store backed by the given file.
    ///
    /// The file does not need to exist yet, but its parent directory
    /// must, and an existing file must hold a valid script table.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(StoreError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("store directory does not exist: {}", parent.display()),
                )));
            }
        }

        let store = Self { path };
        // Fail fast on a corrupt table instead of on the first save.
        store.load()?;
        Ok(store)
    }

    /// The backing file path.
    pub fn path(&self) -> &path::Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<ScriptRecord>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(StoreError::Malformed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }

    fn persist(&self, rows: &[ScriptRecord]) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(rows).map_err(StoreError::Encode)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

impl ScriptStore for LocalDiskStore {
    fn save(&mut self, name: &str, script: &str) -> Result<u64, StoreError> {
        let mut rows = self.load()?;
        let id = rows.last().map_or(1, |row| row.id + 1);
        rows.push(ScriptRecord {
            id,
            name: name.to_string(),
            script: script.to_string(),
        });
        self.persist(&rows)?;
        tracing::debug!(id, name, path = %self.path.display(), "script row appended");
        Ok(id)
    }

    fn fetch(&mut self, name: &str) -> Result<Option<ScriptRecord>, StoreError> {
        Ok(self.load()?.into_iter().find(|row| row.name == name))
    }

    fn list(&mut self) -> Result<Vec<ScriptRecord>, StoreError> {
        self.load()
    }
}
