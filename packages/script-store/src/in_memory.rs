//! In-memory script store.
//!
//! Process-local rows with no persistence; the default for tests and
//! for hosts that only run inline scripts.

use crate::{ScriptRecord, ScriptStore, StoreError};

/// A script store holding its rows in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    rows: Vec<ScriptRecord>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        self.rows.last().map_or(1, |row| row.id + 1)
    }
}

impl ScriptStore for InMemoryStore {
    fn save(&mut self, name: &str, script: &str) -> Result<u64, StoreError> {
        let id = self.next_id();
        self.rows.push(ScriptRecord {
            id,
            name: name.to_string(),
            script: script.to_string(),
        });
        Ok(id)
    }

    fn fetch(&mut self, name: &str) -> Result<Option<ScriptRecord>, StoreError> {
        Ok(self.rows.iter().find(|row| row.name == name).cloned())
    }

    fn list(&mut self) -> Result<Vec<ScriptRecord>, StoreError> {
        Ok(self.rows.clone())
    }
}
