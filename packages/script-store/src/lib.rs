//! Durable script persistence: name/script rows saved for later replay.
//!
//! The store is a boundary collaborator of the scripted board core: save
//! and run entry points consult it, the script runtime itself never does.
//! Records are append-only from the core's point of view — nothing here
//! mutates or deletes a saved script.

use serde::{Deserialize, Serialize};

mod error;
pub mod in_memory;
pub mod local_disk;

pub use error::StoreError;
pub use in_memory::InMemoryStore;
pub use local_disk::LocalDiskStore;

/// One saved script row.
///
/// Names are not required to be unique; the `id` is the only
/// distinguishing column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptRecord {
    /// Monotonically assigned row identifier.
    pub id: u64,

    /// Caller-chosen script name.
    pub name: String,

    /// Raw script source text, stored byte-for-byte.
    pub script: String,
}

/// Durable name -> script persistence.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn ScriptStore>`.
pub trait ScriptStore: Send {
    /// Persist a new script row and return its id.
    ///
    /// The script text is stored exactly as given; duplicate names are
    /// permitted and create a second row.
    fn save(&mut self, name: &str, script: &str) -> Result<u64, StoreError>;

    /// Fetch the oldest row with the given name.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` - No row has this name.
    /// * `Ok(Some(record))` - The first-saved matching row.
    /// * `Err(StoreError)` - The store itself failed.
    fn fetch(&mut self, name: &str) -> Result<Option<ScriptRecord>, StoreError>;

    /// Enumerate every saved row in insertion order.
    fn list(&mut self) -> Result<Vec<ScriptRecord>, StoreError>;
}

impl<T: ScriptStore + ?Sized> ScriptStore for Box<T> {
    fn save(&mut self, name: &str, script: &str) -> Result<u64, StoreError> {
        self.as_mut().save(name, script)
    }

    fn fetch(&mut self, name: &str) -> Result<Option<ScriptRecord>, StoreError> {
        self.as_mut().fetch(name)
    }

    fn list(&mut self) -> Result<Vec<ScriptRecord>, StoreError> {
        self.as_mut().list()
    }
}
