//! Service facade called by the external transport layer.

use std::sync::Mutex;

use blockboard_board::{Block, BoardRegistry};
use blockboard_runtime::{RunReport, ScriptRuntime};
use blockboard_script_store::{ScriptRecord, ScriptStore};

use crate::{ApiError, RunRequest, SaveRequest};

/// The entry surface an external transport calls into.
///
/// Owns the shared board registry, the script store, and the runtime.
/// The store lock is scoped to individual save/fetch calls and is never
/// held across a script run, so a long run cannot starve save requests.
pub struct BoardService {
    registry: BoardRegistry,
    store: Mutex<Box<dyn ScriptStore>>,
    runtime: ScriptRuntime,
}

impl BoardService {
    /// Create a service over the given board and store, with default
    /// sandbox limits.
    pub fn new(registry: BoardRegistry, store: Box<dyn ScriptStore>) -> Self {
        let runtime = ScriptRuntime::new(registry.clone());
        Self::with_runtime(registry, store, runtime)
    }

    /// Create a service with an explicitly configured runtime.
    pub fn with_runtime(
        registry: BoardRegistry,
        store: Box<dyn ScriptStore>,
        runtime: ScriptRuntime,
    ) -> Self {
        Self {
            registry,
            store: Mutex::new(store),
            runtime,
        }
    }

    /// Persist a named script. Returns the stored row id.
    ///
    /// Empty names and empty scripts are rejected as invalid payloads;
    /// a store failure is surfaced as [`ApiError::Store`] and affects
    /// neither board state nor other runs.
    pub fn save_script(&self, request: &SaveRequest) -> Result<u64, ApiError> {
        if request.name.is_empty() {
            return Err(ApiError::invalid("name must not be empty"));
        }
        if request.script.is_empty() {
            return Err(ApiError::invalid("script must not be empty"));
        }

        let id = self.store.lock().unwrap().save(&request.name, &request.script)?;
        tracing::info!(id, name = %request.name, "script saved");
        Ok(id)
    }

    /// Resolve and execute a script, blocking until the run finishes.
    ///
    /// Inline text takes precedence over a stored name. The report is
    /// returned as data; the transport derives its acknowledgement from
    /// it, and script output is already on the host log stream.
    pub fn run_script(&self, request: &RunRequest) -> Result<RunReport, ApiError> {
        let script = self.resolve(request)?;
        Ok(self.runtime.run(&script))
    }

    /// Enumerate every stored script row.
    pub fn list_scripts(&self) -> Result<Vec<ScriptRecord>, ApiError> {
        Ok(self.store.lock().unwrap().list()?)
    }

    /// Read-only board dump for diagnostics; bypasses script execution
    /// entirely.
    pub fn inspect_board(&self) -> Vec<Block> {
        self.registry.list_all()
    }

    fn resolve(&self, request: &RunRequest) -> Result<String, ApiError> {
        if let Some(script) = &request.script {
            return Ok(script.clone());
        }

        let name = request
            .name
            .as_deref()
            .ok_or_else(|| ApiError::invalid("either script or name is required"))?;

        let record = self.store.lock().unwrap().fetch(name)?;
        match record {
            Some(record) => Ok(record.script),
            None => Err(ApiError::ScriptNotFound {
                name: name.to_string(),
            }),
        }
    }
}
