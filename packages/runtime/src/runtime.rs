//! Per-run sandbox lifecycle.
//!
//! A run moves through Created -> Prepared (host API registered) ->
//! Running -> Completed or Failed, and the interpreter is destroyed on
//! every exit path. Nothing of a run survives it except its effect on
//! the shared board.

use std::fmt;
use std::sync::{Arc, Mutex};

use rhai::packages::{Package, StandardPackage};
use rhai::Engine;
use uuid::Uuid;

use blockboard_board::BoardRegistry;

use crate::host_api;

/// Unique identifier for a single script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(Uuid);

impl RunId {
    /// Create a new random RunId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the inner UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sandbox resource limits applied to every run.
///
/// `max_operations` is the instruction budget that bounds runaway
/// scripts: a script that exhausts it fails like any other script
/// error, without affecting the host or other runs.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Instruction budget per run.
    pub max_operations: u64,
    /// Maximum nesting of function calls.
    pub max_call_levels: usize,
    /// Maximum expression nesting depth.
    pub max_expr_depth: usize,
    /// Maximum length of any script-side string.
    pub max_string_size: usize,
    /// Maximum length of any script-side array.
    pub max_array_size: usize,
    /// Maximum size of any script-side object map.
    pub max_map_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            max_operations: 1_000_000,
            max_call_levels: 64,
            max_expr_depth: 64,
            max_string_size: 16_384,
            max_array_size: 10_000,
            max_map_size: 1_000,
        }
    }
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The script ran to its natural end.
    Completed,
    /// The script failed to parse or raised a runtime error. Execution
    /// stopped at the failure point; host calls that had already
    /// completed keep their effects.
    Failed {
        /// Human-readable engine error message.
        message: String,
    },
}

impl RunOutcome {
    /// True if the script ran to its natural end.
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed)
    }
}

/// Report for one finished run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// This run's identifier, as carried on its log events.
    pub id: RunId,

    /// How the run ended.
    pub outcome: RunOutcome,

    /// Lines the script printed, in order. Also emitted on the host log
    /// stream as they happen.
    pub output: Vec<String>,
}

/// Executes script bodies against a shared board.
///
/// Every [`run`](Self::run) call builds a fresh interpreter, registers
/// the host API, executes the supplied text to completion or failure,
/// and drops the interpreter unconditionally. No sandbox instance is
/// ever reused, so nothing leaks between unrelated scripts; only the
/// board registry persists across runs.
pub struct ScriptRuntime {
    registry: BoardRegistry,
    config: RuntimeConfig,
}

impl ScriptRuntime {
    /// Create a runtime with the default resource limits.
    pub fn new(registry: BoardRegistry) -> Self {
        Self::with_config(registry, RuntimeConfig::default())
    }

    /// Create a runtime with explicit resource limits.
    pub fn with_config(registry: BoardRegistry, config: RuntimeConfig) -> Self {
        Self { registry, config }
    }

    /// Execute one script body to completion or failure.
    ///
    /// The calling context blocks for the whole run. Script failures
    /// are data on the report, never `Err`: a failing script cannot
    /// take the host down, and the board keeps every mutation made by
    /// host calls that completed before the failure point.
    pub fn run(&self, script: &str) -> RunReport {
        let id = RunId::new();
        let output = Arc::new(Mutex::new(Vec::new()));

        let engine = self.prepare(id, Arc::clone(&output));
        tracing::debug!(run = %id, "sandbox prepared");

        let outcome = match engine.run(script) {
            Ok(()) => RunOutcome::Completed,
            Err(e) => RunOutcome::Failed {
                message: e.to_string(),
            },
        };

        // Dropping the engine releases all sandbox-local memory on
        // every exit path; board state lives outside the sandbox and is
        // untouched by teardown.
        drop(engine);

        let output = match Arc::try_unwrap(output) {
            Ok(lines) => lines.into_inner().unwrap(),
            Err(shared) => shared.lock().unwrap().clone(),
        };

        match &outcome {
            RunOutcome::Completed => tracing::info!(run = %id, "script completed"),
            RunOutcome::Failed { message } => {
                tracing::warn!(run = %id, error = %message, "script failed")
            }
        }
        tracing::debug!(run = %id, "sandbox destroyed");

        RunReport {
            id,
            outcome,
            output,
        }
    }

    /// Build the sandbox for one run: a raw engine, the standard
    /// language package, resource limits, output hooks, and the host
    /// API module.
    ///
    /// The capability set stops there. The engine is built raw so that
    /// file, process, network, and environment access never exist
    /// inside the sandbox rather than being stripped after the fact.
    fn prepare(&self, id: RunId, output: Arc<Mutex<Vec<String>>>) -> Engine {
        let mut engine = Engine::new_raw();
        engine.register_global_module(StandardPackage::new().as_shared_module());

        engine.set_max_operations(self.config.max_operations);
        engine.set_max_call_levels(self.config.max_call_levels);
        engine.set_max_expr_depths(self.config.max_expr_depth, self.config.max_expr_depth);
        engine.set_max_string_size(self.config.max_string_size);
        engine.set_max_array_size(self.config.max_array_size);
        engine.set_max_map_size(self.config.max_map_size);

        let print_buffer = Arc::clone(&output);
        engine.on_print(move |text| {
            tracing::info!(target: "blockboard::script", run = %id, "{text}");
            print_buffer.lock().unwrap().push(text.to_string());
        });

        let debug_buffer = output;
        engine.on_debug(move |text, _source, _pos| {
            tracing::debug!(target: "blockboard::script", run = %id, "{text}");
            debug_buffer.lock().unwrap().push(text.to_string());
        });

        host_api::register(&mut engine, &self.registry);
        engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_id_display_is_uuid_format() {
        let id = RunId::new();
        assert_eq!(id.to_string().len(), 36);
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RunId::default(), RunId::default());
    }

    #[test]
    fn config_default_bounds_operations() {
        let config = RuntimeConfig::default();
        assert_eq!(config.max_operations, 1_000_000);
    }

    #[test]
    fn completed_run_reports_output() {
        let runtime = ScriptRuntime::new(BoardRegistry::seeded());

        let report = runtime.run(r#"print("hello"); print("board");"#);

        assert!(report.outcome.is_completed());
        assert_eq!(report.output, vec!["hello", "board"]);
    }

    #[test]
    fn syntax_error_fails_the_run() {
        let runtime = ScriptRuntime::new(BoardRegistry::seeded());

        let report = runtime.run("let x = ;");

        assert!(matches!(report.outcome, RunOutcome::Failed { .. }));
    }

    #[test]
    fn runtime_error_message_is_captured() {
        let runtime = ScriptRuntime::new(BoardRegistry::seeded());

        let report = runtime.run("nonexistent_function(1, 2, 3);");

        match report.outcome {
            RunOutcome::Failed { message } => {
                assert!(message.contains("nonexistent_function"), "got: {message}")
            }
            RunOutcome::Completed => panic!("expected failure"),
        }
    }

    #[test]
    fn infinite_loop_exhausts_instruction_budget() {
        let runtime = ScriptRuntime::with_config(
            BoardRegistry::seeded(),
            RuntimeConfig {
                max_operations: 10_000,
                ..RuntimeConfig::default()
            },
        );

        let report = runtime.run("loop { }");

        assert!(matches!(report.outcome, RunOutcome::Failed { .. }));
    }

    #[test]
    fn no_state_leaks_between_runs() {
        let runtime = ScriptRuntime::new(BoardRegistry::seeded());

        let first = runtime.run("let secret = 42;");
        assert!(first.outcome.is_completed());

        // A fresh sandbox must not see the previous run's variables.
        let second = runtime.run("print(secret);");
        assert!(matches!(second.outcome, RunOutcome::Failed { .. }));
    }

    #[test]
    fn sandbox_has_no_file_or_process_access() {
        let runtime = ScriptRuntime::new(BoardRegistry::seeded());

        for script in [
            r#"open_file("/etc/passwd")"#,
            r#"exec("ls")"#,
            r#"eval_file("x.rhai")"#,
        ] {
            let report = runtime.run(script);
            assert!(
                matches!(report.outcome, RunOutcome::Failed { .. }),
                "capability unexpectedly available: {script}"
            );
        }
    }
}
