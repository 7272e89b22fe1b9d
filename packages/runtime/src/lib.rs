//! Sandboxed script execution for the simulated board.
//!
//! Each run gets a fresh interpreter instance with a deliberately small
//! capability set: the scripting language's standard package plus the
//! host API module, nothing else. Scripts observe and mutate the board
//! exclusively through that module; file, process, network, and
//! environment access simply do not exist inside the sandbox.
//!
//! Runs are independent. The only state shared between them is the
//! [`BoardRegistry`](blockboard_board::BoardRegistry) the runtime was
//! built with; the interpreter is dropped on every exit path.

pub mod host_api;
mod runtime;

pub use host_api::{board_module, BLOCK_NOT_FOUND, MODULE_NAME, PROPERTY_UPDATED};
pub use runtime::{RunId, RunOutcome, RunReport, RuntimeConfig, ScriptRuntime};
