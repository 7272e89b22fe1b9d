//! Typed boundary surface for blockboard.
//!
//! An external transport layer (HTTP, CLI, anything that can produce a
//! payload) talks to the system exclusively through [`BoardService`]:
//! save a named script, execute a script inline or by stored name, or
//! dump board state for diagnostics. Payload validation happens here,
//! so malformed requests are rejected before any store or sandbox work.

mod error;
mod service;
mod types;

pub use error::ApiError;
pub use service::BoardService;
pub use types::{RunRequest, SaveRequest};

// Re-export run reporting types for transports that only depend on this
// crate.
pub use blockboard_runtime::{RunOutcome, RunReport};
