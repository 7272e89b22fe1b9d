//! Simulated hardware board: block data model and shared registry.
//!
//! The board is a fixed collection of addressable elements (sliders,
//! buttons, knobs, LEDs, an e-ink display, a buzzer). Each element is a
//! [`Block`] with an immutable identity and a freely mutable bag of
//! string properties. [`BoardRegistry`] owns the collection and is the
//! single source of truth for board state, safe to share across
//! concurrent script runs.
//!
//! Board state is process-scoped: it is created once from the seed
//! configuration and never persisted, so it resets on restart.

mod block;
mod error;
mod registry;
pub mod seed;

pub use block::{Block, BlockKind, BlockSelector, Position, UpdateOutcome};
pub use error::BoardError;
pub use registry::BoardRegistry;
