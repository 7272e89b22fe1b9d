//! Shared registry of board state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::block::{Block, BlockSelector, Position, UpdateOutcome};
use crate::error::BoardError;
use crate::seed;

/// Single source of truth for simulated hardware state.
///
/// The registry is a cheap-to-clone handle; clones share the same
/// underlying board. Every operation is atomic with respect to every
/// other: the internal lock is taken once per operation, for the
/// duration of that lookup or lookup+write only. A script that stalls
/// between host calls therefore never holds the board.
///
/// Blocks keep their insertion order for the process lifetime, so
/// enumeration order is stable across runs.
#[derive(Clone)]
pub struct BoardRegistry {
    blocks: Arc<Mutex<Vec<Block>>>,
}

impl BoardRegistry {
    /// Create a registry from a fixed set of blocks.
    ///
    /// Names and positions must each be unique across the board.
    pub fn new(blocks: Vec<Block>) -> Result<Self, BoardError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut positions: HashSet<Position> = HashSet::new();

        for block in &blocks {
            if !names.insert(&block.name) {
                return Err(BoardError::DuplicateName(block.name.clone()));
            }
            if !positions.insert(block.position) {
                return Err(BoardError::DuplicatePosition(block.position));
            }
        }

        Ok(Self {
            blocks: Arc::new(Mutex::new(blocks)),
        })
    }

    /// Create a registry holding the default seed board.
    pub fn seeded() -> Self {
        Self::new(seed::default_blocks()).expect("seed board has unique names and positions")
    }

    /// Consistent point-in-time copy of every block, in insertion order.
    pub fn list_all(&self) -> Vec<Block> {
        self.blocks.lock().unwrap().clone()
    }

    /// Snapshot of the block at exactly the given coordinates.
    pub fn find_by_position(&self, position: Position) -> Option<Block> {
        let blocks = self.blocks.lock().unwrap();
        blocks.iter().find(|b| b.position == position).cloned()
    }

    /// Snapshot of the block with the given name.
    pub fn find_by_name(&self, name: &str) -> Option<Block> {
        let blocks = self.blocks.lock().unwrap();
        blocks.iter().find(|b| b.name == name).cloned()
    }

    /// Overwrite (or insert) one property on the selected block.
    ///
    /// Any string is accepted for `key` and `value`; content is never
    /// validated here. Returns [`UpdateOutcome::NotFound`] without
    /// touching the board when no block matches the selector.
    pub fn set_property(&self, selector: &BlockSelector, key: &str, value: &str) -> UpdateOutcome {
        let mut blocks = self.blocks.lock().unwrap();
        let block = match selector {
            BlockSelector::Position(position) => {
                blocks.iter_mut().find(|b| b.position == *position)
            }
            BlockSelector::Name(name) => blocks.iter_mut().find(|b| &b.name == name),
        };

        match block {
            Some(block) => {
                block.properties.insert(key.to_string(), value.to_string());
                UpdateOutcome::Updated
            }
            None => UpdateOutcome::NotFound,
        }
    }

    /// Number of blocks on the board.
    pub fn block_count(&self) -> usize {
        self.blocks.lock().unwrap().len()
    }
}
