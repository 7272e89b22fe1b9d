//! Block types for the simulated board.
//!
//! A Block is one addressable hardware element. Its kind, name, and
//! position are fixed at creation; only the property map changes over
//! the life of the process.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The closed set of simulated hardware element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Slider,
    Button,
    Knob,
    Led,
    Eink,
    Buzzer,
}

impl BlockKind {
    /// The lowercase wire name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Slider => "slider",
            BlockKind::Button => "button",
            BlockKind::Knob => "knob",
            BlockKind::Led => "led",
            BlockKind::Eink => "eink",
            BlockKind::Buzzer => "buzzer",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An integer grid coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    /// Create a position from its coordinates.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One addressable simulated hardware element.
///
/// Property values are arbitrary strings; the board layer performs no
/// coercion or validation of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// What kind of element this is.
    pub kind: BlockKind,

    /// Unique human-readable identifier, immutable after creation.
    pub name: String,

    /// Grid coordinate, unique among all blocks on the board.
    pub position: Position,

    /// Open-ended property map, mutated freely by scripts.
    pub properties: BTreeMap<String, String>,
}

impl Block {
    /// Create a block with an empty property map.
    pub fn new(kind: BlockKind, name: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            name: name.into(),
            position,
            properties: BTreeMap::new(),
        }
    }

    /// Builder-style property initialization, used for seeding.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Look up a single property value.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Lookup key for mutating a single block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockSelector {
    /// Exact match on coordinates.
    Position(Position),
    /// Exact match on the block name.
    Name(String),
}

/// Result of a property mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The selected block exists and the property was written.
    Updated,
    /// No block matched the selector; nothing changed.
    NotFound,
}

impl UpdateOutcome {
    /// True if the mutation landed.
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated)
    }
}
