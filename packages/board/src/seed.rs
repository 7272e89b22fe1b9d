//! Fixed seed configuration for the default board.

use crate::block::{Block, BlockKind, Position};

/// The default board layout: a row of input elements above a row of
/// output elements.
///
/// Kinds and names here are the complete fixed set; the scripted API
/// cannot add or remove blocks.
pub fn default_blocks() -> Vec<Block> {
    vec![
        Block::new(BlockKind::Slider, "slider1", Position::new(0, 0)).with_property("value", "0"),
        Block::new(BlockKind::Button, "button1", Position::new(1, 0))
            .with_property("pressed", "false"),
        Block::new(BlockKind::Knob, "knob1", Position::new(2, 0)).with_property("value", "0"),
        Block::new(BlockKind::Led, "led1", Position::new(0, 1)).with_property("state", "off"),
        Block::new(BlockKind::Eink, "eink1", Position::new(1, 1)).with_property("text", ""),
        Block::new(BlockKind::Buzzer, "buzzer1", Position::new(2, 1))
            .with_property("active", "false"),
    ]
}
