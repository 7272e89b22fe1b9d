//! Host functions exposed into the script sandbox.
//!
//! This module is the only surface through which sandboxed script code
//! may observe or mutate the board. Every function returns a value for
//! expected conditions — a missing block is a status string or unit,
//! never a script-level error — so user scripts are not crashed by
//! absent blocks. Malformed argument types are left to the engine's own
//! type checking.

use rhai::{Array, Dynamic, Engine, ImmutableString, Map, Module, INT};

use blockboard_board::{Block, BlockSelector, BoardRegistry, Position, UpdateOutcome};

/// Fixed module name the host API is registered under.
pub const MODULE_NAME: &str = "board";

/// Status returned to the script when a property write lands.
pub const PROPERTY_UPDATED: &str = "Property updated";

/// Status returned to the script when no block matches the selector.
pub const BLOCK_NOT_FOUND: &str = "Block not found";

/// Build the host API module bound to the given registry.
///
/// Each function holds its own registry handle; the module owns no
/// board state, and the per-operation lock discipline stays inside the
/// registry.
pub fn board_module(registry: &BoardRegistry) -> Module {
    let mut module = Module::new();

    let reg = registry.clone();
    module.set_native_fn(
        "update_block",
        move |x: INT, y: INT, key: &str, value: &str| {
            let selector = BlockSelector::Position(Position::new(x, y));
            Ok(status(reg.set_property(&selector, key, value)))
        },
    );

    let reg = registry.clone();
    module.set_native_fn(
        "update_block_by_name",
        move |name: &str, key: &str, value: &str| {
            let selector = BlockSelector::Name(name.to_string());
            Ok(status(reg.set_property(&selector, key, value)))
        },
    );

    let reg = registry.clone();
    module.set_native_fn("get_blocks", move || {
        let blocks: Array = reg
            .list_all()
            .iter()
            .map(|block| Dynamic::from(block_to_map(block)))
            .collect();
        Ok(blocks)
    });

    let reg = registry.clone();
    module.set_native_fn("get_block_by_name", move |name: &str| {
        Ok(match reg.find_by_name(name) {
            Some(block) => Dynamic::from(block_to_map(&block)),
            None => Dynamic::UNIT,
        })
    });

    module
}

/// Register the host API into an engine under [`MODULE_NAME`].
pub(crate) fn register(engine: &mut Engine, registry: &BoardRegistry) {
    engine.register_static_module(MODULE_NAME, board_module(registry).into());
}

fn status(outcome: UpdateOutcome) -> ImmutableString {
    match outcome {
        UpdateOutcome::Updated => PROPERTY_UPDATED.into(),
        UpdateOutcome::NotFound => BLOCK_NOT_FOUND.into(),
    }
}

/// Expose one block as a script-side record: kind, name, x, y, and the
/// full property map.
fn block_to_map(block: &Block) -> Map {
    let mut properties = Map::new();
    for (key, value) in &block.properties {
        properties.insert(key.as_str().into(), value.clone().into());
    }

    let mut map = Map::new();
    map.insert("kind".into(), block.kind.as_str().into());
    map.insert("name".into(), block.name.clone().into());
    map.insert("x".into(), Dynamic::from(block.position.x));
    map.insert("y".into(), Dynamic::from(block.position.y));
    map.insert("properties".into(), Dynamic::from(properties));
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with_board(registry: &BoardRegistry) -> Engine {
        let mut engine = Engine::new();
        register(&mut engine, registry);
        engine
    }

    #[test]
    fn update_block_reports_status_strings() {
        let registry = BoardRegistry::seeded();
        let engine = engine_with_board(&registry);

        let hit = engine
            .eval::<String>(r#"board::update_block(0, 0, "value", "42")"#)
            .unwrap();
        assert_eq!(hit, PROPERTY_UPDATED);

        let miss = engine
            .eval::<String>(r#"board::update_block(99, 99, "value", "42")"#)
            .unwrap();
        assert_eq!(miss, BLOCK_NOT_FOUND);
    }

    #[test]
    fn update_block_by_name_reports_status_strings() {
        let registry = BoardRegistry::seeded();
        let engine = engine_with_board(&registry);

        let hit = engine
            .eval::<String>(r#"board::update_block_by_name("led1", "state", "on")"#)
            .unwrap();
        assert_eq!(hit, PROPERTY_UPDATED);
        assert_eq!(
            registry.find_by_name("led1").unwrap().property("state"),
            Some("on")
        );

        let miss = engine
            .eval::<String>(r#"board::update_block_by_name("doesNotExist", "x", "y")"#)
            .unwrap();
        assert_eq!(miss, BLOCK_NOT_FOUND);
    }

    #[test]
    fn get_blocks_exposes_full_records_in_order() {
        let registry = BoardRegistry::seeded();
        let engine = engine_with_board(&registry);

        let names = engine
            .eval::<Array>(r#"board::get_blocks().map(|b| b.name)"#)
            .unwrap();
        let names: Vec<String> = names.into_iter().map(|n| n.cast::<String>()).collect();
        let expected: Vec<String> = registry.list_all().into_iter().map(|b| b.name).collect();
        assert_eq!(names, expected);

        let kind = engine
            .eval::<String>(r#"board::get_blocks()[0].kind"#)
            .unwrap();
        assert_eq!(kind, "slider");

        let x = engine.eval::<INT>(r#"board::get_blocks()[1].x"#).unwrap();
        assert_eq!(x, 1);
    }

    #[test]
    fn get_block_by_name_returns_unit_when_absent() {
        let registry = BoardRegistry::seeded();
        let engine = engine_with_board(&registry);

        let absent = engine
            .eval::<bool>(r#"board::get_block_by_name("ghost") == ()"#)
            .unwrap();
        assert!(absent);

        let value = engine
            .eval::<String>(r#"board::get_block_by_name("slider1").properties.value"#)
            .unwrap();
        assert_eq!(value, "0");
    }

    #[test]
    fn property_map_reflects_prior_update() {
        let registry = BoardRegistry::seeded();
        let engine = engine_with_board(&registry);

        let value = engine
            .eval::<String>(
                r#"
                board::update_block(0, 0, "value", "42");
                board::get_block_by_name("slider1").properties.value
                "#,
            )
            .unwrap();
        assert_eq!(value, "42");
    }
}
