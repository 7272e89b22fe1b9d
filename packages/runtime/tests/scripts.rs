//! End-to-end script runs against a seeded board.

use std::sync::Arc;

use blockboard_board::BoardRegistry;
use blockboard_runtime::{RunOutcome, ScriptRuntime, BLOCK_NOT_FOUND};

#[test]
fn script_updates_slider_and_sees_it_in_get_blocks() {
    let registry = BoardRegistry::seeded();
    let runtime = ScriptRuntime::new(registry.clone());
    let seed = registry.list_all();

    let report = runtime.run(
        r#"
        board::update_block(0, 0, "value", "42");
        for b in board::get_blocks() {
            if b.name == "slider1" {
                print(b.properties.value);
            }
        }
        "#,
    );

    assert!(report.outcome.is_completed());
    assert_eq!(report.output, vec!["42"]);

    for block in registry.list_all() {
        let seeded = seed.iter().find(|b| b.name == block.name).unwrap();
        if block.name == "slider1" {
            assert_eq!(block.property("value"), Some("42"));
        } else {
            assert_eq!(&block, seeded, "{} drifted from its seed state", block.name);
        }
    }
}

#[test]
fn missing_block_returns_not_found_and_changes_nothing() {
    let registry = BoardRegistry::seeded();
    let runtime = ScriptRuntime::new(registry.clone());
    let before = registry.list_all();

    let report = runtime.run(r#"print(board::update_block_by_name("doesNotExist", "x", "y"));"#);

    assert!(report.outcome.is_completed());
    assert_eq!(report.output, vec![BLOCK_NOT_FOUND]);
    assert_eq!(registry.list_all(), before);
}

#[test]
fn failing_script_keeps_mutations_from_completed_host_calls() {
    let registry = BoardRegistry::seeded();
    let runtime = ScriptRuntime::new(registry.clone());

    let report = runtime.run(
        r#"
        board::update_block_by_name("led1", "state", "on");
        this_function_does_not_exist();
        board::update_block_by_name("buzzer1", "active", "true");
        "#,
    );

    assert!(matches!(report.outcome, RunOutcome::Failed { .. }));

    // The call before the failure point landed; the one after never ran.
    assert_eq!(
        registry.find_by_name("led1").unwrap().property("state"),
        Some("on")
    );
    assert_eq!(
        registry.find_by_name("buzzer1").unwrap().property("active"),
        Some("false")
    );
}

#[test]
fn concurrent_runs_share_one_board() {
    let registry = BoardRegistry::seeded();
    let runtime = Arc::new(ScriptRuntime::new(registry.clone()));

    let scripts = [
        r#"board::update_block_by_name("slider1", "value", "10");"#,
        r#"board::update_block_by_name("knob1", "value", "20");"#,
        r#"board::update_block_by_name("led1", "state", "on");"#,
    ];

    let handles: Vec<_> = scripts
        .into_iter()
        .map(|script| {
            let runtime = Arc::clone(&runtime);
            std::thread::spawn(move || runtime.run(script))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap().outcome.is_completed());
    }

    assert_eq!(
        registry.find_by_name("slider1").unwrap().property("value"),
        Some("10")
    );
    assert_eq!(
        registry.find_by_name("knob1").unwrap().property("value"),
        Some("20")
    );
    assert_eq!(
        registry.find_by_name("led1").unwrap().property("state"),
        Some("on")
    );
}

#[test]
fn last_write_wins_on_the_same_property() {
    let registry = BoardRegistry::seeded();
    let runtime = ScriptRuntime::new(registry.clone());

    runtime.run(r#"board::update_block(2, 0, "value", "first");"#);
    runtime.run(r#"board::update_block(2, 0, "value", "second");"#);

    assert_eq!(
        registry.find_by_name("knob1").unwrap().property("value"),
        Some("second")
    );
}
