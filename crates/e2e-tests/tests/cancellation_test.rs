//! Cancellation E2E tests.
//!
//! Covers single-key cancellation precedence between the foreground slot
//! and the recurring registry, and the either-side-suffices contract of
//! cancel-all.

use pretty_assertions::assert_eq;

use bgjob_scheduler::mock::{EngineCall, ForegroundCall};
use bgjob_scheduler::DispatchStatus;
use e2e_tests::{foreground_spec, recurring_spec, TestHarness};

// ===== Single-key cancellation =====

/// Cancelling the foreground key demotes the slot and leaves the registry
/// alone.
#[test]
fn test_cancel_foreground_key_stops_service_only() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));

    assert!(harness.scheduler.cancel("tracker"));

    assert!(harness.engine.calls().is_empty());
    assert_eq!(
        harness.foreground.calls().last(),
        Some(&ForegroundCall::Stop)
    );
    assert!(!harness.scheduler.foreground().is_occupied());
}

/// Cancelling any other key goes to the registry and leaves the foreground
/// occupant running.
#[test]
fn test_cancel_other_key_goes_to_registry() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.scheduler.schedule(recurring_spec("sync"));

    assert!(harness.scheduler.cancel("sync"));

    assert_eq!(
        harness.engine.calls().last(),
        Some(&EngineCall::Cancel("sync".to_string()))
    );
    assert!(harness.scheduler.foreground().is_occupied_by_key("tracker"));
}

/// A replaced foreground job leaves no trace: it is no longer in the slot
/// and was never in the registry, so cancelling it falls through to the
/// engine and fails there.
#[test]
fn test_cancel_replaced_foreground_key_falls_through_and_fails() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("first"));
    harness.scheduler.schedule(foreground_spec("second"));
    harness.engine.script(DispatchStatus::BadRequest);

    assert!(!harness.scheduler.cancel("first"));

    assert_eq!(
        harness.engine.calls(),
        vec![EngineCall::Cancel("first".to_string())]
    );
    assert!(harness.scheduler.foreground().is_occupied_by_key("second"));
    assert_eq!(
        harness.foreground.calls(),
        vec![
            ForegroundCall::Schedule(foreground_spec("first")),
            ForegroundCall::Schedule(foreground_spec("second")),
        ]
    );
}

/// With an empty slot every cancellation goes straight to the registry,
/// including keys the engine has never seen. The engine's answer decides
/// the result.
#[test]
fn test_cancel_unknown_key_is_engines_call() {
    let harness = TestHarness::new();

    assert!(harness.scheduler.cancel("never-scheduled"));

    harness.engine.script(DispatchStatus::BadRequest);
    assert!(!harness.scheduler.cancel("never-scheduled"));
}

/// A failed foreground stop resolves the cancellation as `false` at the
/// slot; it does not fall through and cancel a same-named registry entry.
#[test]
fn test_failed_foreground_stop_does_not_fall_through() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.foreground.script_stop(false);

    assert!(!harness.scheduler.cancel("tracker"));

    assert!(harness.engine.calls().is_empty());
}

// ===== Cancel-all =====

/// Cancel-all clears the slot, stops the service, and wipes the engine.
#[test]
fn test_cancel_all_clears_everything() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.scheduler.schedule(recurring_spec("sync"));
    harness.scheduler.schedule(recurring_spec("upload"));

    assert!(harness.scheduler.cancel_all());

    assert!(!harness.scheduler.foreground().is_occupied());
    assert_eq!(
        harness.foreground.calls().last(),
        Some(&ForegroundCall::Stop)
    );
    assert_eq!(harness.engine.calls().last(), Some(&EngineCall::CancelAll));
}

/// An empty slot counts as a cleared foreground and the service is not
/// asked to stop.
#[test]
fn test_cancel_all_skips_stop_when_slot_empty() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(recurring_spec("sync"));

    assert!(harness.scheduler.cancel_all());

    assert!(harness.foreground.calls().is_empty());
    assert_eq!(harness.engine.calls().last(), Some(&EngineCall::CancelAll));
}

/// Emptiness alone clears the foreground side, so an engine decline with
/// nothing in the slot still reports success.
#[test]
fn test_cancel_all_true_when_slot_empty_and_engine_declines() {
    let harness = TestHarness::new();
    harness.engine.script(DispatchStatus::Unavailable);

    assert!(harness.scheduler.cancel_all());

    assert!(harness.foreground.calls().is_empty());
    assert_eq!(harness.engine.calls(), vec![EngineCall::CancelAll]);
}

/// One side clearing is enough: a wiped engine carries a failed foreground
/// stop.
#[test]
fn test_cancel_all_true_when_only_background_clears() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.foreground.script_stop(false);

    assert!(harness.scheduler.cancel_all());
}

/// One side clearing is enough: a demoted foreground carries an engine
/// decline.
#[test]
fn test_cancel_all_true_when_only_foreground_clears() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.engine.script(DispatchStatus::Unavailable);

    assert!(harness.scheduler.cancel_all());
}

/// Only both sides failing makes cancel-all report `false`; even then the
/// slot has already been emptied.
#[test]
fn test_cancel_all_false_only_when_both_sides_fail() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));
    harness.foreground.script_stop(false);
    harness.engine.script(DispatchStatus::Unavailable);

    assert!(!harness.scheduler.cancel_all());
    assert!(!harness.scheduler.foreground().is_occupied());
}

/// Cancel-all always reaches the engine, even when the foreground side
/// already settled the result.
#[test]
fn test_cancel_all_always_reaches_engine() {
    let harness = TestHarness::new();
    harness.scheduler.schedule(foreground_spec("tracker"));

    assert!(harness.scheduler.cancel_all());

    assert_eq!(harness.engine.calls(), vec![EngineCall::CancelAll]);
}
