//! Elixir model integration tests.
//!
//! Regeneration, clamping, spending and mode changes, driven through the
//! public API with explicit timestamps.

use std::sync::Arc;
use std::time::Duration;

use proptest::prelude::*;
use royale_scout::{
    CardRegistry, ChargeOutcome, ElixirConfig, ElixirMode, ElixirSimulator, SpendOutcome,
    Timestamp,
};

fn simulator() -> ElixirSimulator {
    ElixirSimulator::new(ElixirConfig::default(), Arc::new(CardRegistry::builtin()))
}

fn at(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

// =============================================================================
// Regeneration
// =============================================================================

/// One unit per 2.8 seconds in normal mode.
#[test]
fn test_normal_rate() {
    let mut elixir = simulator();
    elixir.start(at(0));
    assert_eq!(elixir.whole(at(0)), 5);
    assert_eq!(elixir.whole(at(2799)), 5);
    assert_eq!(elixir.whole(at(2800)), 6);
    assert_eq!(elixir.whole(at(5600)), 7);
}

/// Regeneration stops at the cap and does not bank the overflow.
#[test]
fn test_clamped_at_max() {
    let mut elixir = simulator();
    elixir.start(at(0));
    assert_eq!(elixir.advance(at(60_000)), 10.0);

    elixir.spend(4, at(60_000));
    assert_eq!(elixir.whole(at(60_000)), 6);
}

/// A timestamp before the last update credits nothing and does not rewind.
#[test]
fn test_backward_time_accrues_nothing() {
    let mut elixir = simulator();
    elixir.start(at(10_000));
    elixir.advance(at(12_800));
    let reserve = elixir.reserve();

    assert_eq!(elixir.advance(at(11_000)), reserve);
    assert_eq!(elixir.last_update(), at(12_800));
}

/// A stopped simulator is frozen.
#[test]
fn test_stopped_does_not_regenerate() {
    let mut elixir = simulator();
    assert!(!elixir.is_running());
    assert_eq!(elixir.advance(at(30_000)), 5.0);

    elixir.start(at(0));
    elixir.advance(at(2800));
    elixir.stop();
    assert!((elixir.peek(at(100_000)) - 6.0).abs() < 1e-9);
}

// =============================================================================
// Spending
// =============================================================================

/// Exact spends succeed even with accumulated float noise.
#[test]
fn test_spend_tolerates_float_noise() {
    let mut elixir = simulator();
    elixir.start(at(0));
    elixir.spend(3, at(0)); // 2 left

    // 2 + 2.8 / 2.8 should be exactly 3.
    assert_eq!(elixir.spend(3, at(2800)), SpendOutcome::Spent);
    assert!(elixir.reserve() < 1e-6);
}

/// Overspending clamps to zero and counts a drift event.
#[test]
fn test_overspend_clamps() {
    let mut elixir = simulator();
    elixir.start(at(0));

    match elixir.spend(8, at(0)) {
        SpendOutcome::Insufficient { shortfall } => assert!((shortfall - 3.0).abs() < 1e-9),
        other => panic!("expected shortfall, got {other:?}"),
    }
    assert_eq!(elixir.reserve(), 0.0);
    assert_eq!(elixir.drift_events(), 1);
}

/// Card plays charge the catalog cost; unknown cards change nothing.
#[test]
fn test_card_played_by_identity() {
    let mut elixir = simulator();
    elixir.start(at(0));

    assert_eq!(elixir.card_played("knight", at(0)).cost(), Some(3));
    assert_eq!(elixir.card_played("not_a_card", at(0)), ChargeOutcome::UnknownCard);
    assert!((elixir.reserve() - 2.0).abs() < 1e-9);
}

// =============================================================================
// Modes
// =============================================================================

/// Double and triple use 1.4 and 0.9 seconds per unit.
#[test]
fn test_faster_modes() {
    let mut elixir = simulator();
    elixir.start(at(0));
    elixir.spend(5, at(0));

    elixir.set_mode(ElixirMode::Double);
    assert_eq!(elixir.whole(at(2800)), 2);

    elixir.advance(at(2800));
    elixir.set_mode(ElixirMode::Triple);
    assert_eq!(elixir.whole(at(2800 + 2700)), 5);
}

/// Reset restores the starting reserve, normal mode and the stopped state.
#[test]
fn test_reset() {
    let mut elixir = simulator();
    elixir.start(at(0));
    elixir.set_mode(ElixirMode::Triple);
    elixir.spend(9, at(0));
    elixir.reset(at(1000));

    assert_eq!(elixir.reserve(), 5.0);
    assert_eq!(elixir.mode(), ElixirMode::Normal);
    assert_eq!(elixir.drift_events(), 0);
    assert!(!elixir.is_running());
}

/// Custom rates from configuration are honoured.
#[test]
fn test_custom_config() {
    let config = ElixirConfig::default()
        .with_starting(0.0)
        .with_max(4.0)
        .with_rates(1.0, 0.5, 0.25);
    let mut elixir = ElixirSimulator::new(config, Arc::new(CardRegistry::builtin()));
    elixir.start(at(0));

    assert_eq!(elixir.whole(at(2000)), 2);
    assert_eq!(elixir.whole(at(20_000)), 4);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    /// The reserve always stays within [0, max], whatever is spent when.
    #[test]
    fn prop_reserve_stays_in_range(
        steps in prop::collection::vec((0u64..5000, 0u32..12), 1..40),
    ) {
        let mut elixir = simulator();
        elixir.start(at(0));
        let mut now = 0;
        for (delta, cost) in steps {
            now += delta;
            elixir.spend(cost, at(now));
            prop_assert!(elixir.reserve() >= 0.0);
            prop_assert!(elixir.reserve() <= 10.0);
        }
    }

    /// From empty, the reserve grows linearly with elapsed time until capped.
    #[test]
    fn prop_linear_regeneration(millis in 0u64..40_000) {
        let mut elixir = simulator();
        elixir.start(at(0));
        elixir.spend(5, at(0));

        let expected = (millis as f64 / 2800.0).min(10.0);
        prop_assert!((elixir.peek(at(millis)) - expected).abs() < 1e-9);
    }

    /// Advancing in many small steps matches one big step.
    #[test]
    fn prop_advance_is_path_independent(cuts in prop::collection::vec(0u64..30_000, 0..10)) {
        let mut stepped = simulator();
        let mut direct = simulator();
        stepped.start(at(0));
        direct.start(at(0));
        stepped.spend(5, at(0));
        direct.spend(5, at(0));

        let mut cuts = cuts;
        cuts.sort_unstable();
        for cut in cuts {
            stepped.advance(at(cut));
        }
        let end = Duration::from_secs(30);
        let end = Timestamp::new(end);
        prop_assert!((stepped.advance(end) - direct.advance(end)).abs() < 1e-9);
    }
}
