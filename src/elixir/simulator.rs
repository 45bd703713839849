//! Continuous-time elixir model.
//!
//! The reserve regenerates linearly and is decremented by discrete plays.
//! Regeneration is lazy: nothing ticks in the background, every read or
//! spend first advances the reserve by `elapsed / seconds_per_unit`. Polling
//! every 16 ms or every 5 s therefore gives the same estimate.
//!
//! ```
//! use std::sync::Arc;
//! use royale_scout::cards::CardRegistry;
//! use royale_scout::core::{ElixirConfig, Timestamp};
//! use royale_scout::elixir::ElixirSimulator;
//!
//! let mut sim = ElixirSimulator::new(ElixirConfig::default(), Arc::new(CardRegistry::builtin()));
//! sim.start(Timestamp::ZERO);
//! sim.card_played("knight", Timestamp::ZERO);
//! assert_eq!(sim.whole(Timestamp::ZERO), 2);
//! assert_eq!(sim.whole(Timestamp::from_millis(2800)), 3);
//! ```

use std::sync::Arc;

use serde::Serialize;

use super::mode::ElixirMode;
use crate::cards::CardRegistry;
use crate::core::{ElixirConfig, Timestamp};

/// Slack for comparisons against whole units, absorbs float noise such as
/// `2.9999999999999996`.
const EPSILON: f64 = 1e-9;

/// Result of a spend.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SpendOutcome {
    /// The modeled reserve covered the cost.
    Spent,
    /// The modeled reserve was short by `shortfall`; it was clamped to zero.
    ///
    /// Not an error: the opponent evidently had more than modeled.
    Insufficient { shortfall: f64 },
}

impl SpendOutcome {
    #[must_use]
    pub fn is_spent(&self) -> bool {
        matches!(self, SpendOutcome::Spent)
    }
}

/// Result of charging a card by identity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ChargeOutcome {
    Charged { cost: u32, spend: SpendOutcome },
    /// The identity is not in the catalog; nothing was changed.
    UnknownCard,
}

impl ChargeOutcome {
    /// Cost charged, if the card was known.
    #[must_use]
    pub fn cost(&self) -> Option<u32> {
        match self {
            ChargeOutcome::Charged { cost, .. } => Some(*cost),
            ChargeOutcome::UnknownCard => None,
        }
    }
}

/// Best-estimate elixir reserve of one player.
///
/// Invariant: `reserve` is the reserve at `last_update` and always lies in
/// `[0, max]`.
#[derive(Clone, Debug)]
pub struct ElixirSimulator {
    config: ElixirConfig,
    catalog: Arc<CardRegistry>,
    reserve: f64,
    mode: ElixirMode,
    last_update: Timestamp,
    running: bool,
    drift_events: u32,
}

impl ElixirSimulator {
    /// Create a stopped simulator holding the starting reserve.
    #[must_use]
    pub fn new(config: ElixirConfig, catalog: Arc<CardRegistry>) -> Self {
        let reserve = config.starting.max(0.0).min(config.max.max(0.0));
        Self {
            config,
            catalog,
            reserve,
            mode: ElixirMode::Normal,
            last_update: Timestamp::ZERO,
            running: false,
            drift_events: 0,
        }
    }

    /// Reset to the starting reserve and begin regenerating from `now`.
    pub fn start(&mut self, now: Timestamp) {
        self.reserve = self.starting();
        self.last_update = now;
        self.running = true;
        self.drift_events = 0;
    }

    /// Stop regenerating. The reserve stays at whatever `advance` last computed.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Back to the initial state: starting reserve, normal mode, stopped.
    pub fn reset(&mut self, now: Timestamp) {
        self.reserve = self.starting();
        self.last_update = now;
        self.mode = ElixirMode::Normal;
        self.running = false;
        self.drift_events = 0;
    }

    /// Switch regeneration speed.
    ///
    /// Takes effect from the next `advance`; the reserve already accrued is
    /// not rescaled. Advance to "now" first if the interval since the last
    /// update should be credited at the old rate.
    pub fn set_mode(&mut self, mode: ElixirMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn mode(&self) -> ElixirMode {
        self.mode
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Reserve as of the last update, without advancing.
    #[must_use]
    pub fn reserve(&self) -> f64 {
        self.reserve
    }

    #[must_use]
    pub fn last_update(&self) -> Timestamp {
        self.last_update
    }

    /// Number of spends the model could not cover since the last start.
    #[must_use]
    pub fn drift_events(&self) -> u32 {
        self.drift_events
    }

    #[must_use]
    pub fn config(&self) -> &ElixirConfig {
        &self.config
    }

    /// Bring the reserve up to `now` and return it.
    ///
    /// A `now` earlier than the last update accrues nothing.
    pub fn advance(&mut self, now: Timestamp) -> f64 {
        if !self.running {
            return self.reserve;
        }
        self.reserve = self.project(now);
        if now > self.last_update {
            self.last_update = now;
        }
        self.reserve
    }

    /// Reserve at `now`, computed without mutating anything.
    #[must_use]
    pub fn peek(&self, now: Timestamp) -> f64 {
        if self.running {
            self.project(now)
        } else {
            self.reserve
        }
    }

    /// Whole units available at `now` (floor).
    #[must_use]
    pub fn whole(&self, now: Timestamp) -> u32 {
        whole_units(self.peek(now))
    }

    /// Spend `amount` at `now`.
    ///
    /// If the model is short, the reserve is clamped to zero and
    /// `Insufficient` is returned.
    pub fn spend(&mut self, amount: u32, now: Timestamp) -> SpendOutcome {
        self.advance(now);
        let amount = f64::from(amount);
        if self.reserve + EPSILON >= amount {
            self.reserve = (self.reserve - amount).max(0.0);
            SpendOutcome::Spent
        } else {
            let shortfall = amount - self.reserve;
            self.reserve = 0.0;
            self.drift_events += 1;
            SpendOutcome::Insufficient { shortfall }
        }
    }

    /// Charge a card's cost by identity.
    ///
    /// Unknown identities leave the state untouched.
    pub fn card_played(&mut self, card: &str, now: Timestamp) -> ChargeOutcome {
        let Some(cost) = self.catalog.cost(card) else {
            return ChargeOutcome::UnknownCard;
        };
        let spend = self.spend(cost, now);
        if let SpendOutcome::Insufficient { shortfall } = spend {
            tracing::debug!(card, cost, shortfall, "Elixir estimate drifted below a play");
        }
        ChargeOutcome::Charged { cost, spend }
    }

    /// Upper bound of the reserve. A negative or NaN `max` acts as zero.
    fn cap(&self) -> f64 {
        self.config.max.max(0.0)
    }

    fn starting(&self) -> f64 {
        self.config.starting.max(0.0).min(self.cap())
    }

    fn project(&self, now: Timestamp) -> f64 {
        let elapsed = now.saturating_since(self.last_update).as_secs_f64();
        let per_unit = self.mode.seconds_per_unit(&self.config);
        let gained = if per_unit > 0.0 { elapsed / per_unit } else { 0.0 };
        (self.reserve + gained).max(0.0).min(self.cap())
    }
}

/// Floor with float-noise tolerance.
pub(crate) fn whole_units(reserve: f64) -> u32 {
    // Reserve is clamped to [0, max] so the cast cannot overflow.
    (reserve + EPSILON).floor().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;

    fn catalog() -> Arc<CardRegistry> {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::new("knight", "Knight", 3)).unwrap();
        registry.register(CardDefinition::new("golem", "Golem", 8)).unwrap();
        Arc::new(registry)
    }

    fn at(secs: f64) -> Timestamp {
        Timestamp::from_secs_f64(secs)
    }

    fn started() -> ElixirSimulator {
        let mut sim = ElixirSimulator::new(ElixirConfig::default(), catalog());
        sim.start(Timestamp::ZERO);
        sim
    }

    #[test]
    fn test_start_sets_starting_reserve() {
        let sim = started();
        assert_eq!(sim.reserve(), 5.0);
        assert!(sim.is_running());
        assert_eq!(sim.mode(), ElixirMode::Normal);
    }

    #[test]
    fn test_advance_is_linear() {
        let mut sim = started();
        let reserve = sim.advance(at(1.4));
        assert!((reserve - 5.5).abs() < 1e-9);
    }

    #[test]
    fn test_advance_caps_at_max() {
        let mut sim = started();
        assert_eq!(sim.advance(at(10_000.0)), 10.0);
    }

    #[test]
    fn test_backwards_time_accrues_nothing() {
        let mut sim = started();
        sim.advance(at(2.8));
        let before = sim.reserve();
        assert_eq!(sim.advance(at(1.0)), before);
        assert_eq!(sim.last_update(), at(2.8));
    }

    #[test]
    fn test_stopped_does_not_regenerate() {
        let mut sim = started();
        sim.advance(at(1.4));
        sim.stop();
        let frozen = sim.reserve();
        assert_eq!(sim.advance(at(100.0)), frozen);
        assert_eq!(sim.peek(at(100.0)), frozen);
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let sim = started();
        assert!((sim.peek(at(2.8)) - 6.0).abs() < 1e-9);
        assert_eq!(sim.reserve(), 5.0);
        assert_eq!(sim.last_update(), Timestamp::ZERO);
    }

    #[test]
    fn test_spend_success() {
        let mut sim = started();
        assert_eq!(sim.spend(3, Timestamp::ZERO), SpendOutcome::Spent);
        assert_eq!(sim.reserve(), 2.0);
    }

    #[test]
    fn test_spend_insufficient_clamps() {
        let mut sim = started();
        let outcome = sim.spend(8, Timestamp::ZERO);
        assert_eq!(outcome, SpendOutcome::Insufficient { shortfall: 3.0 });
        assert_eq!(sim.reserve(), 0.0);
        assert_eq!(sim.drift_events(), 1);

        // Second immediate spend also fails and stays at zero.
        assert!(!sim.spend(1, Timestamp::ZERO).is_spent());
        assert_eq!(sim.reserve(), 0.0);
        assert_eq!(sim.drift_events(), 2);
    }

    #[test]
    fn test_spend_tolerates_float_noise() {
        let mut sim = started();
        sim.spend(3, Timestamp::ZERO);
        // 2 + 2.8 / 2.8 may land a hair under 3.0.
        assert_eq!(sim.spend(3, at(2.8)), SpendOutcome::Spent);
        assert!(sim.reserve() < 1e-6);
    }

    #[test]
    fn test_mode_switch_not_retroactive() {
        let mut sim = started();
        sim.advance(at(2.8));
        sim.set_mode(ElixirMode::Double);
        // Reserve already accrued stays as-is.
        assert!((sim.reserve() - 6.0).abs() < 1e-9);
        // 1.4s at double = one more unit.
        assert!((sim.advance(at(4.2)) - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_card_played() {
        let mut sim = started();
        let outcome = sim.card_played("knight", Timestamp::ZERO);
        assert_eq!(outcome.cost(), Some(3));
        assert_eq!(sim.reserve(), 2.0);
    }

    #[test]
    fn test_unknown_card_is_noop() {
        let mut sim = started();
        let outcome = sim.card_played("dragon_of_doom", at(5.0));
        assert_eq!(outcome, ChargeOutcome::UnknownCard);
        assert_eq!(sim.reserve(), 5.0);
        assert_eq!(sim.last_update(), Timestamp::ZERO);
    }

    #[test]
    fn test_reset() {
        let mut sim = started();
        sim.set_mode(ElixirMode::Triple);
        sim.spend(4, at(1.0));
        sim.reset(at(2.0));

        assert_eq!(sim.reserve(), 5.0);
        assert_eq!(sim.mode(), ElixirMode::Normal);
        assert!(!sim.is_running());
        assert_eq!(sim.drift_events(), 0);
    }

    #[test]
    fn test_out_of_range_config_does_not_panic() {
        let config = ElixirConfig::default().with_max(-1.0).with_rates(0.0, 0.0, 0.0);
        let mut sim = ElixirSimulator::new(config, catalog());
        assert_eq!(sim.reserve(), 0.0);

        sim.start(Timestamp::ZERO);
        assert_eq!(sim.advance(at(10.0)), 0.0);
        assert_eq!(sim.card_played("knight", at(10.0)).cost(), Some(3));
        assert_eq!(sim.reserve(), 0.0);

        let config = ElixirConfig::default().with_max(f64::NAN);
        let sim = ElixirSimulator::new(config, catalog());
        assert_eq!(sim.peek(at(1.0)), 0.0);
    }

    #[test]
    fn test_whole_units() {
        assert_eq!(whole_units(2.9999999999999996), 3);
        assert_eq!(whole_units(2.5), 2);
        assert_eq!(whole_units(0.0), 0);
        assert_eq!(whole_units(10.0), 10);
    }
}
