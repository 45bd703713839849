//! Match tracker: lifecycle plus fan-out to the elixir and cycle models.
//!
//! Every mutating call goes through `&mut self`, so whoever owns the tracker
//! (a single worker, or a lock) serializes them. `card_detected` updates the
//! elixir model and the cycle model inside one call; a reader holding
//! `&self` can never see one without the other.

use std::sync::Arc;

use super::session::{MatchPhase, MatchSession};
use super::snapshot::{DetectOutcome, PlayReport, TrackerSnapshot};
use crate::cards::CardRegistry;
use crate::core::{Clock, Timestamp, TrackerConfig};
use crate::cycle::CycleTracker;
use crate::elixir::{whole_units, ChargeOutcome, ElixirMode, ElixirSimulator, SpendOutcome};
use crate::error::Result;

/// Orchestrates one opponent's elixir and card-cycle estimate.
pub struct MatchTracker {
    catalog: Arc<CardRegistry>,
    clock: Arc<dyn Clock>,
    elixir: ElixirSimulator,
    cycle: CycleTracker,
    session: MatchSession,
}

impl std::fmt::Debug for MatchTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchTracker")
            .field("session", &self.session)
            .field("elixir", &self.elixir.reserve())
            .field("known", &self.cycle.known_cards())
            .finish_non_exhaustive()
    }
}

impl MatchTracker {
    /// Build a tracker in the idle phase.
    ///
    /// Fails with `InvalidConfig` if `config` does not validate.
    pub fn new(config: &TrackerConfig, catalog: Arc<CardRegistry>, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            elixir: ElixirSimulator::new(config.elixir.clone(), Arc::clone(&catalog)),
            cycle: CycleTracker::new(config.cycle.clone(), Arc::clone(&catalog)),
            catalog,
            clock,
            session: MatchSession::default(),
        })
    }

    /// Begin a new match. Valid from any phase.
    ///
    /// Restarts the elixir model, forgets the previous rotation and zeroes
    /// the play counter.
    pub fn start_match(&mut self) {
        let now = self.clock.now();
        self.elixir.start(now);
        self.cycle.reset();
        self.session.start(now);
        tracing::info!(at = %now, "Match started");
    }

    /// End the active match.
    ///
    /// Known cards and rotation are kept for inspection until `reset`.
    /// Returns `false` if no match was active.
    pub fn end_match(&mut self) -> bool {
        let now = self.clock.now();
        if !self.session.end(now) {
            return false;
        }
        self.elixir.advance(now);
        self.elixir.stop();
        tracing::info!(
            plays = self.session.plays,
            known = self.cycle.progress(),
            duration_secs = self.session.duration(now).as_secs_f64(),
            "Match ended"
        );
        true
    }

    /// Back to `Idle`, clearing both models.
    pub fn reset(&mut self) {
        let now = self.clock.now();
        self.elixir.reset(now);
        self.cycle.reset();
        self.session = MatchSession::default();
        tracing::info!("Tracker reset");
    }

    /// Switch the elixir regeneration mode.
    ///
    /// Time since the last update is credited at the old rate first.
    pub fn set_elixir_mode(&mut self, mode: ElixirMode) {
        let now = self.clock.now();
        self.elixir.advance(now);
        if self.elixir.mode() != mode {
            tracing::info!(from = %self.elixir.mode(), to = %mode, "Elixir mode changed");
        }
        self.elixir.set_mode(mode);
    }

    /// Feed one confirmed "card played" observation.
    pub fn card_detected(&mut self, card: &str) -> DetectOutcome {
        if !self.session.is_active() {
            tracing::debug!(card, "Ignoring detection outside an active match");
            return DetectOutcome::NotActive;
        }
        let Some(definition) = self.catalog.get(card) else {
            tracing::warn!(card, "Ignoring detection of unknown card");
            return DetectOutcome::UnknownCard;
        };

        let now = self.clock.now();
        // Catalog membership was checked above, so neither model can refuse.
        let charge = self.elixir.card_played(card, now);
        self.cycle.record_play(card, now);
        self.session.plays += 1;

        let shortfall = matches!(
            charge,
            ChargeOutcome::Charged {
                spend: SpendOutcome::Insufficient { .. },
                ..
            }
        );
        let elixir = self.elixir.reserve();
        let report = PlayReport {
            card: definition.id.clone(),
            name: definition.name.clone(),
            cost: definition.cost,
            nominal_cost: definition.variable_cost,
            elixir,
            elixir_whole: whole_units(elixir),
            shortfall,
            known_cards: self.cycle.known_cards().len(),
        };

        if shortfall {
            tracing::warn!(
                card = %report.card,
                cost = report.cost,
                "Opponent played a card the elixir model could not afford; estimate reset to 0"
            );
        } else {
            tracing::debug!(card = %report.card, cost = report.cost, elixir, "Card recorded");
        }
        DetectOutcome::Recorded(report)
    }

    /// Manually entered play; same semantics as a detection.
    pub fn manual_card(&mut self, card: &str) -> DetectOutcome {
        tracing::info!(card, "Manual card entry");
        self.card_detected(card)
    }

    /// Advance the elixir time base to now. Returns the reserve.
    pub fn tick(&mut self) -> f64 {
        let now = self.clock.now();
        if self.session.is_active() {
            self.elixir.advance(now)
        } else {
            self.elixir.reserve()
        }
    }

    /// Consistent view of everything tracked, as of now.
    ///
    /// Read-only: the elixir value is projected, not stored.
    #[must_use]
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.snapshot_at(self.clock.now())
    }

    /// Snapshot projected to `now`.
    #[must_use]
    pub fn snapshot_at(&self, now: Timestamp) -> TrackerSnapshot {
        let elixir = self.elixir.peek(now);
        let recent_window = self.cycle.config().recent_window;
        TrackerSnapshot {
            phase: self.session.phase,
            active: self.session.is_active(),
            elixir_mode: self.elixir.mode(),
            elixir,
            elixir_whole: whole_units(elixir),
            known_cards: self.cycle.known_cards().to_vec(),
            hand: self.cycle.estimate_hand(),
            next_card: self.cycle.predict_next().cloned(),
            last_played: self.cycle.last_played(recent_window),
            history: self.cycle.history().records(),
            deck_complete: self.cycle.is_complete(),
            deck_progress: self.cycle.progress(),
            total_plays: self.session.plays,
            drift_events: self.elixir.drift_events(),
            match_duration: self.session.duration(now),
        }
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.session.phase
    }

    #[must_use]
    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    #[must_use]
    pub fn elixir(&self) -> &ElixirSimulator {
        &self.elixir
    }

    #[must_use]
    pub fn cycle(&self) -> &CycleTracker {
        &self.cycle
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<CardRegistry> {
        &self.catalog
    }

    #[must_use]
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
