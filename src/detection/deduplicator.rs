//! Frame-level deduplication pipeline.
//!
//! ```text
//! raw candidates ─► validate + threshold ─► per-card NMS ─► cooldown ─► events
//!                                                              │
//!                                                  accepted events update
//!                                                     the cooldown map
//! ```

use serde::Serialize;

use super::candidate::{Candidate, DetectionEvent};
use super::cooldown::CooldownMap;
use super::nms;
use crate::core::{DetectionConfig, Timestamp};

/// Counters for tuning the sensor threshold and cooldown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DedupStats {
    /// Frames processed.
    pub frames: u64,

    /// Raw candidates received.
    pub candidates: u64,

    /// Dropped for non-finite position or out-of-range confidence.
    pub malformed: u64,

    /// Dropped for confidence under the threshold.
    pub below_threshold: u64,

    /// Dropped by same-frame suppression.
    pub suppressed: u64,

    /// Dropped by the cross-frame cooldown.
    pub cooling: u64,

    /// Events emitted.
    pub emitted: u64,
}

impl DedupStats {
    /// Fraction of raw candidates that became events.
    #[must_use]
    pub fn acceptance_rate(&self) -> f64 {
        if self.candidates == 0 {
            0.0
        } else {
            self.emitted as f64 / self.candidates as f64
        }
    }
}

/// Turns noisy per-frame matches into at most one event per played card.
#[derive(Clone, Debug)]
pub struct Deduplicator {
    config: DetectionConfig,
    cooldowns: CooldownMap,
    stats: DedupStats,
}

impl Deduplicator {
    #[must_use]
    pub fn new(config: DetectionConfig) -> Self {
        let cooldowns = CooldownMap::new(config.cooldown_cell, config.cooldown);
        Self {
            config,
            cooldowns,
            stats: DedupStats::default(),
        }
    }

    /// Process one frame using the configured confidence threshold.
    pub fn process(&mut self, candidates: Vec<Candidate>, now: Timestamp) -> Vec<DetectionEvent> {
        self.process_with_threshold(candidates, self.config.min_confidence, now)
    }

    /// Process one frame with an explicit confidence threshold.
    pub fn process_with_threshold(
        &mut self,
        candidates: Vec<Candidate>,
        min_confidence: f32,
        now: Timestamp,
    ) -> Vec<DetectionEvent> {
        self.stats.frames += 1;
        self.stats.candidates += candidates.len() as u64;
        self.cooldowns.prune(now);

        let mut eligible = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if !candidate.is_well_formed() {
                self.stats.malformed += 1;
                tracing::debug!(card = %candidate.card, "Dropping malformed candidate");
            } else if candidate.confidence < min_confidence {
                self.stats.below_threshold += 1;
            } else {
                eligible.push(candidate);
            }
        }

        let before = eligible.len();
        let survivors = nms::suppress(eligible, self.config.suppression_radius);
        self.stats.suppressed += (before - survivors.len()) as u64;

        let mut events = Vec::with_capacity(survivors.len());
        for candidate in survivors {
            if self.cooldowns.is_cooling(&candidate.card, candidate.position, now) {
                self.stats.cooling += 1;
                continue;
            }
            self.cooldowns.accept(&candidate.card, candidate.position, now);
            tracing::debug!(
                card = %candidate.card,
                confidence = candidate.confidence,
                x = candidate.position.x,
                y = candidate.position.y,
                "Accepted detection"
            );
            events.push(DetectionEvent::from_candidate(candidate, now));
        }

        self.stats.emitted += events.len() as u64;
        events
    }

    /// Drop cooldown entries whose window has elapsed at `now`.
    ///
    /// `process` already does this per frame; call it directly to bound the
    /// map while no frames arrive.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        self.cooldowns.prune(now)
    }

    /// Forget every cooldown, e.g. on match reset.
    pub fn clear(&mut self) {
        self.cooldowns.clear();
    }

    /// Cooldown entries currently held.
    #[must_use]
    pub fn cooldown_entries(&self) -> usize {
        self.cooldowns.len()
    }

    #[must_use]
    pub fn stats(&self) -> &DedupStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = DedupStats::default();
    }

    #[must_use]
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }
}
