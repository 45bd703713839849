//! Seeded noisy sensor.
//!
//! Mimics what a frame-based recognizer actually reports: a played card is
//! visible for a while (the linger), and in every frame during that time it
//! shows up one to three times with slightly different positions and
//! confidences. Independent low-confidence clutter is sprinkled on top.
//! Output is fully determined by the seed and the poll times.

use std::time::Duration;

use super::CardSensor;
use crate::cards::CardId;
use crate::core::{NoiseRng, Timestamp};
use crate::detection::{Candidate, Position};
use crate::error::Result;

/// Confidence range of genuine matches.
const CONFIDENCE: (f32, f32) = (0.6, 0.95);

/// One scripted play: `card` appears at `position` starting at `at`.
#[derive(Clone, Debug, PartialEq)]
pub struct SyntheticPlay {
    pub at: Timestamp,
    pub card: CardId,
    pub position: Position,
}

/// Produces duplicate-heavy frames for a list of scripted plays.
#[derive(Clone, Debug)]
pub struct SyntheticSensor {
    plays: Vec<SyntheticPlay>,
    linger: Duration,
    jitter: f32,
    clutter_probability: f64,
    decoys: Vec<CardId>,
    rng: NoiseRng,
    clutter_rng: NoiseRng,
}

impl SyntheticSensor {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let rng = NoiseRng::new(seed);
        Self {
            plays: Vec::new(),
            linger: Duration::from_millis(800),
            jitter: 6.0,
            clutter_probability: 0.0,
            decoys: Vec::new(),
            clutter_rng: rng.for_context("clutter"),
            rng: rng.for_context("jitter"),
        }
    }

    /// Schedule a play.
    #[must_use]
    pub fn with_play(mut self, at: Timestamp, card: impl Into<CardId>, position: Position) -> Self {
        self.plays.push(SyntheticPlay {
            at,
            card: card.into(),
            position,
        });
        self.plays.sort_by_key(|play| play.at);
        self
    }

    /// How long a played card keeps showing up.
    #[must_use]
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// Half-width of the positional noise square, in pixels.
    #[must_use]
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter.max(0.0);
        self
    }

    /// Per-frame chance of one sub-threshold false match drawn from `decoys`.
    #[must_use]
    pub fn with_clutter(mut self, probability: f64, decoys: Vec<CardId>) -> Self {
        self.clutter_probability = probability;
        self.decoys = decoys;
        self
    }

    /// Scheduled plays, ordered by time.
    #[must_use]
    pub fn plays(&self) -> &[SyntheticPlay] {
        &self.plays
    }

    /// Time of the last scheduled play plus the linger.
    #[must_use]
    pub fn finished_at(&self) -> Timestamp {
        self.plays
            .last()
            .map_or(Timestamp::ZERO, |play| play.at + self.linger)
    }

    fn visible(&self, now: Timestamp) -> impl Iterator<Item = &SyntheticPlay> {
        let linger = self.linger;
        self.plays
            .iter()
            .filter(move |play| play.at <= now && now.saturating_since(play.at) < linger)
    }
}

impl CardSensor for SyntheticSensor {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn poll(&mut self, now: Timestamp) -> Result<Vec<Candidate>> {
        let visible: Vec<SyntheticPlay> = self.visible(now).cloned().collect();
        let mut frame = Vec::new();

        for play in visible {
            let copies = 1 + self.rng.gen_index(3);
            for _ in 0..copies {
                let (dx, dy) = self.rng.jitter(self.jitter);
                let confidence = self.rng.gen_f32(CONFIDENCE.0, CONFIDENCE.1);
                frame.push(
                    Candidate::new(play.card.clone(), play.position, confidence).translated(dx, dy),
                );
            }
        }

        if !self.decoys.is_empty() && self.clutter_rng.gen_bool(self.clutter_probability) {
            let decoy = self.decoys[self.clutter_rng.gen_index(self.decoys.len())].clone();
            let position = Position::new(
                self.clutter_rng.gen_f32(0.0, 720.0),
                self.clutter_rng.gen_f32(0.0, 1280.0),
            );
            let confidence = self.clutter_rng.gen_f32(0.1, 0.45);
            frame.push(Candidate::new(decoy, position, confidence));
        }

        Ok(frame)
    }
}
