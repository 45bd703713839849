//! Detection value types.
//!
//! A `Candidate` is one raw match reported by the upstream sensor for the
//! current frame. A `DetectionEvent` is a candidate that survived
//! deduplication and is ready for the match tracker.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Timestamp;

/// Pixel position in frame coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One raw sensor match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub card: CardId,
    pub position: Position,
    pub confidence: f32,
}

impl Candidate {
    #[must_use]
    pub fn new(card: impl Into<CardId>, position: Position, confidence: f32) -> Self {
        Self {
            card: card.into(),
            position,
            confidence,
        }
    }

    /// Map a region-relative position into frame coordinates.
    #[must_use]
    pub fn translated(mut self, dx: f32, dy: f32) -> Self {
        self.position.x += dx;
        self.position.y += dy;
        self
    }

    /// Structural sanity: finite position, confidence in `[0, 1]`.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.position.is_finite()
            && self.confidence.is_finite()
            && (0.0..=1.0).contains(&self.confidence)
            && !self.card.as_str().is_empty()
    }
}

/// A deduplicated "card played" observation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DetectionEvent {
    pub card: CardId,
    pub position: Position,
    pub confidence: f32,
    pub detected_at: Timestamp,
}

impl DetectionEvent {
    pub(crate) fn from_candidate(candidate: Candidate, detected_at: Timestamp) -> Self {
        Self {
            card: candidate.card,
            position: candidate.position,
            confidence: candidate.confidence,
            detected_at,
        }
    }
}
