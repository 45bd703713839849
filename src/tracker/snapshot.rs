//! Read-only views handed to the presentation layer.

use std::time::Duration;

use im::Vector;
use serde::Serialize;

use super::session::MatchPhase;
use crate::cards::CardId;
use crate::cycle::{HandEstimate, PlayRecord};
use crate::elixir::ElixirMode;

/// Everything a display needs, captured at one instant.
///
/// Cheap to produce: the history is a persistent vector shared with the
/// tracker until either side changes.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    pub phase: MatchPhase,
    pub active: bool,
    pub elixir_mode: ElixirMode,

    /// Estimated reserve.
    pub elixir: f64,

    /// Whole units of the estimated reserve.
    pub elixir_whole: u32,

    /// Known cards in discovery order.
    pub known_cards: Vec<CardId>,

    pub hand: HandEstimate,
    pub next_card: Option<CardId>,

    /// Last few plays, oldest first.
    pub last_played: Vec<CardId>,

    pub history: Vector<PlayRecord>,
    pub deck_complete: bool,
    pub deck_progress: usize,
    pub total_plays: u32,

    /// Plays the elixir model could not cover.
    pub drift_events: u32,

    #[serde(serialize_with = "secs")]
    pub match_duration: Duration,
}

/// Result of feeding one detection to the tracker.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DetectOutcome {
    Recorded(PlayReport),
    /// No match is active; nothing was recorded.
    NotActive,
    /// The identity is not in the catalog; nothing was recorded.
    UnknownCard,
}

impl DetectOutcome {
    #[must_use]
    pub fn report(&self) -> Option<&PlayReport> {
        match self {
            DetectOutcome::Recorded(report) => Some(report),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_recorded(&self) -> bool {
        matches!(self, DetectOutcome::Recorded(_))
    }
}

/// What a recorded play did.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayReport {
    pub card: CardId,
    pub name: String,
    pub cost: u32,

    /// The cost is nominal (variable-cost card).
    pub nominal_cost: bool,

    /// Reserve after the play.
    pub elixir: f64,
    pub elixir_whole: u32,

    /// The model did not have enough elixir for this play.
    pub shortfall: bool,

    pub known_cards: usize,
}

fn secs<S: serde::Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(value.as_secs_f64())
}
