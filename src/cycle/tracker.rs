//! Card rotation reconstruction.
//!
//! A deck is 8 distinct cards cycled in a fixed order: the 4 at the front
//! are in hand, playing one sends it to the back. Watching plays is enough
//! to rebuild that order once every card has been seen at least once; before
//! that the tracker only has a partial picture and says so.
//!
//! The rotation buffer is kept in most-recently-played-last order:
//!
//! ```text
//! plays:    knight  zap  hog  log  musk  golem  arrows  valk  knight
//! rotation: [zap hog log musk golem arrows valk knight]
//!            └──── in hand ────┘└ next
//! ```

use std::sync::Arc;

use rustc_hash::FxHashSet;
use serde::Serialize;
use smallvec::SmallVec;

use super::history::{PlayHistory, PlayRecord};
use crate::cards::{CardId, CardRegistry};
use crate::core::{CycleConfig, Timestamp};

/// Inline capacity of the rotation buffers (one deck).
type Rotation = SmallVec<[CardId; 8]>;

/// What a recorded play did to the rotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    /// First sighting of this card; appended to the rotation.
    Discovered,
    /// Already known; moved from index `from` to the back.
    Cycled { from: usize },
    /// Not in the catalog; nothing changed.
    UnknownCard,
}

/// Estimated hand.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HandEstimate {
    pub cards: Vec<CardId>,

    /// `true` once the whole deck is known and the hand follows from the
    /// rotation. `false` means the cards come from the partial-deck
    /// heuristic and may be wrong.
    pub exact: bool,
}

/// Discrete-event model of one player's card rotation.
#[derive(Clone, Debug)]
pub struct CycleTracker {
    config: CycleConfig,
    catalog: Arc<CardRegistry>,
    /// Known cards in discovery order.
    known: Rotation,
    known_set: FxHashSet<CardId>,
    rotation: Rotation,
    history: PlayHistory,
}

impl CycleTracker {
    #[must_use]
    pub fn new(config: CycleConfig, catalog: Arc<CardRegistry>) -> Self {
        let history = PlayHistory::new(config.history_capacity);
        Self {
            config,
            catalog,
            known: Rotation::new(),
            known_set: FxHashSet::default(),
            rotation: Rotation::new(),
            history,
        }
    }

    /// Record a play of `card` observed at `at`.
    pub fn record_play(&mut self, card: &str, at: Timestamp) -> RecordOutcome {
        let Some(definition) = self.catalog.get(card) else {
            return RecordOutcome::UnknownCard;
        };
        let id = definition.id.clone();

        if self.known_set.insert(id.clone()) {
            self.known.push(id.clone());
        }

        let outcome = match self.rotation.iter().position(|c| *c == id) {
            Some(from) => {
                let card = self.rotation.remove(from);
                self.rotation.push(card);
                RecordOutcome::Cycled { from }
            }
            None => {
                self.rotation.push(id.clone());
                RecordOutcome::Discovered
            }
        };

        self.history.push(PlayRecord { card: id, at });
        outcome
    }

    /// Which cards are probably in hand right now.
    ///
    /// With the full deck known this is exact: the front of the rotation.
    /// Before that it is a heuristic: known cards that were not among the
    /// last few plays, capped at the hand size.
    #[must_use]
    pub fn estimate_hand(&self) -> HandEstimate {
        let hand_size = self.config.hand_size;
        if self.is_complete() {
            return HandEstimate {
                cards: self.rotation.iter().take(hand_size).cloned().collect(),
                exact: true,
            };
        }

        let recent = self.history.last_cards(self.config.recent_window);
        let cards = self
            .known
            .iter()
            .filter(|card| !recent.contains(*card))
            .take(hand_size)
            .cloned()
            .collect();
        HandEstimate { cards, exact: false }
    }

    /// Next card to rotate into hand: the slot right after the hand.
    #[must_use]
    pub fn predict_next(&self) -> Option<&CardId> {
        if self.rotation.len() > self.config.hand_size {
            self.rotation.get(self.config.hand_size)
        } else {
            None
        }
    }

    /// Whether every card of the deck has been seen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.known.len() >= self.config.deck_size
    }

    /// Distinct cards seen so far, capped at the deck size.
    #[must_use]
    pub fn progress(&self) -> usize {
        self.known.len().min(self.config.deck_size)
    }

    /// Known cards in discovery order.
    #[must_use]
    pub fn known_cards(&self) -> &[CardId] {
        &self.known
    }

    #[must_use]
    pub fn is_known(&self, card: &str) -> bool {
        self.known_set.contains(card)
    }

    /// Rotation buffer, least recently played first.
    #[must_use]
    pub fn rotation(&self) -> &[CardId] {
        &self.rotation
    }

    #[must_use]
    pub fn history(&self) -> &PlayHistory {
        &self.history
    }

    /// The last `count` cards played, oldest first.
    #[must_use]
    pub fn last_played(&self, count: usize) -> Vec<CardId> {
        self.history.last_cards(count)
    }

    #[must_use]
    pub fn config(&self) -> &CycleConfig {
        &self.config
    }

    /// Forget everything. Used between matches.
    pub fn reset(&mut self) {
        self.known.clear();
        self.known_set.clear();
        self.rotation.clear();
        self.history.clear();
    }
}
