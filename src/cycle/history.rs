//! Bounded play history.

use im::Vector;
use serde::Serialize;

use crate::cards::CardId;
use crate::core::Timestamp;

/// One observed play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlayRecord {
    pub card: CardId,
    pub at: Timestamp,
}

/// Ring buffer of the most recent plays, oldest first.
///
/// Backed by a persistent vector so snapshots can hold a copy in O(1).
#[derive(Clone, Debug)]
pub struct PlayHistory {
    records: Vector<PlayRecord>,
    capacity: usize,
}

impl PlayHistory {
    /// Create an empty history holding at most `capacity` records.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            records: Vector::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a play, evicting the oldest once the bound is exceeded.
    pub fn push(&mut self, record: PlayRecord) {
        self.records.push_back(record);
        while self.records.len() > self.capacity {
            self.records.pop_front();
        }
    }

    /// The last `count` cards played, oldest first.
    #[must_use]
    pub fn last_cards(&self, count: usize) -> Vec<CardId> {
        let skip = self.records.len().saturating_sub(count);
        self.records.iter().skip(skip).map(|r| r.card.clone()).collect()
    }

    /// Most recent play.
    #[must_use]
    pub fn latest(&self) -> Option<&PlayRecord> {
        self.records.back()
    }

    /// All retained records (cheap clone).
    #[must_use]
    pub fn records(&self) -> Vector<PlayRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(card: &str, millis: u64) -> PlayRecord {
        PlayRecord {
            card: CardId::new(card),
            at: Timestamp::from_millis(millis),
        }
    }

    #[test]
    fn test_eviction() {
        let mut history = PlayHistory::new(3);
        for (i, card) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            history.push(record(card, i as u64));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(
            history.last_cards(10),
            vec![CardId::new("c"), CardId::new("d"), CardId::new("e")]
        );
        assert_eq!(history.latest().unwrap().at, Timestamp::from_millis(4));
    }

    #[test]
    fn test_last_cards_window() {
        let mut history = PlayHistory::new(50);
        history.push(record("knight", 0));
        history.push(record("zap", 1));
        history.push(record("golem", 2));

        assert_eq!(history.last_cards(2), vec![CardId::new("zap"), CardId::new("golem")]);
        assert!(history.last_cards(0).is_empty());
    }

    #[test]
    fn test_snapshot_copy_is_independent() {
        let mut history = PlayHistory::new(5);
        history.push(record("knight", 0));
        let copy = history.records();

        history.push(record("zap", 1));
        history.clear();

        assert_eq!(copy.len(), 1);
        assert!(history.is_empty());
    }

    #[test]
    fn test_zero_capacity_is_bumped() {
        let mut history = PlayHistory::new(0);
        history.push(record("knight", 0));
        assert_eq!(history.capacity(), 1);
        assert_eq!(history.len(), 1);
    }
}
