//! Cross-frame cooldown.
//!
//! A played card keeps matching every frame while it is on screen. The
//! cooldown map remembers when each (card, grid cell) pair last produced an
//! accepted event and rejects repeats inside the window.

use std::time::Duration;

use rustc_hash::FxHashMap;

use super::candidate::Position;
use crate::cards::CardId;
use crate::core::Timestamp;

/// Quantized position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    /// Cell containing `position` for cells of side `size`.
    #[must_use]
    pub fn of(position: Position, size: f32) -> Self {
        // Saturating float-to-int casts; positions are validated finite upstream.
        Self {
            col: (position.x / size).floor() as i32,
            row: (position.y / size).floor() as i32,
        }
    }
}

/// Last-accept time per (card, cell).
#[derive(Clone, Debug)]
pub struct CooldownMap {
    last_accept: FxHashMap<(CardId, GridCell), Timestamp>,
    cell_size: f32,
    window: Duration,
}

impl CooldownMap {
    #[must_use]
    pub fn new(cell_size: f32, window: Duration) -> Self {
        Self {
            last_accept: FxHashMap::default(),
            cell_size,
            window,
        }
    }

    /// Whether `card` at `position` is still inside its cooldown at `now`.
    #[must_use]
    pub fn is_cooling(&self, card: &CardId, position: Position, now: Timestamp) -> bool {
        let key = (card.clone(), GridCell::of(position, self.cell_size));
        self.last_accept
            .get(&key)
            .is_some_and(|&last| now.saturating_since(last) < self.window)
    }

    /// Record an accepted event.
    pub fn accept(&mut self, card: &CardId, position: Position, now: Timestamp) {
        let key = (card.clone(), GridCell::of(position, self.cell_size));
        self.last_accept.insert(key, now);
    }

    /// Drop entries whose window has elapsed. Returns how many were removed.
    pub fn prune(&mut self, now: Timestamp) -> usize {
        let before = self.last_accept.len();
        let window = self.window;
        self.last_accept
            .retain(|_, last| now.saturating_since(*last) < window);
        before - self.last_accept.len()
    }

    pub fn clear(&mut self) {
        self.last_accept.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.last_accept.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.last_accept.is_empty()
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> CooldownMap {
        CooldownMap::new(50.0, Duration::from_secs(2))
    }

    #[test]
    fn test_grid_cell() {
        assert_eq!(GridCell::of(Position::new(0.0, 49.9), 50.0), GridCell { col: 0, row: 0 });
        assert_eq!(GridCell::of(Position::new(50.0, 120.0), 50.0), GridCell { col: 1, row: 2 });
        assert_eq!(GridCell::of(Position::new(-1.0, 0.0), 50.0), GridCell { col: -1, row: 0 });
    }

    #[test]
    fn test_cooling_window() {
        let mut map = map();
        let knight = CardId::new("knight");
        let pos = Position::new(120.0, 300.0);

        assert!(!map.is_cooling(&knight, pos, Timestamp::ZERO));
        map.accept(&knight, pos, Timestamp::ZERO);

        assert!(map.is_cooling(&knight, pos, Timestamp::from_millis(1999)));
        assert!(!map.is_cooling(&knight, pos, Timestamp::from_millis(2000)));
    }

    #[test]
    fn test_scoped_by_card_and_cell() {
        let mut map = map();
        let knight = CardId::new("knight");
        map.accept(&knight, Position::new(10.0, 10.0), Timestamp::ZERO);

        // Same cell, different card.
        assert!(!map.is_cooling(&CardId::new("zap"), Position::new(10.0, 10.0), Timestamp::ZERO));
        // Same card, neighbouring cell.
        assert!(!map.is_cooling(&knight, Position::new(60.0, 10.0), Timestamp::ZERO));
        // Same card, same cell, different pixel.
        assert!(map.is_cooling(&knight, Position::new(40.0, 45.0), Timestamp::ZERO));
    }

    #[test]
    fn test_prune_and_clear() {
        let mut map = map();
        map.accept(&CardId::new("knight"), Position::new(0.0, 0.0), Timestamp::ZERO);
        map.accept(&CardId::new("zap"), Position::new(0.0, 0.0), Timestamp::from_millis(1500));

        assert_eq!(map.prune(Timestamp::from_millis(2500)), 1);
        assert_eq!(map.len(), 1);

        map.clear();
        assert!(map.is_empty());
    }
}
