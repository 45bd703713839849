//! Match lifecycle.
//!
//! ```text
//!            start             end
//!   Idle ───────────► Active ───────► Ended
//!    ▲                  ▲               │
//!    │                  └──── start ────┘
//!    └────────────── reset (from any) ──
//! ```

use std::time::Duration;

use serde::Serialize;

use crate::core::Timestamp;

/// Lifecycle phase of a match.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchPhase {
    #[default]
    Idle,
    Active,
    Ended,
}

/// Per-match bookkeeping owned by the match tracker.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MatchSession {
    pub phase: MatchPhase,
    pub started_at: Option<Timestamp>,
    pub ended_at: Option<Timestamp>,

    /// Plays recorded in the current match.
    pub plays: u32,
}

impl MatchSession {
    /// Enter `Active`, zeroing the play counter.
    pub fn start(&mut self, now: Timestamp) {
        self.phase = MatchPhase::Active;
        self.started_at = Some(now);
        self.ended_at = None;
        self.plays = 0;
    }

    /// Enter `Ended`. Returns `false` if no match was active.
    pub fn end(&mut self, now: Timestamp) -> bool {
        if self.phase != MatchPhase::Active {
            return false;
        }
        self.phase = MatchPhase::Ended;
        self.ended_at = Some(now);
        true
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == MatchPhase::Active
    }

    /// Time since start; frozen at the end time once ended, zero when idle.
    #[must_use]
    pub fn duration(&self, now: Timestamp) -> Duration {
        match (self.started_at, self.ended_at) {
            (Some(start), Some(end)) => end.saturating_since(start),
            (Some(start), None) => now.saturating_since(start),
            _ => Duration::ZERO,
        }
    }
}
