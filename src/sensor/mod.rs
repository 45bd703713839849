//! Upstream sensors.
//!
//! A sensor reports every card match it sees in "the current frame". It does
//! not deduplicate and it does not touch tracker state; frames go through the
//! service, which runs them past the deduplicator.
//!
//! ## Key Types
//!
//! - `CardSensor`: Polled producer of raw candidates
//! - `ScriptedSensor`: Replays a fixed queue of frames and failures
//! - `SyntheticSensor`: Seeded noisy producer for demos and soak tests

pub mod scripted;
pub mod synthetic;

pub use scripted::ScriptedSensor;
pub use synthetic::{SyntheticPlay, SyntheticSensor};

use crate::core::Timestamp;
use crate::detection::Candidate;
use crate::error::Result;

/// A source of raw per-frame card candidates.
///
/// `poll` must return within one poll interval. Errors are logged by the
/// sensor loop and the frame is skipped; they never reach the tracker.
pub trait CardSensor: Send {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Candidates visible at `now`.
    fn poll(&mut self, now: Timestamp) -> Result<Vec<Candidate>>;
}

impl<S: CardSensor + ?Sized> CardSensor for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn poll(&mut self, now: Timestamp) -> Result<Vec<Candidate>> {
        (**self).poll(now)
    }
}
