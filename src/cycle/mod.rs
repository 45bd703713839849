//! Card cycle tracking.
//!
//! - `CycleTracker`: rebuilds the opponent's 8-card rotation from plays
//! - `HandEstimate`: current hand, flagged exact or heuristic
//! - `PlayHistory` / `PlayRecord`: bounded log of observed plays

pub mod history;
pub mod tracker;

pub use history::{PlayHistory, PlayRecord};
pub use tracker::{CycleTracker, HandEstimate, RecordOutcome};
