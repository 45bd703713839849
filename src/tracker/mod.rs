//! Match orchestration.
//!
//! - `MatchTracker`: owns the lifecycle and fans each detection into the
//!   elixir and cycle models as one unit
//! - `MatchSession` / `MatchPhase`: Idle → Active → Ended
//! - `TrackerSnapshot`: composite read-only view for display
//! - `DetectOutcome` / `PlayReport`: result of feeding one detection

pub mod match_tracker;
pub mod session;
pub mod snapshot;

pub use match_tracker::MatchTracker;
pub use session::{MatchPhase, MatchSession};
pub use snapshot::{DetectOutcome, PlayReport, TrackerSnapshot};
