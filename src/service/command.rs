//! Commands accepted by the tracker worker.

use tokio::sync::oneshot;

use crate::detection::{Candidate, DedupStats};
use crate::elixir::ElixirMode;

/// Everything that can change tracker state goes through one of these.
#[derive(Debug)]
pub enum ServiceCommand {
    /// Begin a new match.
    Start,
    /// End the active match.
    Stop,
    /// Back to idle; also clears detection cooldowns and counters.
    Reset,
    /// Change elixir regeneration mode.
    SetMode(ElixirMode),
    /// Record a play directly, bypassing deduplication.
    ManualCard(String),
    /// One raw sensor frame; deduplicated before it reaches the tracker.
    Frame(Vec<Candidate>),
    /// Acknowledged once every earlier command has been applied.
    Barrier(oneshot::Sender<()>),
    /// Current deduplication counters.
    Stats(oneshot::Sender<DedupStats>),
    /// Stop the worker.
    Shutdown,
}

impl ServiceCommand {
    /// Short label for logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ServiceCommand::Start => "start",
            ServiceCommand::Stop => "stop",
            ServiceCommand::Reset => "reset",
            ServiceCommand::SetMode(_) => "set_mode",
            ServiceCommand::ManualCard(_) => "manual_card",
            ServiceCommand::Frame(_) => "frame",
            ServiceCommand::Barrier(_) => "barrier",
            ServiceCommand::Stats(_) => "stats",
            ServiceCommand::Shutdown => "shutdown",
        }
    }
}
