//! Cloneable client side of the tracker worker.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, RwLock};

use super::command::ServiceCommand;
use crate::core::{Clock, Timestamp};
use crate::detection::{Candidate, DedupStats};
use crate::elixir::ElixirMode;
use crate::error::{Result, ScoutError};
use crate::tracker::{MatchTracker, TrackerSnapshot};

/// Handle for sending commands to the worker and reading snapshots.
///
/// Writes are queued; `snapshot` only takes the read lock and never waits
/// on the command queue.
#[derive(Clone)]
pub struct ServiceHandle {
    tx: mpsc::Sender<ServiceCommand>,
    state: Arc<RwLock<MatchTracker>>,
    clock: Arc<dyn Clock>,
}

impl ServiceHandle {
    pub(crate) fn new(
        tx: mpsc::Sender<ServiceCommand>,
        state: Arc<RwLock<MatchTracker>>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self { tx, state, clock }
    }

    async fn send(&self, command: ServiceCommand) -> Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| ScoutError::ServiceClosed)
    }

    pub async fn start(&self) -> Result<()> {
        self.send(ServiceCommand::Start).await
    }

    pub async fn stop(&self) -> Result<()> {
        self.send(ServiceCommand::Stop).await
    }

    pub async fn reset(&self) -> Result<()> {
        self.send(ServiceCommand::Reset).await
    }

    pub async fn set_mode(&self, mode: ElixirMode) -> Result<()> {
        self.send(ServiceCommand::SetMode(mode)).await
    }

    pub async fn manual_card(&self, card: impl Into<String>) -> Result<()> {
        self.send(ServiceCommand::ManualCard(card.into())).await
    }

    /// Queue one raw sensor frame.
    pub async fn frame(&self, candidates: Vec<Candidate>) -> Result<()> {
        self.send(ServiceCommand::Frame(candidates)).await
    }

    /// Wait until every command sent before this one has been applied.
    pub async fn barrier(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.send(ServiceCommand::Barrier(tx)).await?;
        rx.await.map_err(|_| ScoutError::ServiceClosed)
    }

    /// Deduplication counters as of every earlier command.
    pub async fn dedup_stats(&self) -> Result<DedupStats> {
        let (tx, rx) = oneshot::channel();
        self.send(ServiceCommand::Stats(tx)).await?;
        rx.await.map_err(|_| ScoutError::ServiceClosed)
    }

    /// Ask the worker to exit. Later sends fail with `ServiceClosed`.
    pub async fn shutdown(&self) -> Result<()> {
        self.send(ServiceCommand::Shutdown).await
    }

    /// Current tracker view. Still readable after shutdown.
    pub async fn snapshot(&self) -> TrackerSnapshot {
        self.state.read().await.snapshot()
    }

    /// Time on the tracker's clock.
    #[must_use]
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("closed", &self.tx.is_closed())
            .finish_non_exhaustive()
    }
}
