//! The single writer.
//!
//! One tokio task owns the command receiver and the deduplicator and is the
//! only code that takes the tracker's write lock. Each command is applied
//! under one write guard, so a reader never sees a half-applied play.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, RwLock};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::command::ServiceCommand;
use super::handle::ServiceHandle;
use crate::core::TrackerConfig;
use crate::detection::{Candidate, Deduplicator};
use crate::error::Result;
use crate::tracker::{DetectOutcome, MatchTracker};

/// Spawns and owns the tracker worker task.
pub struct TrackerService;

impl TrackerService {
    /// Start the worker on the current tokio runtime.
    ///
    /// Returns the client handle and the worker's join handle. The worker
    /// exits on `Shutdown` or once every handle has been dropped. Fails with
    /// `InvalidConfig` if `config` does not validate.
    pub fn spawn(tracker: MatchTracker, config: &TrackerConfig) -> Result<(ServiceHandle, JoinHandle<()>)> {
        config.validate()?;
        let service = &config.service;
        let (tx, rx) = mpsc::channel(service.command_capacity.max(1));
        let clock = Arc::clone(tracker.clock());
        let state = Arc::new(RwLock::new(tracker));

        let worker = Worker {
            rx,
            state: Arc::clone(&state),
            dedup: Deduplicator::new(config.detection.clone()),
            tick_interval: service.tick_interval,
        };
        let task = tokio::spawn(worker.run());
        tracing::debug!(
            tick_ms = service.tick_interval.as_millis() as u64,
            capacity = service.command_capacity,
            "Tracker service started"
        );

        Ok((ServiceHandle::new(tx, state, clock), task))
    }
}

struct Worker {
    rx: mpsc::Receiver<ServiceCommand>,
    state: Arc<RwLock<MatchTracker>>,
    dedup: Deduplicator,
    tick_interval: Duration,
}

impl Worker {
    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                biased;
                command = self.rx.recv() => match command {
                    Some(ServiceCommand::Shutdown) | None => break,
                    Some(command) => self.apply(command).await,
                },
                _ = ticker.tick() => {
                    self.state.write().await.tick();
                }
            }
        }

        let stats = self.dedup.stats();
        tracing::info!(
            frames = stats.frames,
            emitted = stats.emitted,
            "Tracker service stopped"
        );
    }

    async fn apply(&mut self, command: ServiceCommand) {
        tracing::trace!(command = command.label(), "Applying command");
        match command {
            ServiceCommand::Start => {
                self.dedup.clear();
                self.state.write().await.start_match();
            }
            ServiceCommand::Stop => {
                self.state.write().await.end_match();
            }
            ServiceCommand::Reset => {
                self.dedup.clear();
                self.dedup.reset_stats();
                self.state.write().await.reset();
            }
            ServiceCommand::SetMode(mode) => {
                self.state.write().await.set_elixir_mode(mode);
            }
            ServiceCommand::ManualCard(card) => {
                self.state.write().await.manual_card(&card);
            }
            ServiceCommand::Frame(candidates) => self.frame(candidates).await,
            ServiceCommand::Barrier(ack) => {
                let _ = ack.send(());
            }
            ServiceCommand::Stats(reply) => {
                let _ = reply.send(self.dedup.stats().clone());
            }
            // Handled by the run loop.
            ServiceCommand::Shutdown => {}
        }
    }

    async fn frame(&mut self, candidates: Vec<Candidate>) {
        let mut tracker = self.state.write().await;
        if !tracker.session().is_active() {
            return;
        }
        let now = tracker.now();
        for event in self.dedup.process(candidates, now) {
            if let DetectOutcome::UnknownCard = tracker.card_detected(event.card.as_str()) {
                tracing::debug!(card = %event.card, confidence = event.confidence, "Sensor reported an unknown card");
            }
        }
    }
}
