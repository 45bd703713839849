//! # royale-scout
//!
//! Opponent state inference for a real-time collectible-card game.
//!
//! From a stream of noisy "card played" sightings plus the passage of time,
//! the tracker estimates the opponent's elixir reserve and reconstructs
//! their 8-card rotation, current hand and next card.
//!
//! ## Design Principles
//!
//! 1. **Estimators never fail**: Unknown cards, elixir shortfalls and
//!    inactive matches are outcome values. Only loading and the service
//!    channel return errors.
//!
//! 2. **Explicit time**: Models take a `Timestamp`; only the match tracker
//!    reads a `Clock`. Tests drive a `ManualClock`.
//!
//! 3. **Single writer**: One worker task mutates the tracker; displays read
//!    snapshots under a read lock.
//!
//! ## Data Flow
//!
//! ```text
//! sensor ─► Deduplicator ─► MatchTracker ─┬─► ElixirSimulator
//!                                         └─► CycleTracker
//!                                                  │
//!                           TrackerSnapshot ◄──────┘
//! ```
//!
//! ## Modules
//!
//! - `core`: Time base, configuration, deterministic noise
//! - `cards`: Card identities and the cost catalog
//! - `elixir`: Continuous-time elixir model
//! - `cycle`: Rotation reconstruction and hand estimate
//! - `detection`: Same-frame suppression and cross-frame cooldown
//! - `tracker`: Match lifecycle and snapshots
//! - `sensor`: Sensor trait, scripted and synthetic sensors
//! - `service`: Worker task, handle, sensor loop

pub mod cards;
pub mod core;
pub mod cycle;
pub mod detection;
pub mod elixir;
pub mod error;
pub mod sensor;
pub mod service;
pub mod tracker;

// Re-export commonly used types
pub use crate::core::{
    Clock, ManualClock, SystemClock, Timestamp,
    CycleConfig, DetectionConfig, ElixirConfig, ServiceConfig, TrackerConfig,
    NoiseRng,
};

pub use crate::error::{Result, ScoutError};

pub use crate::cards::{CardDefinition, CardId, CardRegistry};

pub use crate::elixir::{ChargeOutcome, ElixirMode, ElixirSimulator, SpendOutcome};

pub use crate::cycle::{CycleTracker, HandEstimate, PlayHistory, PlayRecord, RecordOutcome};

pub use crate::detection::{
    Candidate, DetectionEvent, Position,
    CooldownMap, GridCell,
    DedupStats, Deduplicator,
};

pub use crate::tracker::{
    DetectOutcome, MatchPhase, MatchSession, MatchTracker, PlayReport, TrackerSnapshot,
};

pub use crate::sensor::{CardSensor, ScriptedSensor, SyntheticPlay, SyntheticSensor};

pub use crate::service::{
    spawn_sensor_loop, SensorLoop, ServiceCommand, ServiceHandle, TrackerService,
};
