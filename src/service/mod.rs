//! Concurrent runtime around the match tracker.
//!
//! ```text
//!  sensor loop ──Frame──┐
//!  control surface ─────┼─► mpsc ─► worker (dedup + write lock) ─► MatchTracker
//!                       │                                              ▲
//!  display ─────────────┴──────────── snapshot (read lock) ────────────┘
//! ```
//!
//! ## Key Types
//!
//! - `TrackerService`: Spawns the single-writer worker task
//! - `ServiceHandle`: Cloneable command sender plus snapshot reader
//! - `ServiceCommand`: Messages the worker understands
//! - `SensorLoop`: Cooperative producer task from `spawn_sensor_loop`

pub mod command;
pub mod handle;
pub mod sensor_loop;
pub mod worker;

pub use command::ServiceCommand;
pub use handle::ServiceHandle;
pub use sensor_loop::{spawn_sensor_loop, SensorLoop};
pub use worker::TrackerService;
