//! Core building blocks: time base, configuration, deterministic noise.
//!
//! Nothing in here knows about cards or elixir; the estimator modules are
//! built on top of these types.

pub mod config;
pub mod rng;
pub mod time;

pub use config::{CycleConfig, DetectionConfig, ElixirConfig, ServiceConfig, TrackerConfig};
pub use rng::NoiseRng;
pub use time::{Clock, ManualClock, SystemClock, Timestamp};
