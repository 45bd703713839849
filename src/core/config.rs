//! Tracker configuration.
//!
//! Everything tunable lives here and is handed to component constructors:
//! - `ElixirConfig`: regeneration rates, cap, starting reserve
//! - `CycleConfig`: deck/hand sizes and history bound
//! - `DetectionConfig`: confidence threshold, suppression radius, cooldown grid
//! - `ServiceConfig`: worker tick and sensor poll cadence
//! - `TrackerConfig`: combines all of the above
//!
//! Every section deserializes with defaults, so a TOML file only has to name
//! the values it overrides:
//!
//! ```
//! use royale_scout::core::TrackerConfig;
//!
//! let config = TrackerConfig::from_toml_str("[elixir]\nstarting = 7.0\n").unwrap();
//! assert_eq!(config.elixir.starting, 7.0);
//! assert_eq!(config.elixir.max, 10.0);
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{self, Result, ScoutError};

/// Elixir regeneration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElixirConfig {
    /// Seconds per unit at normal speed.
    pub normal_rate: f64,

    /// Seconds per unit during double elixir.
    pub double_rate: f64,

    /// Seconds per unit during triple elixir.
    pub triple_rate: f64,

    /// Reserve cap.
    pub max: f64,

    /// Reserve at match start.
    pub starting: f64,
}

impl Default for ElixirConfig {
    fn default() -> Self {
        Self {
            normal_rate: 2.8,
            double_rate: 1.4,
            triple_rate: 0.9,
            max: 10.0,
            starting: 5.0,
        }
    }
}

impl ElixirConfig {
    /// Set the starting reserve.
    #[must_use]
    pub fn with_starting(mut self, starting: f64) -> Self {
        self.starting = starting;
        self
    }

    /// Set the reserve cap.
    #[must_use]
    pub fn with_max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Set all three rates (seconds per unit).
    #[must_use]
    pub fn with_rates(mut self, normal: f64, double: f64, triple: f64) -> Self {
        self.normal_rate = normal;
        self.double_rate = double;
        self.triple_rate = triple;
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, rate) in [
            ("normal_rate", self.normal_rate),
            ("double_rate", self.double_rate),
            ("triple_rate", self.triple_rate),
        ] {
            if !(rate.is_finite() && rate > 0.0) {
                return Err(ScoutError::InvalidConfig(format!(
                    "elixir.{name} must be a positive number of seconds, got {rate}"
                )));
            }
        }
        if !(self.max.is_finite() && self.max > 0.0) {
            return Err(ScoutError::InvalidConfig(format!(
                "elixir.max must be positive, got {}",
                self.max
            )));
        }
        if !(self.starting.is_finite() && (0.0..=self.max).contains(&self.starting)) {
            return Err(ScoutError::InvalidConfig(format!(
                "elixir.starting must lie in [0, {}], got {}",
                self.max, self.starting
            )));
        }
        Ok(())
    }
}

/// Card rotation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Distinct cards in a deck.
    pub deck_size: usize,

    /// Cards held at any instant.
    pub hand_size: usize,

    /// Play history bound; oldest entries are evicted past this.
    pub history_capacity: usize,

    /// Plays considered "recent" by the partial-deck hand heuristic.
    pub recent_window: usize,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            deck_size: 8,
            hand_size: 4,
            history_capacity: 50,
            recent_window: 4,
        }
    }
}

impl CycleConfig {
    /// Set the history bound.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.hand_size == 0 || self.hand_size >= self.deck_size {
            return Err(ScoutError::InvalidConfig(format!(
                "cycle.hand_size must lie in [1, deck_size), got {} with deck_size {}",
                self.hand_size, self.deck_size
            )));
        }
        if self.history_capacity == 0 {
            return Err(ScoutError::InvalidConfig(
                "cycle.history_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Detection deduplication parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum confidence a candidate needs to be considered at all.
    pub min_confidence: f32,

    /// Same-card candidates closer than this (pixels) are one object.
    pub suppression_radius: f32,

    /// Side of a cooldown grid cell (pixels).
    pub cooldown_cell: f32,

    /// Minimum time between accepted events in one cell.
    #[serde(with = "millis")]
    pub cooldown: Duration,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.55,
            suppression_radius: 30.0,
            cooldown_cell: 50.0,
            cooldown: Duration::from_secs(2),
        }
    }
}

impl DetectionConfig {
    /// Set the confidence threshold.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Set the cooldown window.
    #[must_use]
    pub fn with_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(ScoutError::InvalidConfig(format!(
                "detection.min_confidence must lie in [0, 1], got {}",
                self.min_confidence
            )));
        }
        if !(self.suppression_radius.is_finite() && self.suppression_radius >= 0.0) {
            return Err(ScoutError::InvalidConfig(
                "detection.suppression_radius must be a non-negative number".into(),
            ));
        }
        if !(self.cooldown_cell.is_finite() && self.cooldown_cell > 0.0) {
            return Err(ScoutError::InvalidConfig(
                "detection.cooldown_cell must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Worker cadence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// How often the worker advances the elixir time base.
    #[serde(with = "millis")]
    pub tick_interval: Duration,

    /// Upper bound on one sensor loop iteration.
    #[serde(with = "millis")]
    pub poll_interval: Duration,

    /// Bounded command queue length.
    pub command_capacity: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(50),
            poll_interval: Duration::from_millis(200),
            command_capacity: 64,
        }
    }
}

impl ServiceConfig {
    fn validate(&self) -> Result<()> {
        if self.tick_interval.is_zero() || self.poll_interval.is_zero() {
            return Err(ScoutError::InvalidConfig(
                "service intervals must be non-zero".into(),
            ));
        }
        // A stop has to be observed within a second.
        if self.poll_interval > Duration::from_secs(1) {
            return Err(ScoutError::InvalidConfig(format!(
                "service.poll_interval must not exceed 1000ms, got {}ms",
                self.poll_interval.as_millis()
            )));
        }
        if self.command_capacity == 0 {
            return Err(ScoutError::InvalidConfig(
                "service.command_capacity must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Complete tracker configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerConfig {
    pub elixir: ElixirConfig,
    pub cycle: CycleConfig,
    pub detection: DetectionConfig,
    pub service: ServiceConfig,
}

impl TrackerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::from_toml_str(&error::read_to_string(path)?)?;
        tracing::debug!(path = %path.display(), "Loaded tracker configuration");
        Ok(config)
    }

    /// Check every section for out-of-range values.
    pub fn validate(&self) -> Result<()> {
        self.elixir.validate()?;
        self.cycle.validate()?;
        self.detection.validate()?;
        self.service.validate()
    }

    /// Replace the elixir section.
    #[must_use]
    pub fn with_elixir(mut self, elixir: ElixirConfig) -> Self {
        self.elixir = elixir;
        self
    }

    /// Replace the cycle section.
    #[must_use]
    pub fn with_cycle(mut self, cycle: CycleConfig) -> Self {
        self.cycle = cycle;
        self
    }

    /// Replace the detection section.
    #[must_use]
    pub fn with_detection(mut self, detection: DetectionConfig) -> Self {
        self.detection = detection;
        self
    }

    /// Replace the service section.
    #[must_use]
    pub fn with_service(mut self, service: ServiceConfig) -> Self {
        self.service = service;
        self
    }
}

/// Durations are written as integer milliseconds in config files.
mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
