//! Regeneration speed.

use serde::{Deserialize, Serialize};

use crate::core::ElixirConfig;

/// Elixir regeneration mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElixirMode {
    #[default]
    Normal,
    Double,
    Triple,
}

impl ElixirMode {
    /// Seconds it takes to regenerate one unit in this mode.
    #[must_use]
    pub fn seconds_per_unit(self, config: &ElixirConfig) -> f64 {
        match self {
            ElixirMode::Normal => config.normal_rate,
            ElixirMode::Double => config.double_rate,
            ElixirMode::Triple => config.triple_rate,
        }
    }

    /// Lowercase label used by control surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ElixirMode::Normal => "normal",
            ElixirMode::Double => "double",
            ElixirMode::Triple => "triple",
        }
    }
}

impl std::fmt::Display for ElixirMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ElixirMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "1x" => Ok(ElixirMode::Normal),
            "double" | "2x" => Ok(ElixirMode::Double),
            "triple" | "3x" => Ok(ElixirMode::Triple),
            other => Err(format!("unknown elixir mode '{other}'")),
        }
    }
}
