//! Elixir estimation.
//!
//! - `ElixirMode`: normal / double / triple regeneration
//! - `ElixirSimulator`: lazy, clamped reserve model charged by card plays
//! - `SpendOutcome` / `ChargeOutcome`: shortfalls and unknown cards are
//!   values, not errors

pub mod mode;
pub mod simulator;

pub use mode::ElixirMode;
pub use simulator::{ChargeOutcome, ElixirSimulator, SpendOutcome};
pub(crate) use simulator::whole_units;
