//! Card catalog: identities, definitions, and the registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identity key of a card (`"knight"`)
//! - `CardDefinition`: Display name and elixir cost
//! - `CardRegistry`: Read-only lookup, builtin or loaded from TOML
//!
//! The registry is immutable after load. Share it with `Arc<CardRegistry>`.

mod builtin;
pub mod definition;
pub mod registry;

pub use definition::{CardDefinition, CardId};
pub use registry::CardRegistry;
