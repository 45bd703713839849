//! Card definitions - static card data.
//!
//! `CardDefinition` holds what never changes about a card: its identity key,
//! display name and elixir cost. Everything observed during a match (when it
//! was played, where it sits in the rotation) lives in the trackers.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Identity key of a card, e.g. `"hog_rider"`.
///
/// Cheap to clone; the trackers copy identities into rotation buffers,
/// histories and snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(Arc<str>);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(key: impl AsRef<str>) -> Self {
        Self(Arc::from(key.as_ref()))
    }

    /// Get the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for CardId {
    fn from(key: String) -> Self {
        Self(Arc::from(key))
    }
}

impl std::borrow::Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Static card definition.
///
/// ## Variable cost
///
/// A few cards (Mirror) cost whatever the copied card cost plus one. The
/// catalog stores a nominal cost for those and sets `variable_cost`; the
/// elixir estimate charges the nominal value and callers can surface the
/// caveat.
///
/// ## Example
///
/// ```
/// use royale_scout::cards::{CardDefinition, CardId};
///
/// let knight = CardDefinition::new("knight", "Knight", 3);
/// assert_eq!(knight.id, CardId::new("knight"));
/// assert!(!knight.variable_cost);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Identity key.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Elixir cost (nominal for variable-cost cards).
    pub cost: u32,

    /// Real cost depends on context.
    #[serde(default)]
    pub variable_cost: bool,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, cost: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cost,
            variable_cost: false,
        }
    }

    /// Mark the cost as nominal (builder pattern).
    #[must_use]
    pub fn with_variable_cost(mut self) -> Self {
        self.variable_cost = true;
        self
    }
}
