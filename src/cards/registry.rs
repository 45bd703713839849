//! Card catalog for definition lookup.
//!
//! The `CardRegistry` is loaded once at start-up and shared read-only
//! (usually behind an `Arc`) with every component that needs a cost or a
//! display name. Unknown identities are answered with `None`, never an error.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::builtin;
use super::definition::{CardDefinition, CardId};
use crate::error::{self, Result, ScoutError};

/// Highest cost a single card can have.
const MAX_CARD_COST: u32 = 10;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use royale_scout::cards::{CardDefinition, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new("knight", "Knight", 3)).unwrap();
///
/// assert_eq!(registry.cost("knight"), Some(3));
/// assert_eq!(registry.cost("dragon_of_doom"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

/// On-disk catalog layout.
///
/// ```toml
/// [[cards]]
/// id = "knight"
/// name = "Knight"
/// cost = 3
/// ```
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    cards: Vec<CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every card the game ships.
    #[must_use]
    pub fn builtin() -> Self {
        let cards = builtin::CARDS
            .iter()
            .map(|&(key, name, cost)| {
                let card = CardDefinition::new(key, name, cost);
                let card = if builtin::VARIABLE_COST.contains(&key) {
                    card.with_variable_cost()
                } else {
                    card
                };
                (card.id.clone(), card)
            })
            .collect();
        Self { cards }
    }

    /// Parse a TOML catalog.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(source)?;
        let mut registry = Self::new();
        for card in file.cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let registry = Self::from_toml_str(&error::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), cards = registry.len(), "Loaded card catalog");
        Ok(registry)
    }

    /// Register a card definition.
    ///
    /// Fails on an empty key, a cost outside `1..=10`, or a key that is
    /// already registered.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        validate(&card)?;
        if self.cards.contains_key(&card.id) {
            return Err(ScoutError::DuplicateCard(card.id.to_string()));
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Overlay another registry on this one; its definitions win.
    ///
    /// Returns the keys that were overridden.
    pub fn merge(&mut self, other: CardRegistry) -> Vec<CardId> {
        let mut overridden = Vec::new();
        for (id, card) in other.cards {
            if self.cards.insert(id.clone(), card).is_some() {
                overridden.push(id);
            }
        }
        overridden.sort();
        overridden
    }

    /// Get a card definition by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CardDefinition> {
        self.cards.get(key)
    }

    /// Elixir cost of a card.
    #[must_use]
    pub fn cost(&self, key: &str) -> Option<u32> {
        self.get(key).map(|card| card.cost)
    }

    /// Check if a key is registered.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.cards.contains_key(key)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }

    /// Find cards matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardDefinition>
    where
        F: Fn(&CardDefinition) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}

fn validate(card: &CardDefinition) -> Result<()> {
    if card.id.as_str().trim().is_empty() {
        return Err(ScoutError::InvalidCard {
            id: card.id.to_string(),
            reason: "empty key".into(),
        });
    }
    if !(1..=MAX_CARD_COST).contains(&card.cost) {
        return Err(ScoutError::InvalidCard {
            id: card.id.to_string(),
            reason: format!("cost {} outside 1..={MAX_CARD_COST}", card.cost),
        });
    }
    Ok(())
}
