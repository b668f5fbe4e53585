//! Card dictionary for definition lookup.
//!
//! The `CardDictionary` stores every card definition in the game, keyed by
//! name. It is read-only during play and injected into resolution as a
//! capability, so tests can fabricate arbitrary card sets without touching
//! process-wide state.

use rustc_hash::FxHashMap;

use crate::core::{EngineError, EngineResult};

use super::definition::CardDefinition;

/// Registry of card definitions, keyed by card name.
///
/// ## Example
///
/// ```
/// use deckbuilder_engine::cards::{CardDefinition, CardDictionary};
/// use deckbuilder_engine::effects::{Effect, EffectId};
///
/// let mut dictionary = CardDictionary::new();
/// dictionary.register(CardDefinition::new(
///     "Apprentice",
///     0,
///     Effect::atomic(EffectId::new(0), "Gain 1 rune"),
/// ));
///
/// let found = dictionary.find_card("Apprentice").unwrap();
/// assert_eq!(found.cost, 0);
/// assert!(dictionary.find_card("Askara of Fate").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardDictionary {
    cards: FxHashMap<String, CardDefinition>,
}

impl CardDictionary {
    /// Create a new empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same name already exists; duplicate
    /// registration is a programmer error, not a game-state failure.
    pub fn register(&mut self, card: CardDefinition) {
        if self.cards.contains_key(&card.name) {
            panic!("Card `{}` already registered", card.name);
        }
        self.cards.insert(card.name.clone(), card);
    }

    /// Look up a card definition by name.
    ///
    /// Fails with `UnknownCard` when the name is not registered.
    pub fn find_card(&self, name: &str) -> EngineResult<&CardDefinition> {
        self.cards
            .get(name)
            .ok_or_else(|| EngineError::UnknownCard(name.to_string()))
    }

    /// Look up a card definition by name, returning `None` when absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CardDefinition> {
        self.cards.get(name)
    }

    /// Check if a card name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.cards.contains_key(name)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the dictionary is empty.
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
