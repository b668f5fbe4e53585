//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: name, cost,
//! type flags, and the root of its effect tree. Definitions never change
//! during a game; everything mutable lives on `Board` and `Player`.

use serde::{Deserialize, Serialize};

use crate::effects::{Effect, EffectId, EffectParam};

/// Static card definition.
///
/// ## Example
///
/// ```
/// use deckbuilder_engine::cards::CardDefinition;
/// use deckbuilder_engine::effects::{Effect, EffectId};
///
/// let card = CardDefinition::new(
///     "Lifebound Initiate",
///     1,
///     Effect::atomic(EffectId::new(0), "Gain {} power").with_param(2),
/// )
/// .hero()
/// .lifebound();
///
/// assert!(card.is_hero());
/// assert!(!card.is_construct());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Card name, the lookup key for moves and the dictionary.
    pub name: String,

    /// Cost in runes when acquired, or in power when defeated.
    pub cost: i64,

    hero: bool,
    lifebound: bool,
    construct: bool,
    monster: bool,

    /// Root of the card's effect tree.
    pub effect: Effect,
}

impl CardDefinition {
    /// Create a card definition with no type flags set.
    #[must_use]
    pub fn new(name: impl Into<String>, cost: i64, effect: Effect) -> Self {
        Self {
            name: name.into(),
            cost,
            hero: false,
            lifebound: false,
            construct: false,
            monster: false,
            effect,
        }
    }

    /// Mark the card a hero (builder pattern).
    #[must_use]
    pub fn hero(mut self) -> Self {
        self.hero = true;
        self
    }

    /// Mark the card lifebound (builder pattern).
    #[must_use]
    pub fn lifebound(mut self) -> Self {
        self.lifebound = true;
        self
    }

    /// Mark the card a construct (builder pattern).
    #[must_use]
    pub fn construct(mut self) -> Self {
        self.construct = true;
        self
    }

    /// Mark the card a monster (builder pattern).
    #[must_use]
    pub fn monster(mut self) -> Self {
        self.monster = true;
        self
    }

    /// Whether the card is a hero.
    #[must_use]
    pub fn is_hero(&self) -> bool {
        self.hero
    }

    /// Whether the card is lifebound.
    #[must_use]
    pub fn is_lifebound(&self) -> bool {
        self.lifebound
    }

    /// Whether the card is a construct. Constructs defer effect
    /// resolution from their play move to their own activate move.
    #[must_use]
    pub fn is_construct(&self) -> bool {
        self.construct
    }

    /// Whether the card is a monster.
    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.monster
    }

    /// Parameter of the atomic effect with the given id, if the effect
    /// exists in this card's tree and carries one.
    #[must_use]
    pub fn get_effect_param(&self, id: EffectId) -> Option<&EffectParam> {
        self.effect.find_atomic(id)?.param.as_ref()
    }
}
