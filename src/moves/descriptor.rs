//! Move types and synthesized-move descriptors.

use serde::{Deserialize, Serialize};

use crate::effects::TargetMap;

/// The four kinds of move a player (or an effect) can make.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveType {
    /// Buy a card from the center with runes.
    Acquire,
    /// Defeat a card in the center with power.
    Defeat,
    /// Play a card from hand.
    Play,
    /// Activate a construct already in play.
    Activate,
}

impl std::fmt::Display for MoveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveType::Acquire => write!(f, "acquire"),
            MoveType::Defeat => write!(f, "defeat"),
            MoveType::Play => write!(f, "play"),
            MoveType::Activate => write!(f, "activate"),
        }
    }
}

/// A move synthesized by an effect handler.
///
/// Descriptors are raw `(move_type, card_name, targets)` triples; the
/// resolver turns each into a validated `Move` and applies it immediately,
/// unrecorded. Some card effects are easiest to express as moves ("play a
/// card from your discard pile"), but those implied moves must not show up
/// in the history a player actually played.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// Kind of move to synthesize.
    pub move_type: MoveType,

    /// Card the move acts on.
    pub card_name: String,

    /// Target map for the synthesized move, if any.
    pub targets: Option<TargetMap>,
}

impl MoveDescriptor {
    /// Create a descriptor with no targets.
    #[must_use]
    pub fn new(move_type: MoveType, card_name: impl Into<String>) -> Self {
        Self {
            move_type,
            card_name: card_name.into(),
            targets: None,
        }
    }

    /// Attach a target map (builder pattern).
    #[must_use]
    pub fn with_targets(mut self, targets: TargetMap) -> Self {
        self.targets = Some(targets);
        self
    }
}
