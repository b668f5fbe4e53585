//! Engine error taxonomy.
//!
//! Every failure here is caller-visible: either the caller handed the engine
//! an illegal move/target combination, or the move describes an illegal game
//! state transition. Nothing is retried or silently recovered; errors abort
//! the whole top-level `apply` call.

use crate::effects::EffectId;

/// Convenience alias for engine results.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by move construction, application, and effect resolution.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// An acquire move was constructed or applied with a target map.
    #[error("acquire moves cannot carry targets")]
    InvalidMoveShape,

    /// The named card does not exist in the card dictionary.
    #[error("unknown card `{0}`")]
    UnknownCard(String),

    /// The named card is not in the center row and its supply pile is
    /// absent or exhausted.
    #[error("`{0}` is not available in the center")]
    CardUnavailable(String),

    /// The named card is not in the acting player's hand.
    #[error("`{0}` is not in hand")]
    CardNotAvailable(String),

    /// The acting player cannot pay for the card being acquired.
    #[error("cannot afford `{card}`: cost {cost}, {available} runes remaining")]
    InsufficientResources {
        card: String,
        cost: i64,
        available: i64,
    },

    /// The acting player lacks the power to defeat the card.
    #[error("not enough power to defeat `{card}`: cost {cost}, {available} power remaining")]
    InsufficientPower {
        card: String,
        cost: i64,
        available: i64,
    },

    /// An activate move named a construct the player does not have in play.
    #[error("construct `{0}` is not in play")]
    ConstructNotInPlay(String),

    /// The named construct was already activated this turn.
    #[error("construct `{0}` was already activated this turn")]
    ConstructAlreadyActivated(String),

    /// An OR compound resolved to something other than exactly one
    /// selected branch.
    #[error("expected exactly one selected branch of an OR effect, found {found}")]
    AmbiguousOrTarget { found: usize },

    /// A mandatory effect has no entry in the target map.
    #[error("mandatory effect {0} has no entry in the target map")]
    MissingMandatoryTarget(EffectId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EngineError::UnknownCard("Arha Templar".to_string()).to_string(),
            "unknown card `Arha Templar`"
        );
        assert_eq!(
            EngineError::AmbiguousOrTarget { found: 2 }.to_string(),
            "expected exactly one selected branch of an OR effect, found 2"
        );
        assert_eq!(
            EngineError::InsufficientPower {
                card: "Wolf Shaman".to_string(),
                cost: 3,
                available: 1,
            }
            .to_string(),
            "not enough power to defeat `Wolf Shaman`: cost 3, 1 power remaining"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(EngineError::InvalidMoveShape, EngineError::InvalidMoveShape);
        assert_ne!(
            EngineError::CardUnavailable("Mystic".to_string()),
            EngineError::CardNotAvailable("Mystic".to_string())
        );
    }
}
