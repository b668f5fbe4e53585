//! The card-semantics seam.
//!
//! The engine decides *which* effects fire and in what order; what an
//! atomic effect actually does to the board is game data, supplied by the
//! caller through `EffectHandler`. The handler mutates the board directly
//! and may hand back move descriptors for the engine to apply immediately,
//! unrecorded. This is how "discard a card; if you do, draw two" chains
//! are expressed.

use crate::core::{Board, EngineResult};
use crate::moves::MoveDescriptor;

use super::effect::AtomicEffect;
use super::targets::TargetMap;

/// Notifications raised by move application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    /// A card was acquired from the center.
    AcquiredCard,
    /// A card in the center was defeated.
    DefeatedCard,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::AcquiredCard => write!(f, "acquired_card"),
            EventKind::DefeatedCard => write!(f, "defeated_card"),
        }
    }
}

/// Applies the semantics of a single atomic effect.
///
/// Implementations receive the move's full target map; the targets chosen
/// for the effect at hand are under `effect.id`. The returned descriptors
/// are applied as moves in order, without being recorded in move history.
pub trait EffectHandler {
    /// Apply one atomic effect to the board.
    fn apply_simple_effect(
        &self,
        board: &mut Board,
        effect: &AtomicEffect,
        targets: &TargetMap,
    ) -> EngineResult<Vec<MoveDescriptor>>;
}

/// Handler that treats every atomic effect as a no-op.
///
/// Useful for drivers and tests that exercise move validation and the
/// resolution walk without caring what the effects do.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullEffectHandler;

impl EffectHandler for NullEffectHandler {
    fn apply_simple_effect(
        &self,
        _board: &mut Board,
        _effect: &AtomicEffect,
        _targets: &TargetMap,
    ) -> EngineResult<Vec<MoveDescriptor>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardBuilder;
    use crate::effects::EffectId;

    #[test]
    fn test_event_kind_display() {
        assert_eq!(EventKind::AcquiredCard.to_string(), "acquired_card");
        assert_eq!(EventKind::DefeatedCard.to_string(), "defeated_card");
    }

    #[test]
    fn test_null_handler_returns_no_moves() {
        let mut board = BoardBuilder::new().build();
        let effect = AtomicEffect::new(EffectId::new(0), "nothing");

        let pending = NullEffectHandler
            .apply_simple_effect(&mut board, &effect, &TargetMap::new())
            .unwrap();
        assert!(pending.is_empty());
    }
}
