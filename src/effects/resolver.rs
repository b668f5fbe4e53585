//! Effect resolution - the recursive AND/OR activation walk.
//!
//! Given an effect tree and a move's target map, the resolver decides which
//! atomic effects fire and in what order:
//!
//! - An atomic root is handed straight to the effect handler.
//! - A compound node is flattened into its atomic effects (depth-first,
//!   declaration order), then filtered to those selected in the target map.
//!   AND activates every selected effect in order; OR demands exactly one
//!   selected effect.
//!
//! Moves synthesized by the handler are constructed and applied on the
//! spot, in the order returned, without being recorded in move history.
//! Ordering matters: "discard a card; if you do, draw two" only works if
//! the discard lands before the draw.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::CardDictionary;
use crate::core::{Board, EngineError, EngineResult};
use crate::moves::Move;

use super::effect::{AtomicEffect, CompoundKind, Effect};
use super::handler::{EffectHandler, EventKind};
use super::targets::TargetMap;

/// Capabilities injected into a resolution.
///
/// Carries the read-only card dictionary, the card-semantics handler, and
/// an event sink. Nothing here is global: tests fabricate a context per
/// scenario.
pub struct ResolverContext<'a> {
    /// Card definition lookup.
    pub cards: &'a CardDictionary,

    /// Card-specific effect semantics.
    pub handler: &'a dyn EffectHandler,

    /// Notification sink for acquired/defeated events.
    pub events: Box<dyn Fn(EventKind, &str) + 'a>,
}

impl<'a> ResolverContext<'a> {
    /// Create a context with a no-op event sink.
    pub fn new(cards: &'a CardDictionary, handler: &'a dyn EffectHandler) -> Self {
        Self {
            cards,
            handler,
            events: Box::new(|_, _| {}),
        }
    }

    /// Attach an event sink (builder pattern).
    #[must_use]
    pub fn with_event_sink(mut self, sink: impl Fn(EventKind, &str) + 'a) -> Self {
        self.events = Box::new(sink);
        self
    }

    pub(crate) fn raise_event(&self, kind: EventKind, card_name: &str) {
        trace!(event = %kind, card = card_name, "raising event");
        (self.events)(kind, card_name);
    }
}

/// Resolves effect trees against a target map.
pub struct EffectResolver;

impl EffectResolver {
    /// Activate an effect tree.
    ///
    /// The target map is the owning move's full map; selections for effects
    /// nested anywhere in the tree are honored. Fails with
    /// `AmbiguousOrTarget` when an OR node has anything other than exactly
    /// one selected branch, and with `MissingMandatoryTarget` when an AND
    /// walk reaches a mandatory effect with no entry.
    pub fn activate(
        board: &mut Board,
        ctx: &ResolverContext<'_>,
        effect: &Effect,
        targets: &TargetMap,
    ) -> EngineResult<()> {
        match effect {
            Effect::Atomic(atomic) => Self::activate_atomic(board, ctx, atomic, targets),
            Effect::Compound { kind, .. } => {
                let atomics = effect.flatten();
                match kind {
                    CompoundKind::And => {
                        for atomic in atomics {
                            if targets.is_selected(atomic.id) {
                                Self::activate_atomic(board, ctx, atomic, targets)?;
                            } else if !atomic.optional {
                                return Err(EngineError::MissingMandatoryTarget(atomic.id));
                            }
                        }
                        Ok(())
                    }
                    CompoundKind::Or => {
                        let selected: SmallVec<[&AtomicEffect; 2]> = atomics
                            .into_iter()
                            .filter(|e| targets.is_selected(e.id))
                            .collect();
                        if selected.len() != 1 {
                            return Err(EngineError::AmbiguousOrTarget {
                                found: selected.len(),
                            });
                        }
                        Self::activate_atomic(board, ctx, selected[0], targets)
                    }
                }
            }
        }
    }

    /// Invoke the handler for one atomic effect and apply whatever moves
    /// it synthesizes, unrecorded, in order.
    fn activate_atomic(
        board: &mut Board,
        ctx: &ResolverContext<'_>,
        atomic: &AtomicEffect,
        targets: &TargetMap,
    ) -> EngineResult<()> {
        trace!(effect = %atomic.id, "activating effect");
        let pending = ctx.handler.apply_simple_effect(board, atomic, targets)?;

        if !pending.is_empty() {
            debug!(effect = %atomic.id, count = pending.len(), "applying synthesized moves");
        }
        for descriptor in pending {
            let mv = Move::new(descriptor.move_type, descriptor.card_name, descriptor.targets)?;
            mv.apply(board, ctx, false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardDefinition;
    use crate::core::BoardBuilder;
    use crate::effects::{EffectId, NullEffectHandler};
    use std::cell::RefCell;

    /// Handler that records which effects fire, in order.
    struct RecordingHandler {
        fired: RefCell<Vec<EffectId>>,
    }

    impl RecordingHandler {
        fn new() -> Self {
            Self {
                fired: RefCell::new(Vec::new()),
            }
        }
    }

    impl EffectHandler for RecordingHandler {
        fn apply_simple_effect(
            &self,
            _board: &mut Board,
            effect: &AtomicEffect,
            _targets: &TargetMap,
        ) -> EngineResult<Vec<crate::moves::MoveDescriptor>> {
            self.fired.borrow_mut().push(effect.id);
            Ok(Vec::new())
        }
    }

    fn and_tree() -> Effect {
        Effect::all([
            Effect::atomic(EffectId::new(1), "mandatory"),
            Effect::atomic(EffectId::new(2), "optional").optional(),
        ])
    }

    fn or_tree() -> Effect {
        Effect::one_of([
            Effect::atomic(EffectId::new(1), "left").optional(),
            Effect::atomic(EffectId::new(2), "right").optional(),
        ])
    }

    #[test]
    fn test_atomic_root_fires_unconditionally() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let tree = Effect::atomic(EffectId::new(0), "Gain 1 honor");
        EffectResolver::activate(&mut board, &ctx, &tree, &TargetMap::new()).unwrap();

        assert_eq!(*handler.fired.borrow(), vec![EffectId::new(0)]);
    }

    #[test]
    fn test_and_skips_unselected_optional() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let targets = TargetMap::new().with_selected(EffectId::new(1));
        EffectResolver::activate(&mut board, &ctx, &and_tree(), &targets).unwrap();

        assert_eq!(*handler.fired.borrow(), vec![EffectId::new(1)]);
    }

    #[test]
    fn test_and_activates_selected_in_order() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let targets = TargetMap::new()
            .with_targets(EffectId::new(2), ["X"])
            .with_selected(EffectId::new(1));
        EffectResolver::activate(&mut board, &ctx, &and_tree(), &targets).unwrap();

        assert_eq!(
            *handler.fired.borrow(),
            vec![EffectId::new(1), EffectId::new(2)]
        );
    }

    #[test]
    fn test_and_mandatory_without_entry_fails() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let targets = TargetMap::new().with_targets(EffectId::new(2), ["X"]);
        let err = EffectResolver::activate(&mut board, &ctx, &and_tree(), &targets).unwrap_err();

        assert_eq!(err, EngineError::MissingMandatoryTarget(EffectId::new(1)));
        assert!(handler.fired.borrow().is_empty());
    }

    #[test]
    fn test_or_exactly_one_selected() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let targets = TargetMap::new().with_selected(EffectId::new(1));
        EffectResolver::activate(&mut board, &ctx, &or_tree(), &targets).unwrap();

        assert_eq!(*handler.fired.borrow(), vec![EffectId::new(1)]);
    }

    #[test]
    fn test_or_both_selected_is_ambiguous() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let targets = TargetMap::new()
            .with_selected(EffectId::new(1))
            .with_selected(EffectId::new(2));
        let err = EffectResolver::activate(&mut board, &ctx, &or_tree(), &targets).unwrap_err();

        assert_eq!(err, EngineError::AmbiguousOrTarget { found: 2 });
    }

    #[test]
    fn test_or_none_selected_is_ambiguous() {
        let dictionary = CardDictionary::new();
        let handler = RecordingHandler::new();
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();

        let err =
            EffectResolver::activate(&mut board, &ctx, &or_tree(), &TargetMap::new()).unwrap_err();

        assert_eq!(err, EngineError::AmbiguousOrTarget { found: 0 });
    }

    #[test]
    fn test_event_sink_receives_events() {
        let dictionary = CardDictionary::new();
        let handler = NullEffectHandler;
        let seen: RefCell<Vec<(EventKind, String)>> = RefCell::new(Vec::new());
        let ctx = ResolverContext::new(&dictionary, &handler)
            .with_event_sink(|kind, card| seen.borrow_mut().push((kind, card.to_string())));

        ctx.raise_event(EventKind::DefeatedCard, "Wolf Shaman");

        assert_eq!(
            *seen.borrow(),
            vec![(EventKind::DefeatedCard, "Wolf Shaman".to_string())]
        );
    }

    #[test]
    fn test_synthesized_moves_are_applied_unrecorded() {
        // "Play Apprentice from hand" expressed as a synthesized move.
        struct ChainHandler;
        impl EffectHandler for ChainHandler {
            fn apply_simple_effect(
                &self,
                _board: &mut Board,
                effect: &AtomicEffect,
                _targets: &TargetMap,
            ) -> EngineResult<Vec<crate::moves::MoveDescriptor>> {
                if effect.id == EffectId::new(5) {
                    Ok(vec![crate::moves::MoveDescriptor::new(
                        crate::moves::MoveType::Play,
                        "Apprentice",
                    )])
                } else {
                    Ok(Vec::new())
                }
            }
        }

        let mut dictionary = CardDictionary::new();
        dictionary.register(CardDefinition::new(
            "Apprentice",
            0,
            Effect::atomic(EffectId::new(0), "Gain 1 rune"),
        ));

        let handler = ChainHandler;
        let ctx = ResolverContext::new(&dictionary, &handler);
        let mut board = BoardBuilder::new().build();
        board.current_player_mut().add_to_hand("Apprentice");

        let tree = Effect::atomic(EffectId::new(5), "chain");
        EffectResolver::activate(&mut board, &ctx, &tree, &TargetMap::new()).unwrap();

        assert_eq!(
            board.current_player().in_play(),
            &["Apprentice".to_string()]
        );
        assert!(board.current_player().moves.is_empty());
        assert!(board.moves_played_this_turn.is_empty());
    }
}
