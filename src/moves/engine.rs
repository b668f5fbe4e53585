//! Move construction, validation, and the application state machine.
//!
//! A move is a player-issued intent against the board: acquire or defeat a
//! card in the center, play a card from hand, or activate a construct.
//! Construction checks shape invariants; target/effect-tree consistency is
//! checked lazily during resolution, because it depends on the card's
//! effect tree, which the move does not hold.
//!
//! `apply` is the single entry point. Top-level moves record themselves in
//! the current player's log and the board's per-turn log; moves synthesized
//! during effect resolution are applied with `record = false` so they stay
//! invisible to history and turn accounting while still mutating state.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{CardDefinition, CardDictionary};
use crate::core::{Board, EngineError, EngineResult};
use crate::effects::{EffectResolver, EventKind, ResolverContext, TargetMap};

use super::descriptor::MoveType;

/// A validated player (or effect-generated) move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move {
    move_type: MoveType,
    card_name: String,
    targets: Option<TargetMap>,
}

impl Move {
    /// Create a move.
    ///
    /// A key present in `targets` marks that effect as selected to
    /// activate, even when it maps to an empty target list; absence marks
    /// an optional effect as not activated. Fails with `InvalidMoveShape`
    /// when an acquire move carries a target map; acquisitions resolve no
    /// effects.
    pub fn new(
        move_type: MoveType,
        card_name: impl Into<String>,
        targets: Option<TargetMap>,
    ) -> EngineResult<Self> {
        if move_type == MoveType::Acquire && targets.is_some() {
            return Err(EngineError::InvalidMoveShape);
        }
        Ok(Self {
            move_type,
            card_name: card_name.into(),
            targets,
        })
    }

    /// Kind of move.
    #[must_use]
    pub fn move_type(&self) -> MoveType {
        self.move_type
    }

    /// Card the move acts on.
    #[must_use]
    pub fn card_name(&self) -> &str {
        &self.card_name
    }

    /// The caller-supplied target map, if any.
    #[must_use]
    pub fn targets(&self) -> Option<&TargetMap> {
        self.targets.as_ref()
    }

    /// Multi-line diagnostic rendering.
    ///
    /// One line per selected effect, rendering the effect's template with
    /// its stored parameter substituted, followed by the chosen targets
    /// when the list is non-empty. Purely a debugging aid; resolution
    /// never consults it.
    #[must_use]
    pub fn describe(&self, cards: &CardDictionary) -> String {
        let mut out = format!("{} {}", self.move_type, self.card_name);

        let (Some(targets), Some(card)) = (&self.targets, cards.get(&self.card_name)) else {
            return out;
        };
        for id in targets.sorted_ids() {
            let line = match card.effect.find_atomic(id) {
                Some(atomic) => atomic.render(),
                None => id.to_string(),
            };
            out.push_str("\n\t");
            out.push_str(&line);

            let chosen = targets.targets(id).unwrap_or(&[]);
            if !chosen.is_empty() {
                out.push_str(" -> ");
                out.push_str(&chosen.join(", "));
            }
        }
        out
    }

    /// Apply this move to the board.
    ///
    /// With `record` set, the move is first appended to the current
    /// player's move log and the board's per-turn log. Effect-synthesized
    /// moves pass `record = false`.
    ///
    /// Any failure aborts the whole call immediately. Mutations already
    /// made by earlier steps are not rolled back; errors mean illegal
    /// caller input or an illegal transition, to be surfaced to whatever
    /// drives move selection.
    pub fn apply(
        self,
        board: &mut Board,
        ctx: &ResolverContext<'_>,
        record: bool,
    ) -> EngineResult<()> {
        debug!(move_type = %self.move_type, card = %self.card_name, record, "applying move");

        if record {
            board.record_move(&self);
        }

        match self.move_type {
            MoveType::Play => self.apply_play(board, ctx),
            MoveType::Acquire => self.apply_acquire(board, ctx),
            MoveType::Defeat => self.apply_defeat(board, ctx),
            MoveType::Activate => self.apply_activate(board, ctx),
        }
    }

    fn apply_play(&self, board: &mut Board, ctx: &ResolverContext<'_>) -> EngineResult<()> {
        let card = ctx.cards.find_card(&self.card_name)?;

        if card.is_lifebound() && card.is_hero() {
            let player = board.current_player_id();
            let bonus = board.current_player().honor_for_lifebound_hero;
            board.give_honor(player, bonus);
            board.current_player_mut().honor_for_lifebound_hero = 0;
        }

        board.current_player_mut().play_card(card)?;

        // Constructs resolve their effects on their own activate move.
        if !card.is_construct() {
            self.resolve_card_effects(board, ctx, card)?;
        }
        Ok(())
    }

    fn apply_acquire(&self, board: &mut Board, ctx: &ResolverContext<'_>) -> EngineResult<()> {
        // Re-asserted here because a move can enter the program by
        // deserialization, bypassing `new`.
        if self.targets.is_some() {
            return Err(EngineError::InvalidMoveShape);
        }

        let card = ctx.cards.find_card(&self.card_name)?;
        board.remove_card_from_center(&self.card_name)?;

        board.current_player_mut().pay_for_acquired_card(card)?;
        board.current_player_mut().acquire(card);

        ctx.raise_event(EventKind::AcquiredCard, &self.card_name);
        Ok(())
    }

    fn apply_defeat(&self, board: &mut Board, ctx: &ResolverContext<'_>) -> EngineResult<()> {
        let card = ctx.cards.find_card(&self.card_name)?;
        board.remove_card_from_center(&self.card_name)?;

        let available = board.current_player().power_remaining;
        if available < card.cost {
            return Err(EngineError::InsufficientPower {
                card: self.card_name.clone(),
                cost: card.cost,
                available,
            });
        }
        board.current_player_mut().power_remaining -= card.cost;

        // Cultists are the one defeat that never pays out the bonus.
        if self.card_name != "Cultist" {
            let player = board.current_player_id();
            let bonus = board.current_player().honor_for_defeating_monster;
            board.give_honor(player, bonus);
            board.current_player_mut().honor_for_defeating_monster = 0;
        }

        // Defeating a card triggers its own ability.
        self.resolve_card_effects(board, ctx, card)?;

        ctx.raise_event(EventKind::DefeatedCard, &self.card_name);
        Ok(())
    }

    fn apply_activate(&self, board: &mut Board, ctx: &ResolverContext<'_>) -> EngineResult<()> {
        let card = ctx.cards.find_card(&self.card_name)?;
        board.current_player_mut().activate_construct(&self.card_name)?;
        self.resolve_card_effects(board, ctx, card)
    }

    fn resolve_card_effects(
        &self,
        board: &mut Board,
        ctx: &ResolverContext<'_>,
        card: &CardDefinition,
    ) -> EngineResult<()> {
        let empty = TargetMap::new();
        let targets = self.targets.as_ref().unwrap_or(&empty);
        EffectResolver::activate(board, ctx, &card.effect, targets)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.move_type, self.card_name)
    }
}
