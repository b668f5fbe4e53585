//! # deckbuilder-engine
//!
//! The move-resolution engine of a deckbuilding card-game simulator.
//!
//! A *move* (acquire, defeat, play, activate) is a player-issued intent
//! against the shared board. Cards carry trees of atomic effects combined
//! under AND/OR semantics; the caller selects which effects fire, and with
//! what targets, through a target map keyed by effect identifier. The
//! engine validates the move, walks the effect tree, rejects ambiguous or
//! conflicting selections, and applies any moves that effects synthesize
//! along the way ("discard a card; if you do, draw two") immediately and
//! without recording them in move history.
//!
//! ## Design Principles
//!
//! 1. **Closed sum types**: move kinds and effect-tree nodes are enums
//!    resolved with exhaustive matching - no runtime type sniffing.
//!
//! 2. **Injected capabilities**: the card dictionary, the effect handler,
//!    and the event sink arrive through `ResolverContext`. No globals, so
//!    tests fabricate card sets freely.
//!
//! 3. **Semantics live at the seam**: what an atomic effect *does* is the
//!    `EffectHandler` implementor's business. The engine owns which
//!    effects fire, in what order, and how failures propagate.
//!
//! ## Modules
//!
//! - `core`: errors, players, the board, turn bookkeeping
//! - `cards`: card definitions and the lookup dictionary
//! - `effects`: effect trees, target maps, the resolution walk
//! - `moves`: move validation and the application state machine
//!
//! ## Example
//!
//! ```
//! use deckbuilder_engine::cards::{CardDefinition, CardDictionary};
//! use deckbuilder_engine::core::BoardBuilder;
//! use deckbuilder_engine::effects::{Effect, EffectId, NullEffectHandler, ResolverContext};
//! use deckbuilder_engine::moves::{Move, MoveType};
//!
//! let mut cards = CardDictionary::new();
//! cards.register(CardDefinition::new(
//!     "Apprentice",
//!     0,
//!     Effect::atomic(EffectId::new(0), "Gain 1 rune"),
//! ));
//!
//! let mut board = BoardBuilder::new().build();
//! board.current_player_mut().add_to_hand("Apprentice");
//!
//! let handler = NullEffectHandler;
//! let ctx = ResolverContext::new(&cards, &handler);
//!
//! let mv = Move::new(MoveType::Play, "Apprentice", None).unwrap();
//! mv.apply(&mut board, &ctx, true).unwrap();
//!
//! assert_eq!(board.current_player().in_play(), &["Apprentice".to_string()]);
//! assert_eq!(board.current_player().moves.len(), 1);
//! ```

pub mod cards;
pub mod core;
pub mod effects;
pub mod moves;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardBuilder, CenterRow, EngineError, EngineResult, Player, PlayerId, PlayerMap,
};

pub use crate::cards::{CardDefinition, CardDictionary};

pub use crate::effects::{
    AtomicEffect, CompoundKind, Effect, EffectHandler, EffectId, EffectParam, EffectResolver,
    EventKind, NullEffectHandler, ResolverContext, TargetMap,
};

pub use crate::moves::{Move, MoveDescriptor, MoveType};
