//! Core state types: errors, players, and the board.
//!
//! The board/player container is deliberately free of card semantics: it
//! exposes the mutation surface the move handlers need (zones, pools,
//! honor grants, turn bookkeeping) and nothing else.

pub mod board;
pub mod error;
pub mod player;

pub use board::{Board, BoardBuilder, CenterRow};
pub use error::{EngineError, EngineResult};
pub use player::{Player, PlayerId, PlayerMap};
