//! The shared board: players, the center row, and turn bookkeeping.
//!
//! `Board` is the mutable state every move handler operates on. It uses
//! `im` persistent vectors for the row and the move logs, so cloning a
//! board for speculative rollouts is cheap for callers driving the engine
//! with a search loop.
//!
//! The board holds no card definitions and no effect semantics; those are
//! injected per resolution via `ResolverContext`.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::moves::Move;

use super::error::{EngineError, EngineResult};
use super::player::{Player, PlayerId, PlayerMap};

/// The shared row of acquirable and defeatable cards.
///
/// Two kinds of availability: face-up cards in the row (each removable
/// once), and named supply piles with a remaining count (`None` for piles
/// that never run out).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CenterRow {
    row: Vector<String>,
    piles: FxHashMap<String, Option<u32>>,
}

impl CenterRow {
    /// Create an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Face-up cards currently in the row.
    #[must_use]
    pub fn row(&self) -> &Vector<String> {
        &self.row
    }

    /// Add a face-up card to the row.
    pub fn add_to_row(&mut self, card_name: impl Into<String>) {
        self.row.push_back(card_name.into());
    }

    /// Register a supply pile with a remaining count. `None` means the
    /// pile never runs out.
    pub fn set_pile(&mut self, card_name: impl Into<String>, remaining: Option<u32>) {
        self.piles.insert(card_name.into(), remaining);
    }

    /// Remaining count for a supply pile, if one is registered.
    #[must_use]
    pub fn pile_remaining(&self, card_name: &str) -> Option<Option<u32>> {
        self.piles.get(card_name).copied()
    }

    /// Remove one copy of the named card from the center.
    ///
    /// The face-up row is consulted first, then the supply piles. Fails
    /// with `CardUnavailable` when the card is in neither, or its pile is
    /// exhausted.
    pub fn take(&mut self, card_name: &str) -> EngineResult<()> {
        if let Some(position) = self.row.index_of(&card_name.to_string()) {
            self.row.remove(position);
            return Ok(());
        }

        match self.piles.get_mut(card_name) {
            Some(Some(0)) | None => Err(EngineError::CardUnavailable(card_name.to_string())),
            Some(Some(remaining)) => {
                *remaining -= 1;
                Ok(())
            }
            Some(None) => Ok(()),
        }
    }
}

/// The complete shared game state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    players: PlayerMap<Player>,
    current: PlayerId,

    /// The shared center row.
    pub center: CenterRow,

    /// Moves recorded this turn, cleared by `advance_turn`.
    pub moves_played_this_turn: Vector<Move>,

    /// Turn number, starting at 1 and advancing when the rotation wraps
    /// back to the first player.
    pub turn_number: u32,
}

impl Board {
    /// Create a board with the given number of players and an empty center.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            players: PlayerMap::new(player_count, Player::new),
            current: PlayerId::new(0),
            center: CenterRow::new(),
            moves_played_this_turn: Vector::new(),
            turn_number: 1,
        }
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player_id(&self) -> PlayerId {
        self.current
    }

    /// The current player's state.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// The current player's state, mutably.
    pub fn current_player_mut(&mut self) -> &mut Player {
        let current = self.current;
        &mut self.players[current]
    }

    /// A specific player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// A specific player's state, mutably.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Grant honor to a player.
    pub fn give_honor(&mut self, player: PlayerId, amount: i64) {
        self.players[player].honor += amount;
    }

    /// Append a move to the current player's log and the per-turn log.
    pub fn record_move(&mut self, mv: &Move) {
        let current = self.current;
        self.players[current].moves.push_back(mv.clone());
        self.moves_played_this_turn.push_back(mv.clone());
    }

    /// Remove one copy of the named card from the center.
    pub fn remove_card_from_center(&mut self, card_name: &str) -> EngineResult<()> {
        self.center.take(card_name)
    }

    /// End the current player's turn and rotate to the next player.
    ///
    /// Clears the per-turn move log and the leaving player's pools,
    /// bonuses, and construct-activation marks. Permanent per-player move
    /// logs are untouched.
    pub fn advance_turn(&mut self) {
        self.current_player_mut().end_turn();
        self.moves_played_this_turn = Vector::new();

        let next = (self.current.index() + 1) % self.player_count();
        if next == 0 {
            self.turn_number += 1;
        }
        self.current = PlayerId::new(next as u8);
    }
}

/// Builder for configuring a board.
///
/// Setup is configuration, not convention: the engine does not hardcode a
/// center size, pile list, or player count.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    player_count: usize,
    row: Vec<String>,
    piles: Vec<(String, Option<u32>)>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self {
            player_count: 2,
            row: Vec::new(),
            piles: Vec::new(),
        }
    }
}

impl BoardBuilder {
    /// Start a builder with two players and an empty center.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players (1-255).
    #[must_use]
    pub fn player_count(mut self, count: usize) -> Self {
        assert!((1..=255).contains(&count), "Player count must be 1-255");
        self.player_count = count;
        self
    }

    /// Add face-up cards to the center row.
    #[must_use]
    pub fn center_row<S: Into<String>>(mut self, cards: impl IntoIterator<Item = S>) -> Self {
        self.row.extend(cards.into_iter().map(Into::into));
        self
    }

    /// Add a supply pile with a limited count.
    #[must_use]
    pub fn pile(mut self, card_name: impl Into<String>, remaining: u32) -> Self {
        self.piles.push((card_name.into(), Some(remaining)));
        self
    }

    /// Add a supply pile that never runs out.
    #[must_use]
    pub fn unlimited_pile(mut self, card_name: impl Into<String>) -> Self {
        self.piles.push((card_name.into(), None));
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::new(self.player_count);
        for card in self.row {
            board.center.add_to_row(card);
        }
        for (card, remaining) in self.piles {
            board.center.set_pile(card, remaining);
        }
        board
    }
}
