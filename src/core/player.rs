//! Player identification and per-player state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## Player
//!
//! Everything one player owns: card zones (hand, in-play, constructs,
//! discard), the honor/power/rune pools, the one-shot bonus fields consumed
//! by qualifying plays and defeats, and the permanent move log.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::CardDefinition;
use crate::moves::Move;

use super::error::{EngineError, EngineResult};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over all entries in player order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        self.get_mut(player)
    }
}

/// One player's complete state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// This player's identifier.
    pub id: PlayerId,

    hand: Vec<String>,
    in_play: Vec<String>,
    constructs: Vec<String>,
    discard: Vec<String>,
    activated_this_turn: FxHashSet<String>,

    /// Victory points.
    pub honor: i64,

    /// Power left to spend on defeats this turn.
    pub power_remaining: i64,

    /// Runes left to spend on acquisitions this turn.
    pub runes_remaining: i64,

    /// One-shot bonus granted on the next qualifying lifebound-hero play,
    /// then zeroed.
    pub honor_for_lifebound_hero: i64,

    /// One-shot bonus granted on the next qualifying defeat, then zeroed.
    pub honor_for_defeating_monster: i64,

    /// Every recorded move this player has made.
    pub moves: Vector<Move>,
}

impl Player {
    /// Create a player with empty zones and zeroed pools.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            hand: Vec::new(),
            in_play: Vec::new(),
            constructs: Vec::new(),
            discard: Vec::new(),
            activated_this_turn: FxHashSet::default(),
            honor: 0,
            power_remaining: 0,
            runes_remaining: 0,
            honor_for_lifebound_hero: 0,
            honor_for_defeating_monster: 0,
            moves: Vector::new(),
        }
    }

    /// Cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[String] {
        &self.hand
    }

    /// Non-construct cards in play this turn.
    #[must_use]
    pub fn in_play(&self) -> &[String] {
        &self.in_play
    }

    /// Constructs in play.
    #[must_use]
    pub fn constructs(&self) -> &[String] {
        &self.constructs
    }

    /// Discard pile, acquired cards included.
    #[must_use]
    pub fn discard(&self) -> &[String] {
        &self.discard
    }

    /// Put a card into this player's hand.
    pub fn add_to_hand(&mut self, card_name: impl Into<String>) {
        self.hand.push(card_name.into());
    }

    /// Move the named card from hand into play.
    ///
    /// Constructs land in the construct zone, everything else in the
    /// in-play zone. Fails with `CardNotAvailable` when the card is not in
    /// hand.
    pub fn play_card(&mut self, card: &CardDefinition) -> EngineResult<()> {
        let position = self
            .hand
            .iter()
            .position(|name| *name == card.name)
            .ok_or_else(|| EngineError::CardNotAvailable(card.name.clone()))?;
        let name = self.hand.remove(position);

        if card.is_construct() {
            self.constructs.push(name);
        } else {
            self.in_play.push(name);
        }
        Ok(())
    }

    /// Pay for a card being acquired out of the rune pool.
    ///
    /// Fails with `InsufficientResources` when the pool cannot cover the
    /// cost. Alternate currencies for specific card types are a concern of
    /// the driving game, layered on top of this choke point.
    pub fn pay_for_acquired_card(&mut self, card: &CardDefinition) -> EngineResult<()> {
        if self.runes_remaining < card.cost {
            return Err(EngineError::InsufficientResources {
                card: card.name.clone(),
                cost: card.cost,
                available: self.runes_remaining,
            });
        }
        self.runes_remaining -= card.cost;
        Ok(())
    }

    /// Take ownership of an acquired card. Acquired cards go to the
    /// discard pile.
    pub fn acquire(&mut self, card: &CardDefinition) {
        self.discard.push(card.name.clone());
    }

    /// Mark the named construct activated for this turn.
    ///
    /// Fails with `ConstructNotInPlay` when the player does not have the
    /// construct in play, and `ConstructAlreadyActivated` on a repeat
    /// activation within the same turn.
    pub fn activate_construct(&mut self, card_name: &str) -> EngineResult<()> {
        if !self.constructs.iter().any(|name| name == card_name) {
            return Err(EngineError::ConstructNotInPlay(card_name.to_string()));
        }
        if !self.activated_this_turn.insert(card_name.to_string()) {
            return Err(EngineError::ConstructAlreadyActivated(
                card_name.to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the named construct has been activated this turn.
    #[must_use]
    pub fn construct_activated(&self, card_name: &str) -> bool {
        self.activated_this_turn.contains(card_name)
    }

    /// End-of-turn reset: pools back to zero, one-shot bonuses cleared,
    /// construct activations forgotten. Zones and the move log are
    /// untouched.
    pub fn end_turn(&mut self) {
        self.power_remaining = 0;
        self.runes_remaining = 0;
        self.honor_for_lifebound_hero = 0;
        self.honor_for_defeating_monster = 0;
        self.activated_this_turn.clear();
    }
}
