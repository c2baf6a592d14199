//! Game aggregate - one two-player word-placement session
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: state changes go through `append_play` and `apply`
//! - **Valid by construction**: `new()` rejects a seat list that repeats a player
//! - **Builder pattern**: fluent setters for the per-round constants

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::board::BoardLayout;
use crate::board_state::aggregate_tiles;
use crate::direction::PlayDirection;
use crate::error::DomainError;
use crate::ids::{GameId, PlayKey, PlayerId};
use crate::play::{Play, TileLocation};
use crate::word::Word;

/// Seconds on the clock for a round unless configured otherwise.
pub const DEFAULT_ROUND_TIME_SECONDS: u32 = 120;

/// Hidden letter position of a fresh game (the fifth letter).
pub const DEFAULT_MISSING_LETTER_INDEX: i32 = 4;

// ============================================================================
// PlayHistory
// ============================================================================

/// Accepted plays in submission order.
///
/// Each play is keyed by a [`PlayKey`] derived from its sequence number, so
/// ordering survives a trip through any keyed document store: the history
/// serializes as a map and deserializes sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayHistory {
    entries: Vec<(PlayKey, Play)>,
}

impl PlayHistory {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayKey, &Play)> {
        self.entries.iter().map(|(k, p)| (k, p))
    }

    pub fn plays(&self) -> impl Iterator<Item = &Play> {
        self.entries.iter().map(|(_, p)| p)
    }

    pub fn last(&self) -> Option<&Play> {
        self.entries.last().map(|(_, p)| p)
    }

    /// Append a play and return the key it was stored under.
    pub fn push(&mut self, play: Play) -> PlayKey {
        let sequence = u32::try_from(self.entries.len() + 1).unwrap_or(u32::MAX);
        let key = PlayKey::from_sequence(sequence);
        self.entries.push((key.clone(), play));
        key
    }

    /// Build a history from keyed entries in any order.
    pub fn from_entries(entries: impl IntoIterator<Item = (PlayKey, Play)>) -> Self {
        let mut entries: Vec<_> = entries.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self { entries }
    }
}

impl Serialize for PlayHistory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, p)| (k, p)))
    }
}

impl<'de> Deserialize<'de> for PlayHistory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<PlayKey, Play>::deserialize(deserializer)?;
        Ok(Self::from_entries(map))
    }
}

// ============================================================================
// GameUpdate
// ============================================================================

/// Partial change set applied to a stored game in a single write.
///
/// `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameUpdate {
    pub play_direction: Option<PlayDirection>,
    pub play_index: Option<u32>,
    pub missing_letter_index: Option<i32>,
    pub player_turn_id: Option<PlayerId>,
    pub leader_id: Option<PlayerId>,
    pub scores: Option<[u32; 2]>,
}

impl GameUpdate {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

// ============================================================================
// Game
// ============================================================================

/// A game session between exactly two players.
///
/// # Invariants
///
/// - `player_ids` holds two distinct players
/// - after every accepted play `play_index == plays.len()`
/// - every accepted play flips `play_direction` exactly once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: GameId,
    player_ids: [PlayerId; 2],
    word: Word,
    missing_letter_index: i32,
    round_time_seconds: u32,
    play_index: u32,
    player_turn_id: PlayerId,
    plays: PlayHistory,
    leader_id: Option<PlayerId>,
    play_direction: PlayDirection,
    layout: BoardLayout,
    /// Running totals, aligned with `player_ids`.
    scores: [u32; 2],
}

impl Game {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Start a game. The first listed player moves first and the first play
    /// is laid vertically.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if both seats name the same player.
    pub fn new(
        id: GameId,
        player_ids: [PlayerId; 2],
        word: Word,
        layout: BoardLayout,
    ) -> Result<Self, DomainError> {
        if player_ids[0] == player_ids[1] {
            return Err(DomainError::validation(format!(
                "A game needs two distinct players, got {} twice",
                player_ids[0]
            )));
        }
        let player_turn_id = player_ids[0].clone();
        Ok(Self {
            id,
            player_ids,
            word,
            missing_letter_index: DEFAULT_MISSING_LETTER_INDEX,
            round_time_seconds: DEFAULT_ROUND_TIME_SECONDS,
            play_index: 0,
            player_turn_id,
            plays: PlayHistory::new(),
            leader_id: None,
            play_direction: PlayDirection::Vertical,
            layout,
            scores: [0, 0],
        })
    }

    pub fn with_round_time(mut self, seconds: u32) -> Self {
        self.round_time_seconds = seconds;
        self
    }

    pub fn with_missing_letter_index(mut self, index: i32) -> Self {
        self.missing_letter_index = index;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> GameId {
        self.id
    }

    #[inline]
    pub fn player_ids(&self) -> &[PlayerId; 2] {
        &self.player_ids
    }

    #[inline]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    pub fn missing_letter_index(&self) -> i32 {
        self.missing_letter_index
    }

    #[inline]
    pub fn round_time_seconds(&self) -> u32 {
        self.round_time_seconds
    }

    #[inline]
    pub fn play_index(&self) -> u32 {
        self.play_index
    }

    #[inline]
    pub fn player_turn_id(&self) -> &PlayerId {
        &self.player_turn_id
    }

    #[inline]
    pub fn plays(&self) -> &PlayHistory {
        &self.plays
    }

    #[inline]
    pub fn leader_id(&self) -> Option<&PlayerId> {
        self.leader_id.as_ref()
    }

    #[inline]
    pub fn play_direction(&self) -> PlayDirection {
        self.play_direction
    }

    #[inline]
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    #[inline]
    pub fn scores(&self) -> [u32; 2] {
        self.scores
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Play index the next accepted play will receive. Does not mutate.
    pub fn next_play_index(&self) -> u32 {
        self.play_index + 1
    }

    pub fn seat_of(&self, player: &PlayerId) -> Option<usize> {
        self.player_ids.iter().position(|p| p == player)
    }

    pub fn has_player(&self, player: &PlayerId) -> bool {
        self.seat_of(player).is_some()
    }

    pub fn score_of(&self, player: &PlayerId) -> u32 {
        self.seat_of(player).map_or(0, |seat| self.scores[seat])
    }

    /// Board tiles for the client, see [`aggregate_tiles`].
    pub fn board_tiles(&self) -> Vec<TileLocation> {
        aggregate_tiles(self.plays.plays())
    }

    /// Change set that follows an accepted play by `player` worth `score`.
    ///
    /// Flips the direction, advances the play index, hands the turn to the
    /// opponent and recomputes the leader. A tied score keeps the current
    /// leader.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `player` is not seated in this game.
    pub fn plan_accepted_play(
        &self,
        player: &PlayerId,
        score: u32,
        missing_letter_index: i32,
    ) -> Result<GameUpdate, DomainError> {
        let seat = self.seat_of(player).ok_or_else(|| {
            DomainError::validation(format!("Player {player} is not part of game {}", self.id))
        })?;
        let other = 1 - seat;

        let mut scores = self.scores;
        scores[seat] = scores[seat].saturating_add(score);

        let leader_id = match scores[seat].cmp(&scores[other]) {
            std::cmp::Ordering::Greater => Some(self.player_ids[seat].clone()),
            std::cmp::Ordering::Less => Some(self.player_ids[other].clone()),
            std::cmp::Ordering::Equal => self.leader_id.clone(),
        };

        Ok(GameUpdate {
            play_direction: Some(self.play_direction.toggled()),
            play_index: Some(self.next_play_index()),
            missing_letter_index: Some(missing_letter_index),
            player_turn_id: Some(self.player_ids[other].clone()),
            leader_id,
            scores: Some(scores),
        })
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Record an accepted play. Selection flags are not stored.
    pub fn append_play(&mut self, play: &Play) -> PlayKey {
        self.plays.push(play.for_storage())
    }

    pub fn apply(&mut self, update: GameUpdate) {
        if let Some(direction) = update.play_direction {
            self.play_direction = direction;
        }
        if let Some(index) = update.play_index {
            self.play_index = index;
        }
        if let Some(index) = update.missing_letter_index {
            self.missing_letter_index = index;
        }
        if let Some(turn) = update.player_turn_id {
            self.player_turn_id = turn;
        }
        if let Some(leader) = update.leader_id {
            self.leader_id = Some(leader);
        }
        if let Some(scores) = update.scores {
            self.scores = scores;
        }
    }
}
