//! Plays and the tiles they occupy.

use serde::{Deserialize, Serialize};

use crate::direction::PlayDirection;
use crate::ids::{GameId, PlayerId};

/// One letter of a play placed on a named grid cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileLocation {
    /// Position within the play's letter sequence.
    pub index: u32,
    pub letter: String,
    /// Grid cell name, e.g. `"c7"`.
    pub area_name: String,
    pub user_id: String,
    /// Client highlight flag. Only the board-state aggregator sets it.
    #[serde(default)]
    pub is_selected: bool,
}

impl TileLocation {
    pub fn new(
        index: u32,
        letter: impl Into<String>,
        area_name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            index,
            letter: letter.into(),
            area_name: area_name.into(),
            user_id: user_id.into(),
            is_selected: false,
        }
    }
}

/// A word submitted by a player.
///
/// `definition`, `play_direction` and `play_index` are the submitter's view
/// of the game at the time of submission, stored as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub word: String,
    pub game_id: GameId,
    pub user_id: PlayerId,
    pub tile_locations: Vec<TileLocation>,
    pub definition: String,
    pub play_direction: PlayDirection,
    pub play_index: u32,
}

impl Play {
    pub fn new(game_id: GameId, user_id: PlayerId, word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            game_id,
            user_id,
            tile_locations: Vec::new(),
            definition: String::new(),
            play_direction: PlayDirection::default(),
            play_index: 0,
        }
    }

    pub fn with_tiles(mut self, tiles: Vec<TileLocation>) -> Self {
        self.tile_locations = tiles;
        self
    }

    pub fn with_direction(mut self, direction: PlayDirection) -> Self {
        self.play_direction = direction;
        self
    }

    pub fn with_play_index(mut self, play_index: u32) -> Self {
        self.play_index = play_index;
        self
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    /// Copy of this play as it should be stored: no tile carries a selection.
    pub fn for_storage(&self) -> Self {
        let mut play = self.clone();
        for tile in &mut play.tile_locations {
            tile.is_selected = false;
        }
        play
    }

    /// Number of letters in the submitted word.
    pub fn letter_count(&self) -> usize {
        self.word.chars().count()
    }
}
