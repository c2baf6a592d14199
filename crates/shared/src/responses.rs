use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::requests::{PlayRequest, TileLocationData};

/// A game as returned by `/new`.
///
/// Note the capitalized `Definition` key; clients depend on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResponse {
    pub players_ids: [String; 2],
    pub word: String,
    #[serde(rename = "Definition")]
    pub definition: String,
    pub missing_letter_index: i32,
    pub game_id: String,
    pub round_time: u32,
    pub play_index: u32,
    pub player_turn_id: String,
    /// Keyed by play key; keys sort in submission order.
    pub plays: BTreeMap<String, PlayRequest>,
    pub leader_id: String,
    pub play_direction: String,
    pub barriers: Vec<String>,
    pub obstacles: Vec<String>,
    pub rewards: Vec<String>,
}

/// Result of `POST /game/submit`, for accepted and rejected words alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayResponse {
    pub score: u32,
    pub word: String,
    pub game_id: String,
    pub missing_letter_index: i32,
    pub play_index: u32,
    pub player_turn_id: String,
    pub word_is_good: bool,
    pub play_direction: String,
    pub leader_id: String,
    pub tile_locations: Vec<TileLocationData>,
    #[serde(rename = "Definition")]
    pub definition: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
