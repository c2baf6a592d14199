use serde::{Deserialize, Serialize};

/// A placed letter as clients send and receive it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TileLocationData {
    pub index: u32,
    pub letter: String,
    pub area_name: String,
    pub user_id: String,
    pub is_selected: bool,
}

/// Body of `POST /game/submit`, also the shape of each stored play.
///
/// Every field is optional on input so that the server, not the decoder,
/// decides what a missing field means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayRequest {
    pub word: String,
    pub game_id: String,
    pub user_id: String,
    pub tile_locations: Vec<TileLocationData>,
    pub definition: String,
    pub play_direction: String,
    pub play_index: u32,
}

/// Optional body of `/new`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewGameRequest {
    /// Two participant ids; the server's configured pair is used when absent.
    pub players_ids: Option<Vec<String>>,
}

/// Body of `POST /game/delete`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteRequest {
    pub user_id: String,
    pub game_id: String,
}
