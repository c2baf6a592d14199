//! Conversions between domain types and wire DTOs.

use wordgrid_domain::{Game, Play, PlayDirection, PlayerId, TileLocation};
use wordgrid_shared::{GameResponse, PlayRequest, PlayResponse, TileLocationData};

use crate::use_cases::play::{PlayResult, PlaySubmission};

pub fn tile_from_wire(tile: TileLocationData) -> TileLocation {
    TileLocation {
        index: tile.index,
        letter: tile.letter,
        area_name: tile.area_name,
        user_id: tile.user_id,
        is_selected: tile.is_selected,
    }
}

pub fn tile_to_wire(tile: &TileLocation) -> TileLocationData {
    TileLocationData {
        index: tile.index,
        letter: tile.letter.clone(),
        area_name: tile.area_name.clone(),
        user_id: tile.user_id.clone(),
        is_selected: tile.is_selected,
    }
}

pub fn submission_from_wire(request: PlayRequest) -> PlaySubmission {
    PlaySubmission {
        play_direction: PlayDirection::from(request.play_direction.as_str()),
        word: request.word,
        game_id: request.game_id,
        user_id: request.user_id,
        tile_locations: request.tile_locations.into_iter().map(tile_from_wire).collect(),
        definition: request.definition,
        play_index: request.play_index,
    }
}

/// A stored play in the same shape the client submitted it.
pub fn play_to_wire(play: &Play) -> PlayRequest {
    PlayRequest {
        word: play.word.clone(),
        game_id: play.game_id.to_string(),
        user_id: play.user_id.to_string(),
        tile_locations: play.tile_locations.iter().map(tile_to_wire).collect(),
        definition: play.definition.clone(),
        play_direction: play.play_direction.to_string(),
        play_index: play.play_index,
    }
}

pub fn game_to_wire(game: &Game) -> GameResponse {
    let layout = game.layout();
    GameResponse {
        players_ids: game.player_ids().clone().map(String::from),
        word: game.word().text.clone(),
        definition: game.word().definition.clone(),
        missing_letter_index: game.missing_letter_index(),
        game_id: game.id().to_string(),
        round_time: game.round_time_seconds(),
        play_index: game.play_index(),
        player_turn_id: game.player_turn_id().to_string(),
        plays: game
            .plays()
            .iter()
            .map(|(key, play)| (key.to_string(), play_to_wire(play)))
            .collect(),
        leader_id: player_or_empty(game.leader_id()),
        play_direction: game.play_direction().to_string(),
        barriers: layout.barriers.clone(),
        obstacles: layout.obstacles.clone(),
        rewards: layout.rewards.clone(),
    }
}

pub fn result_to_wire(result: PlayResult) -> PlayResponse {
    PlayResponse {
        score: result.score,
        word: result.word,
        game_id: result.game_id.to_string(),
        missing_letter_index: result.missing_letter_index,
        play_index: result.play_index,
        player_turn_id: result.player_turn_id.to_string(),
        word_is_good: result.word_is_good,
        play_direction: result.play_direction.to_string(),
        leader_id: player_or_empty(result.leader_id.as_ref()),
        tile_locations: result.tile_locations.iter().map(tile_to_wire).collect(),
        definition: result.definition,
    }
}

fn player_or_empty(player: Option<&PlayerId>) -> String {
    player.map(PlayerId::to_string).unwrap_or_default()
}
