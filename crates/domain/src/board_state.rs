//! Client-visible board state folded from a game's play history.

use crate::play::{Play, TileLocation};

/// Flatten the tiles of `plays`, in order, into one board.
///
/// Exactly one tile comes back selected: the last tile of the most recent
/// play that placed any tiles. Selection flags carried in by the plays
/// themselves are discarded.
pub fn aggregate_tiles<'a>(plays: impl IntoIterator<Item = &'a Play>) -> Vec<TileLocation> {
    let mut tiles: Vec<TileLocation> = plays
        .into_iter()
        .flat_map(|play| play.tile_locations.iter().cloned())
        .collect();

    for tile in &mut tiles {
        tile.is_selected = false;
    }
    if let Some(last) = tiles.last_mut() {
        last.is_selected = true;
    }
    tiles
}
