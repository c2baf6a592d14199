//! Wordgrid Domain - core game types and invariants.
//!
//! Pure data and rules with no I/O. Randomness enters through closures so
//! callers decide where it comes from.

pub mod board;
pub mod board_state;
pub mod direction;
pub mod error;
pub mod game;
pub mod ids;
pub mod play;
pub mod word;

pub use board::{BoardGrid, BoardLayout, LayoutCounts, SamplingMode};
pub use board_state::aggregate_tiles;
pub use direction::PlayDirection;
pub use error::DomainError;
pub use game::{
    Game, GameUpdate, PlayHistory, DEFAULT_MISSING_LETTER_INDEX, DEFAULT_ROUND_TIME_SECONDS,
};
pub use ids::{GameId, PlayKey, PlayerId};
pub use play::{Play, TileLocation};
pub use word::{LengthCategory, Word};
