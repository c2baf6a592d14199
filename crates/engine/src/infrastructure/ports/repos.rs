//! Repository port traits for storage access.

use async_trait::async_trait;
use wordgrid_domain::{Game, GameId, GameUpdate, LengthCategory, Play, PlayKey, Word};

use super::error::RepoError;

// =============================================================================
// Game Storage
// =============================================================================

/// Persistent record of every live game.
///
/// `get`, `update`, `append_play` and `delete` return `RepoError::NotFound`
/// for an id the store does not hold.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create(&self, game: &Game) -> Result<(), RepoError>;
    async fn get(&self, id: GameId) -> Result<Game, RepoError>;

    /// Apply a partial change set in one write.
    async fn update(&self, id: GameId, update: GameUpdate) -> Result<(), RepoError>;

    /// Append to the play history and return the key the play was stored under.
    async fn append_play(&self, id: GameId, play: &Play) -> Result<PlayKey, RepoError>;

    /// Append `play` and apply `update` as one write. Either both land or
    /// neither does.
    async fn record_play(
        &self,
        id: GameId,
        play: &Play,
        update: GameUpdate,
    ) -> Result<PlayKey, RepoError>;

    async fn delete(&self, id: GameId) -> Result<(), RepoError>;
}

// =============================================================================
// Word Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Pick a random word of the given length category.
    ///
    /// Returns `RepoError::NotFound` if the category is unknown or empty.
    async fn select_random(&self, category: LengthCategory) -> Result<Word, RepoError>;
}
