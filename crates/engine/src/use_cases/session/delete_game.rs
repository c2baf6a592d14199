use std::sync::Arc;

use wordgrid_domain::GameId;

use crate::infrastructure::locks::GameLocks;
use crate::infrastructure::ports::{GameStore, RepoError};

/// Remove a game. Its lock entry goes once the last holder lets go.
pub struct DeleteGame {
    games: Arc<dyn GameStore>,
    locks: Arc<GameLocks>,
}

impl DeleteGame {
    pub fn new(games: Arc<dyn GameStore>, locks: Arc<GameLocks>) -> Self {
        Self { games, locks }
    }

    /// `user_id` is recorded for audit only; any caller may delete any game.
    pub async fn execute(&self, user_id: &str, game_id: GameId) -> Result<(), DeleteGameError> {
        let _guard = self.locks.acquire(game_id).await;

        match self.games.delete(game_id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Err(DeleteGameError::NotFound(game_id)),
            Err(e) => return Err(e.into()),
        }

        tracing::info!(game_id = %game_id, user_id = %user_id, "Deleted game");
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeleteGameError {
    #[error("Game not found: {0}")]
    NotFound(GameId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
