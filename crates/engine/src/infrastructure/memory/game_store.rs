//! Game store backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use wordgrid_domain::{Game, GameId, GameUpdate, Play, PlayKey};

use crate::infrastructure::ports::{GameStore, RepoError};

/// Games keyed by id. Nothing expires; a game lives until deleted.
#[derive(Default)]
pub struct InMemoryGameStore {
    games: DashMap<GameId, Game>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn create(&self, game: &Game) -> Result<(), RepoError> {
        use dashmap::mapref::entry::Entry;

        match self.games.entry(game.id()) {
            Entry::Occupied(_) => Err(RepoError::constraint(format!(
                "Game {} already exists",
                game.id()
            ))),
            Entry::Vacant(slot) => {
                slot.insert(game.clone());
                Ok(())
            }
        }
    }

    async fn get(&self, id: GameId) -> Result<Game, RepoError> {
        self.games
            .get(&id)
            .map(|game| game.clone())
            .ok_or_else(|| RepoError::not_found("Game", id))
    }

    async fn update(&self, id: GameId, update: GameUpdate) -> Result<(), RepoError> {
        let mut game = self
            .games
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Game", id))?;
        game.apply(update);
        Ok(())
    }

    async fn append_play(&self, id: GameId, play: &Play) -> Result<PlayKey, RepoError> {
        let mut game = self
            .games
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Game", id))?;
        Ok(game.append_play(play))
    }

    async fn record_play(
        &self,
        id: GameId,
        play: &Play,
        update: GameUpdate,
    ) -> Result<PlayKey, RepoError> {
        let mut game = self
            .games
            .get_mut(&id)
            .ok_or_else(|| RepoError::not_found("Game", id))?;
        let key = game.append_play(play);
        game.apply(update);
        Ok(key)
    }

    async fn delete(&self, id: GameId) -> Result<(), RepoError> {
        self.games
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::not_found("Game", id))
    }
}
