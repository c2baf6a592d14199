//! Deadline wrapper for any game store.
//!
//! Wraps a GameStore implementation so that no call waits longer than the
//! configured bound. An expired call becomes `RepoError::Timeout`.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use wordgrid_domain::{Game, GameId, GameUpdate, Play, PlayKey};

use crate::infrastructure::ports::{GameStore, RepoError};

pub struct TimedGameStore {
    inner: Arc<dyn GameStore>,
    timeout: Duration,
}

impl TimedGameStore {
    pub fn new(inner: Arc<dyn GameStore>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T>(
        &self,
        operation: &'static str,
        call: impl Future<Output = Result<T, RepoError>>,
    ) -> Result<T, RepoError> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    operation,
                    timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                    "Game store call timed out"
                );
                Err(RepoError::timeout(operation))
            }
        }
    }
}

#[async_trait]
impl GameStore for TimedGameStore {
    async fn create(&self, game: &Game) -> Result<(), RepoError> {
        self.bounded("create", self.inner.create(game)).await
    }

    async fn get(&self, id: GameId) -> Result<Game, RepoError> {
        self.bounded("get", self.inner.get(id)).await
    }

    async fn update(&self, id: GameId, update: GameUpdate) -> Result<(), RepoError> {
        self.bounded("update", self.inner.update(id, update)).await
    }

    async fn append_play(&self, id: GameId, play: &Play) -> Result<PlayKey, RepoError> {
        self.bounded("append_play", self.inner.append_play(id, play)).await
    }

    async fn record_play(
        &self,
        id: GameId,
        play: &Play,
        update: GameUpdate,
    ) -> Result<PlayKey, RepoError> {
        self.bounded("record_play", self.inner.record_play(id, play, update))
            .await
    }

    async fn delete(&self, id: GameId) -> Result<(), RepoError> {
        self.bounded("delete", self.inner.delete(id)).await
    }
}
