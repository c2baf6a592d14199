//! Per-game mutual exclusion.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use wordgrid_domain::GameId;

/// Registry of one async mutex per game.
///
/// Holders of the same game's lock run one at a time; different games never
/// contend. An entry lives only while some task holds or waits for it.
#[derive(Default)]
pub struct GameLocks {
    locks: DashMap<GameId, Arc<Mutex<()>>>,
}

impl GameLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`.
    pub async fn acquire(&self, id: GameId) -> GameLockGuard<'_> {
        let lock = self.locks.entry(id).or_default().clone();
        let guard = lock.lock_owned().await;
        GameLockGuard {
            locks: self,
            id,
            guard: Some(guard),
        }
    }

    pub fn len(&self) -> usize {
        self.locks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.is_empty()
    }
}

/// Exclusive access to one game. Dropping it releases the lock and evicts
/// the entry when no other task is queued on it.
pub struct GameLockGuard<'a> {
    locks: &'a GameLocks,
    id: GameId,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for GameLockGuard<'_> {
    fn drop(&mut self) {
        // Release first so only the registry and queued waiters still count.
        drop(self.guard.take());
        self.locks
            .locks
            .remove_if(&self.id, |_, lock| Arc::strong_count(lock) == 1);
    }
}
