//! Session use cases.
//!
//! Creating and tearing down games. Play-by-play progression lives in `play`.

use std::sync::Arc;

mod create_game;
mod delete_game;

pub use create_game::{CreateGame, CreateGameError, GameSettings};
pub use delete_game::{DeleteGame, DeleteGameError};

/// Container for session use cases.
pub struct SessionUseCases {
    pub create_game: Arc<CreateGame>,
    pub delete_game: Arc<DeleteGame>,
}

impl SessionUseCases {
    pub fn new(create_game: Arc<CreateGame>, delete_game: Arc<DeleteGame>) -> Self {
        Self {
            create_game,
            delete_game,
        }
    }
}
