//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    config::AppConfig,
    locks::GameLocks,
    ports::{GameStore, RandomPort, WordStore, WordValidator},
    timed_store::TimedGameStore,
};
use crate::use_cases;
use crate::use_cases::play::{FixedMissingLetter, FixedScore};
use crate::use_cases::session::GameSettings;

/// Main application state.
///
/// Holds configuration, ports and use cases.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub config: AppConfig,
    pub repositories: Repositories,
    pub use_cases: UseCases,
}

/// Container for the injected ports.
///
/// All fields are `Arc<dyn PortTrait>`, port traits injected directly.
pub struct Repositories {
    pub games: Arc<dyn GameStore>,
    pub words: Arc<dyn WordStore>,
    pub validator: Arc<dyn WordValidator>,
}

/// Container for all use cases.
pub struct UseCases {
    pub session: use_cases::SessionUseCases,
    pub play: use_cases::PlayUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    ///
    /// Every game store call is bounded by `config.store_timeout`.
    pub fn new(
        config: AppConfig,
        games: Arc<dyn GameStore>,
        words: Arc<dyn WordStore>,
        validator: Arc<dyn WordValidator>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let games: Arc<dyn GameStore> = Arc::new(TimedGameStore::new(games, config.store_timeout));
        let locks = Arc::new(GameLocks::new());

        let select_word = Arc::new(use_cases::word::SelectWord::new(words.clone()));

        let session = use_cases::SessionUseCases::new(
            Arc::new(use_cases::session::CreateGame::new(
                games.clone(),
                select_word,
                random,
                GameSettings::from_config(&config),
            )),
            Arc::new(use_cases::session::DeleteGame::new(
                games.clone(),
                locks.clone(),
            )),
        );

        let play = use_cases::PlayUseCases::new(Arc::new(use_cases::play::SubmitPlay::new(
            games.clone(),
            validator.clone(),
            Arc::new(FixedScore(config.play_score)),
            Arc::new(FixedMissingLetter(config.next_missing_letter_index)),
            locks,
            config.validator_timeout,
        )));

        Self {
            config,
            repositories: Repositories {
                games,
                words,
                validator,
            },
            use_cases: UseCases {
                session,
                play,
            },
        }
    }
}
