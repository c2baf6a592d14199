use std::sync::Arc;

use wordgrid_domain::{
    BoardGrid, BoardLayout, DomainError, Game, GameId, LayoutCounts, LengthCategory, PlayerId,
    SamplingMode, DEFAULT_MISSING_LETTER_INDEX, DEFAULT_ROUND_TIME_SECONDS,
};

use crate::infrastructure::config::AppConfig;
use crate::infrastructure::ports::{GameStore, RandomPort, RepoError};
use crate::use_cases::word::{SelectWord, SelectWordError};

/// Per-game constants applied at creation.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub category: LengthCategory,
    pub round_time_seconds: u32,
    pub initial_missing_letter_index: i32,
    pub grid: BoardGrid,
    pub layout_counts: LayoutCounts,
    pub sampling: SamplingMode,
    /// Cells never handed out as barriers, obstacles or rewards.
    pub excluded_cells: Vec<String>,
}

impl GameSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            category: config.word_category,
            round_time_seconds: config.round_time_seconds,
            initial_missing_letter_index: config.initial_missing_letter_index,
            grid: BoardGrid::standard(),
            layout_counts: config.layout_counts,
            sampling: config.layout_sampling,
            excluded_cells: config.home_cells.clone(),
        }
    }

    /// Check that the layout counts fit the grid.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` when no layout could ever be drawn.
    pub fn validate(&self) -> Result<(), DomainError> {
        BoardLayout::generate(
            self.grid.cells(),
            self.layout_counts,
            self.sampling,
            &self.excluded_cells,
            |min, _| min,
        )
        .map(|_| ())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            category: LengthCategory::Seven,
            round_time_seconds: DEFAULT_ROUND_TIME_SECONDS,
            initial_missing_letter_index: DEFAULT_MISSING_LETTER_INDEX,
            grid: BoardGrid::standard(),
            layout_counts: LayoutCounts::default(),
            sampling: SamplingMode::default(),
            excluded_cells: Vec::new(),
        }
    }
}

/// Start a game: pick a word, draw a layout, persist.
pub struct CreateGame {
    games: Arc<dyn GameStore>,
    select_word: Arc<SelectWord>,
    random: Arc<dyn RandomPort>,
    settings: GameSettings,
}

impl CreateGame {
    pub fn new(
        games: Arc<dyn GameStore>,
        select_word: Arc<SelectWord>,
        random: Arc<dyn RandomPort>,
        settings: GameSettings,
    ) -> Self {
        Self {
            games,
            select_word,
            random,
            settings,
        }
    }

    pub async fn execute(&self, players: [PlayerId; 2]) -> Result<Game, CreateGameError> {
        if players[0] == players[1] {
            return Err(CreateGameError::InvalidPlayers(format!(
                "Both seats name player {}",
                players[0]
            )));
        }

        let id = GameId::from_uuid(self.random.gen_uuid());
        let word = self.select_word.execute(self.settings.category).await?;

        let layout = BoardLayout::generate(
            self.settings.grid.cells(),
            self.settings.layout_counts,
            self.settings.sampling,
            &self.settings.excluded_cells,
            |min, max| self.random.gen_range(min, max),
        )
        .map_err(CreateGameError::Layout)?;

        let game = Game::new(id, players, word, layout)
            .map_err(|e| CreateGameError::InvalidPlayers(e.to_string()))?
            .with_round_time(self.settings.round_time_seconds)
            .with_missing_letter_index(self.settings.initial_missing_letter_index);

        self.games.create(&game).await?;

        tracing::info!(
            game_id = %game.id(),
            player_one = %game.player_ids()[0],
            player_two = %game.player_ids()[1],
            category = %self.settings.category,
            "Created game"
        );
        Ok(game)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CreateGameError {
    #[error("Invalid players: {0}")]
    InvalidPlayers(String),
    #[error(transparent)]
    Word(#[from] SelectWordError),
    #[error("Board layout failed: {0}")]
    Layout(DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockGameStore, MockWordStore};
    use crate::infrastructure::random::{FixedRandom, SequenceRandom};
    use wordgrid_domain::{PlayDirection, Word};

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    fn word_store(word: &'static str) -> Arc<SelectWord> {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .returning(move |_| Ok(Word::new(word).with_definition("def")));
        Arc::new(SelectWord::new(Arc::new(words)))
    }

    fn use_case(games: MockGameStore, random: Arc<dyn RandomPort>) -> CreateGame {
        CreateGame::new(
            Arc::new(games),
            word_store("example"),
            random,
            GameSettings::default(),
        )
    }

    #[tokio::test]
    async fn creates_and_persists_fresh_game() {
        let mut games = MockGameStore::new();
        games
            .expect_create()
            .withf(|game| game.play_index() == 0 && game.plays().is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let random = Arc::new(SequenceRandom::new((0..200).rev().collect()));
        let game = use_case(games, random)
            .execute([pid("P1"), pid("P2")])
            .await
            .unwrap();

        assert_eq!(game.word().text, "example");
        assert_eq!(game.word().definition, "def");
        assert_eq!(game.play_direction(), PlayDirection::Vertical);
        assert_eq!(game.missing_letter_index(), 4);
        assert_eq!(game.round_time_seconds(), 120);
        assert_eq!(game.player_turn_id(), &pid("P1"));
        assert!(game.leader_id().is_none());

        let layout = game.layout();
        assert_eq!(layout.barriers.len(), 9);
        assert_eq!(layout.obstacles.len(), 7);
        assert_eq!(layout.rewards.len(), 4);
        assert!(layout.is_disjoint());
    }

    #[tokio::test]
    async fn uses_injected_uuid_as_game_id() {
        let mut games = MockGameStore::new();
        games.expect_create().returning(|_| Ok(()));

        let random = FixedRandom {
            value: 0,
            uuid: uuid::Uuid::from_u128(42),
        };
        let game = use_case(games, Arc::new(random))
            .execute([pid("P1"), pid("P2")])
            .await
            .unwrap();
        assert_eq!(game.id().to_uuid(), uuid::Uuid::from_u128(42));
    }

    #[tokio::test]
    async fn when_players_repeat_returns_invalid_players() {
        let mut games = MockGameStore::new();
        games.expect_create().times(0);

        let err = use_case(games, Arc::new(FixedRandom::new(0)))
            .execute([pid("P1"), pid("P1")])
            .await
            .unwrap_err();
        assert!(matches!(err, CreateGameError::InvalidPlayers(_)));
    }

    #[tokio::test]
    async fn when_no_word_returns_word_error() {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .returning(|c| Err(RepoError::not_found("Word category", c)));
        let mut games = MockGameStore::new();
        games.expect_create().times(0);

        let err = CreateGame::new(
            Arc::new(games),
            Arc::new(SelectWord::new(Arc::new(words))),
            Arc::new(FixedRandom::new(0)),
            GameSettings::default(),
        )
        .execute([pid("P1"), pid("P2")])
        .await
        .unwrap_err();
        assert!(matches!(
            err,
            CreateGameError::Word(SelectWordError::Unresolved(_))
        ));
    }

    #[tokio::test]
    async fn when_store_fails_returns_repo_error() {
        let mut games = MockGameStore::new();
        games
            .expect_create()
            .returning(|_| Err(RepoError::database("create", "offline")));

        let err = use_case(games, Arc::new(FixedRandom::new(0)))
            .execute([pid("P1"), pid("P2")])
            .await
            .unwrap_err();
        assert!(matches!(err, CreateGameError::Repo(_)));
    }

    #[tokio::test]
    async fn excluded_cells_are_never_drawn() {
        let mut games = MockGameStore::new();
        games.expect_create().returning(|_| Ok(()));

        let settings = GameSettings {
            excluded_cells: vec!["a1".into(), "a2".into()],
            ..GameSettings::default()
        };
        // Always rolling the lowest index would pick a1 first without exclusion.
        let game = CreateGame::new(
            Arc::new(games),
            word_store("example"),
            Arc::new(FixedRandom::new(0)),
            settings,
        )
        .execute([pid("P1"), pid("P2")])
        .await
        .unwrap();

        let layout = game.layout();
        let all: Vec<_> = layout
            .barriers
            .iter()
            .chain(&layout.obstacles)
            .chain(&layout.rewards)
            .collect();
        assert!(!all.iter().any(|c| *c == "a1" || *c == "a2"));
    }

    #[test]
    fn settings_validation_catches_oversubscribed_grid() {
        let settings = GameSettings {
            grid: BoardGrid::new(2, 2).unwrap(),
            ..GameSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(DomainError::Constraint(_))
        ));
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn settings_follow_config() {
        let config = AppConfig::from_lookup(|key| match key {
            "WORD_CATEGORY" => Some("five".into()),
            "ROUND_TIME_SECONDS" => Some("60".into()),
            "HOME_CELLS" => Some("a1,m13".into()),
            _ => None,
        });
        let settings = GameSettings::from_config(&config);
        assert_eq!(settings.category, LengthCategory::Five);
        assert_eq!(settings.round_time_seconds, 60);
        assert_eq!(settings.excluded_cells, vec!["a1", "m13"]);
    }
}
