//! Submit play - validate a word, score it and advance the game.
//!
//! A valid word is recorded under the game's lock in one store call that
//! appends the play and applies the [`GameUpdate`](wordgrid_domain::GameUpdate) carrying every turn-state
//! change. An invalid word never touches the store.

use std::sync::Arc;
use std::time::Duration;

use wordgrid_domain::{
    GameId, LengthCategory, Play, PlayDirection, PlayerId, TileLocation,
};

use super::policy::{MissingLetterPolicy, ScorePolicy};
use crate::infrastructure::locks::GameLocks;
use crate::infrastructure::ports::{GameStore, RepoError, WordCheck, WordValidator};

/// A play as submitted, before any of it is trusted.
#[derive(Debug, Clone, Default)]
pub struct PlaySubmission {
    pub word: String,
    pub game_id: String,
    pub user_id: String,
    pub tile_locations: Vec<TileLocation>,
    pub definition: String,
    pub play_direction: PlayDirection,
    pub play_index: u32,
}

/// State the client shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayResult {
    pub score: u32,
    pub word: String,
    pub game_id: GameId,
    pub missing_letter_index: i32,
    pub play_index: u32,
    pub player_turn_id: PlayerId,
    pub word_is_good: bool,
    pub play_direction: PlayDirection,
    pub leader_id: Option<PlayerId>,
    pub tile_locations: Vec<TileLocation>,
    pub definition: String,
}

impl PlayResult {
    /// Echo of a refused play. The submitter stands in for turn and leader.
    fn rejected(play: &Play) -> Self {
        let letters = i32::try_from(play.letter_count()).unwrap_or(i32::MAX);
        Self {
            score: 0,
            word: play.word.clone(),
            game_id: play.game_id,
            missing_letter_index: letters - 1,
            play_index: play.play_index,
            player_turn_id: play.user_id.clone(),
            word_is_good: false,
            play_direction: play.play_direction,
            leader_id: Some(play.user_id.clone()),
            tile_locations: play.tile_locations.clone(),
            definition: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    Accepted(PlayResult),
    Rejected(PlayResult),
}

impl PlayOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn result(&self) -> &PlayResult {
        match self {
            Self::Accepted(result) | Self::Rejected(result) => result,
        }
    }

    pub fn into_result(self) -> PlayResult {
        match self {
            Self::Accepted(result) | Self::Rejected(result) => result,
        }
    }
}

pub struct SubmitPlay {
    games: Arc<dyn GameStore>,
    validator: Arc<dyn WordValidator>,
    score: Arc<dyn ScorePolicy>,
    missing_letter: Arc<dyn MissingLetterPolicy>,
    locks: Arc<GameLocks>,
    validator_timeout: Duration,
}

impl SubmitPlay {
    pub fn new(
        games: Arc<dyn GameStore>,
        validator: Arc<dyn WordValidator>,
        score: Arc<dyn ScorePolicy>,
        missing_letter: Arc<dyn MissingLetterPolicy>,
        locks: Arc<GameLocks>,
        validator_timeout: Duration,
    ) -> Self {
        Self {
            games,
            validator,
            score,
            missing_letter,
            locks,
            validator_timeout,
        }
    }

    pub async fn execute(&self, submission: PlaySubmission) -> Result<PlayOutcome, PlayError> {
        let play = Self::parse(submission)?;
        let game_id = play.game_id;

        let score = self.score.score(&play.word);
        let check = self.validate(&play.word).await?;
        if !check.valid {
            tracing::debug!(
                game_id = %game_id,
                user_id = %play.user_id,
                word = %play.word,
                "Rejected play"
            );
            return Ok(PlayOutcome::Rejected(PlayResult::rejected(&play)));
        }

        let _guard = self.locks.acquire(game_id).await;

        let mut projected = self
            .games
            .get(game_id)
            .await
            .map_err(|e| PlayError::from_repo(game_id, e))?;
        if !projected.has_player(&play.user_id) {
            return Err(PlayError::MalformedInput(format!(
                "Player {} is not part of game {game_id}",
                play.user_id
            )));
        }

        // Plan against the game as it reads once this play is in its history.
        projected.append_play(&play);
        let missing_letter_index = self.missing_letter.next_missing_letter(&projected);
        let update = projected
            .plan_accepted_play(&play.user_id, score, missing_letter_index)
            .map_err(|e| PlayError::MalformedInput(e.to_string()))?;

        let result = PlayResult {
            score,
            word: play.word.clone(),
            game_id,
            missing_letter_index,
            play_index: update.play_index.unwrap_or_else(|| projected.next_play_index()),
            player_turn_id: update
                .player_turn_id
                .clone()
                .unwrap_or_else(|| projected.player_turn_id().clone()),
            word_is_good: true,
            play_direction: update
                .play_direction
                .unwrap_or_else(|| projected.play_direction().toggled()),
            leader_id: update
                .leader_id
                .clone()
                .or_else(|| projected.leader_id().cloned()),
            tile_locations: projected.board_tiles(),
            definition: check.definition,
        };

        self.games
            .record_play(game_id, &play, update)
            .await
            .map_err(|e| PlayError::from_repo(game_id, e))?;

        tracing::info!(
            game_id = %game_id,
            user_id = %play.user_id,
            play_index = result.play_index,
            direction = %result.play_direction,
            "Accepted play"
        );
        Ok(PlayOutcome::Accepted(result))
    }

    fn parse(submission: PlaySubmission) -> Result<Play, PlayError> {
        let raw_id = submission.game_id.trim();
        if raw_id.is_empty() {
            return Err(PlayError::MalformedInput("gameId is required".into()));
        }
        let game_id: GameId = raw_id
            .parse()
            .map_err(|e: wordgrid_domain::DomainError| PlayError::MalformedInput(e.to_string()))?;
        let user_id = PlayerId::new(submission.user_id)
            .map_err(|_| PlayError::MalformedInput("userId is required".into()))?;

        Ok(Play::new(game_id, user_id, submission.word)
            .with_tiles(submission.tile_locations)
            .with_definition(submission.definition)
            .with_direction(submission.play_direction)
            .with_play_index(submission.play_index))
    }

    /// Words outside every length bucket are invalid without asking.
    async fn validate(&self, word: &str) -> Result<WordCheck, PlayError> {
        let Some(category) = LengthCategory::for_word(word) else {
            return Ok(WordCheck::invalid());
        };

        tokio::time::timeout(self.validator_timeout, self.validator.check(word, category))
            .await
            .map_err(|_| {
                tracing::warn!(
                    word = %word,
                    timeout_ms = u64::try_from(self.validator_timeout.as_millis()).unwrap_or(u64::MAX),
                    "Word validation timed out"
                );
                PlayError::ValidationTimeout(self.validator_timeout)
            })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("Malformed play: {0}")]
    MalformedInput(String),
    #[error("Game not found: {0}")]
    NotFound(GameId),
    #[error("Persistence error: {0}")]
    Persistence(RepoError),
    #[error("Word validation timed out after {0:?}")]
    ValidationTimeout(Duration),
}

impl PlayError {
    fn from_repo(game_id: GameId, e: RepoError) -> Self {
        if e.is_not_found() {
            Self::NotFound(game_id)
        } else {
            Self::Persistence(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryGameStore;
    use crate::infrastructure::ports::{MockGameStore, MockWordValidator};
    use crate::use_cases::play::{FixedMissingLetter, FixedScore};
    use wordgrid_domain::{BoardLayout, Game, GameUpdate, PlayKey, Word};

    fn pid(s: &str) -> PlayerId {
        PlayerId::new(s).unwrap()
    }

    fn game() -> Game {
        Game::new(
            GameId::new(),
            [pid("P1"), pid("P2")],
            Word::new("example"),
            BoardLayout::default(),
        )
        .unwrap()
    }

    fn accepting_validator() -> MockWordValidator {
        let mut validator = MockWordValidator::new();
        validator
            .expect_check()
            .returning(|word, _| WordCheck::valid(format!("meaning of {word}")));
        validator
    }

    fn rejecting_validator() -> MockWordValidator {
        let mut validator = MockWordValidator::new();
        validator
            .expect_check()
            .returning(|_, _| WordCheck::invalid());
        validator
    }

    fn use_case(games: Arc<dyn GameStore>, validator: MockWordValidator) -> SubmitPlay {
        SubmitPlay::new(
            games,
            Arc::new(validator),
            Arc::new(FixedScore(10)),
            Arc::new(FixedMissingLetter(2)),
            Arc::new(GameLocks::new()),
            Duration::from_secs(5),
        )
    }

    fn submission(game_id: GameId, user: &str, word: &str, cells: &[&str]) -> PlaySubmission {
        PlaySubmission {
            word: word.to_string(),
            game_id: game_id.to_string(),
            user_id: user.to_string(),
            tile_locations: cells
                .iter()
                .zip(word.chars())
                .enumerate()
                .map(|(i, (cell, letter))| {
                    TileLocation::new(i as u32, letter.to_string(), *cell, user)
                })
                .collect(),
            definition: String::new(),
            play_direction: PlayDirection::Vertical,
            play_index: 0,
        }
    }

    async fn seeded_store() -> (Arc<InMemoryGameStore>, GameId) {
        let store = Arc::new(InMemoryGameStore::new());
        let game = game();
        store.create(&game).await.unwrap();
        (store, game.id())
    }

    #[tokio::test]
    async fn accepted_play_advances_game() {
        let (store, game_id) = seeded_store().await;
        let submit = use_case(store.clone(), accepting_validator());

        let outcome = submit
            .execute(submission(
                game_id,
                "P1",
                "hello",
                &["a1", "a2", "a3", "a4", "a5"],
            ))
            .await
            .unwrap();

        assert!(outcome.is_accepted());
        let result = outcome.into_result();
        assert_eq!(result.score, 10);
        assert!(result.word_is_good);
        assert_eq!(result.play_index, 1);
        assert_eq!(result.play_direction, PlayDirection::Horizontal);
        assert_eq!(result.missing_letter_index, 2);
        assert_eq!(result.player_turn_id, pid("P2"));
        assert_eq!(result.leader_id, Some(pid("P1")));
        assert_eq!(result.definition, "meaning of hello");
        assert_eq!(result.tile_locations.len(), 5);
        assert!(result.tile_locations[4].is_selected);

        let stored = store.get(game_id).await.unwrap();
        assert_eq!(stored.play_index(), 1);
        assert_eq!(stored.plays().len(), 1);
        assert_eq!(stored.play_direction(), PlayDirection::Horizontal);
        assert_eq!(stored.missing_letter_index(), 2);
        assert_eq!(stored.score_of(&pid("P1")), 10);
    }

    #[tokio::test]
    async fn board_accumulates_across_plays() {
        let (store, game_id) = seeded_store().await;
        let submit = use_case(store.clone(), accepting_validator());

        submit
            .execute(submission(game_id, "P1", "hi", &["a1", "a2"]))
            .await
            .unwrap();
        let result = submit
            .execute(submission(game_id, "P2", "ox", &["b1", "b2"]))
            .await
            .unwrap()
            .into_result();

        let cells: Vec<_> = result
            .tile_locations
            .iter()
            .map(|t| t.area_name.as_str())
            .collect();
        assert_eq!(cells, vec!["a1", "a2", "b1", "b2"]);
        assert_eq!(
            result.tile_locations.iter().filter(|t| t.is_selected).count(),
            1
        );
        assert_eq!(result.play_index, 2);
        assert_eq!(result.play_direction, PlayDirection::Vertical);
        assert_eq!(result.player_turn_id, pid("P1"));
        assert_eq!(result.leader_id, Some(pid("P1")), "tie keeps leader");
    }

    #[tokio::test]
    async fn rejected_play_echoes_request_and_leaves_store_alone() {
        let mut games = MockGameStore::new();
        games.expect_get().times(0);
        games.expect_record_play().times(0);

        let game_id = GameId::new();
        let mut request = submission(game_id, "P1", "qzxvw", &["c1", "c2"]);
        request.play_direction = PlayDirection::Horizontal;
        request.play_index = 3;

        let outcome = use_case(Arc::new(games), rejecting_validator())
            .execute(request.clone())
            .await
            .unwrap();

        assert!(!outcome.is_accepted());
        let result = outcome.into_result();
        assert_eq!(result.score, 0);
        assert!(!result.word_is_good);
        assert_eq!(result.word, "qzxvw");
        assert_eq!(result.game_id, game_id);
        assert_eq!(result.missing_letter_index, 4);
        assert_eq!(result.play_index, 3);
        assert_eq!(result.play_direction, PlayDirection::Horizontal);
        assert_eq!(result.player_turn_id, pid("P1"));
        assert_eq!(result.leader_id, Some(pid("P1")));
        assert_eq!(result.tile_locations, request.tile_locations);
    }

    #[tokio::test]
    async fn empty_word_is_rejected_without_asking_validator() {
        let mut validator = MockWordValidator::new();
        validator.expect_check().times(0);
        let mut games = MockGameStore::new();
        games.expect_record_play().times(0);

        let result = use_case(Arc::new(games), validator)
            .execute(submission(GameId::new(), "P1", "", &[]))
            .await
            .unwrap()
            .into_result();

        assert_eq!(result.score, 0);
        assert_eq!(result.missing_letter_index, -1);
    }

    #[tokio::test]
    async fn overlong_word_is_rejected_without_asking_validator() {
        let mut validator = MockWordValidator::new();
        validator.expect_check().times(0);

        let outcome = use_case(Arc::new(MockGameStore::new()), validator)
            .execute(submission(GameId::new(), "P1", "abcdefghijklmnop", &[]))
            .await
            .unwrap();
        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn validator_receives_length_category() {
        let mut validator = MockWordValidator::new();
        validator
            .expect_check()
            .withf(|word, category| word == "hello" && *category == LengthCategory::Five)
            .times(1)
            .returning(|_, _| WordCheck::invalid());

        use_case(Arc::new(MockGameStore::new()), validator)
            .execute(submission(GameId::new(), "P1", "hello", &[]))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn when_game_id_blank_returns_malformed() {
        let mut request = submission(GameId::new(), "P1", "hello", &[]);
        request.game_id = "   ".into();

        let err = use_case(Arc::new(MockGameStore::new()), accepting_validator())
            .execute(request)
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn when_game_id_is_not_an_id_returns_malformed() {
        let mut request = submission(GameId::new(), "P1", "hello", &[]);
        request.game_id = "game-1".into();

        let err = use_case(Arc::new(MockGameStore::new()), accepting_validator())
            .execute(request)
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn when_user_id_empty_returns_malformed() {
        let err = use_case(Arc::new(MockGameStore::new()), accepting_validator())
            .execute(submission(GameId::new(), "", "hello", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::MalformedInput(_)));
    }

    #[tokio::test]
    async fn when_player_not_seated_returns_malformed() {
        let (store, game_id) = seeded_store().await;

        let err = use_case(store.clone(), accepting_validator())
            .execute(submission(game_id, "P3", "hello", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::MalformedInput(_)));
        assert!(store.get(game_id).await.unwrap().plays().is_empty());
    }

    #[tokio::test]
    async fn when_game_missing_returns_not_found() {
        let store = Arc::new(InMemoryGameStore::new());
        let game_id = GameId::new();

        let err = use_case(store, accepting_validator())
            .execute(submission(game_id, "P1", "hello", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::NotFound(id) if id == game_id));
    }

    /// In-memory store whose first `record_play` fails before writing.
    struct FailFirstWrite {
        inner: InMemoryGameStore,
        failed: std::sync::atomic::AtomicBool,
    }

    #[async_trait::async_trait]
    impl GameStore for FailFirstWrite {
        async fn create(&self, game: &Game) -> Result<(), RepoError> {
            self.inner.create(game).await
        }
        async fn get(&self, id: GameId) -> Result<Game, RepoError> {
            self.inner.get(id).await
        }
        async fn update(&self, id: GameId, update: GameUpdate) -> Result<(), RepoError> {
            self.inner.update(id, update).await
        }
        async fn append_play(&self, id: GameId, play: &Play) -> Result<PlayKey, RepoError> {
            self.inner.append_play(id, play).await
        }
        async fn record_play(
            &self,
            id: GameId,
            play: &Play,
            update: GameUpdate,
        ) -> Result<PlayKey, RepoError> {
            if !self.failed.swap(true, std::sync::atomic::Ordering::SeqCst) {
                return Err(RepoError::timeout("record_play"));
            }
            self.inner.record_play(id, play, update).await
        }
        async fn delete(&self, id: GameId) -> Result<(), RepoError> {
            self.inner.delete(id).await
        }
    }

    #[tokio::test]
    async fn failed_write_leaves_index_and_history_aligned() {
        let store = Arc::new(FailFirstWrite {
            inner: InMemoryGameStore::new(),
            failed: std::sync::atomic::AtomicBool::new(false),
        });
        let game = game();
        let game_id = game.id();
        store.create(&game).await.unwrap();
        let submit = use_case(store.clone(), accepting_validator());

        let err = submit
            .execute(submission(game_id, "P1", "hello", &["a1"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::Persistence(RepoError::Timeout { .. })));

        let stored = store.get(game_id).await.unwrap();
        assert_eq!(stored.play_index(), 0);
        assert!(stored.plays().is_empty());
        assert_eq!(stored.player_turn_id(), &pid("P1"));

        let result = submit
            .execute(submission(game_id, "P1", "hello", &["a1"]))
            .await
            .unwrap()
            .into_result();
        assert_eq!(result.play_index, 1);

        let stored = store.get(game_id).await.unwrap();
        assert_eq!(stored.play_index(), 1);
        assert_eq!(stored.plays().len(), 1);
    }

    #[tokio::test]
    async fn lock_entries_do_not_outlive_submissions() {
        let (store, game_id) = seeded_store().await;
        let locks = Arc::new(GameLocks::new());
        let submit = SubmitPlay::new(
            store,
            Arc::new(accepting_validator()),
            Arc::new(FixedScore(10)),
            Arc::new(FixedMissingLetter(2)),
            locks.clone(),
            Duration::from_secs(5),
        );

        for _ in 0..50 {
            let err = submit
                .execute(submission(GameId::new(), "P1", "hello", &[]))
                .await
                .unwrap_err();
            assert!(matches!(err, PlayError::NotFound(_)));
        }
        submit
            .execute(submission(game_id, "P1", "hello", &["a1"]))
            .await
            .unwrap();
        assert!(locks.is_empty());
    }

    #[tokio::test]
    async fn single_write_carries_play_and_turn_state() {
        let game = game();
        let game_id = game.id();
        let mut games = MockGameStore::new();
        let for_get = game.clone();
        games
            .expect_get()
            .returning(move |_| Ok(for_get.clone()));
        games
            .expect_record_play()
            .withf(move |id, play, update| {
                *id == game_id
                    && play.word == "hello"
                    && update.play_direction == Some(PlayDirection::Horizontal)
                    && update.play_index == Some(1)
                    && update.missing_letter_index == Some(2)
                    && update.player_turn_id == Some(PlayerId::new("P2").unwrap())
                    && update.leader_id == Some(PlayerId::new("P1").unwrap())
                    && update.scores == Some([10, 0])
            })
            .times(1)
            .returning(|_, _, _| Ok(PlayKey::from_sequence(1)));

        use_case(Arc::new(games), accepting_validator())
            .execute(submission(game_id, "P1", "hello", &[]))
            .await
            .unwrap();
    }

    /// Validator that never answers in time.
    struct StalledValidator;

    #[async_trait::async_trait]
    impl WordValidator for StalledValidator {
        async fn check(&self, _word: &str, _category: LengthCategory) -> WordCheck {
            tokio::time::sleep(Duration::from_secs(60)).await;
            WordCheck::valid("")
        }
    }

    #[tokio::test]
    async fn when_validator_stalls_returns_validation_timeout() {
        let mut games = MockGameStore::new();
        games.expect_record_play().times(0);

        let submit = SubmitPlay::new(
            Arc::new(games),
            Arc::new(StalledValidator),
            Arc::new(FixedScore(10)),
            Arc::new(FixedMissingLetter(2)),
            Arc::new(GameLocks::new()),
            Duration::from_millis(20),
        );
        let err = submit
            .execute(submission(GameId::new(), "P1", "hello", &[]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlayError::ValidationTimeout(_)));
    }

    #[tokio::test]
    async fn concurrent_plays_on_one_game_are_serialized() {
        let (store, game_id) = seeded_store().await;
        let submit = Arc::new(use_case(store.clone(), accepting_validator()));

        let mut handles = Vec::new();
        for i in 0..16 {
            let submit = submit.clone();
            let user = if i % 2 == 0 { "P1" } else { "P2" };
            handles.push(tokio::spawn(async move {
                submit
                    .execute(submission(game_id, user, "hello", &["a1"]))
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().unwrap().is_accepted());
        }

        let stored = store.get(game_id).await.unwrap();
        assert_eq!(stored.play_index(), 16);
        assert_eq!(stored.plays().len(), 16);
        assert_eq!(stored.play_direction(), PlayDirection::Vertical);
    }
}
