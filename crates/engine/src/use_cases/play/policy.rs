//! Scoring and hidden-letter rules.
//!
//! Both are seams for game variants; the shipped game uses constants.

use wordgrid_domain::Game;

/// Points awarded for an accepted word.
pub trait ScorePolicy: Send + Sync {
    fn score(&self, word: &str) -> u32;
}

/// Hidden letter position after an accepted play.
pub trait MissingLetterPolicy: Send + Sync {
    /// `game` is the state after the play was recorded but before the turn
    /// advanced.
    fn next_missing_letter(&self, game: &Game) -> i32;
}

/// Every accepted word scores the same.
#[derive(Debug, Clone, Copy)]
pub struct FixedScore(pub u32);

impl ScorePolicy for FixedScore {
    fn score(&self, _word: &str) -> u32 {
        self.0
    }
}

/// The hidden letter always moves to the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedMissingLetter(pub i32);

impl MissingLetterPolicy for FixedMissingLetter {
    fn next_missing_letter(&self, _game: &Game) -> i32 {
        self.0
    }
}
