//! External service port traits (word validation).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use wordgrid_domain::LengthCategory;

/// Verdict on a submitted word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCheck {
    pub valid: bool,
    /// Dictionary definition when the validator has one, otherwise empty.
    pub definition: String,
}

impl WordCheck {
    pub fn valid(definition: impl Into<String>) -> Self {
        Self {
            valid: true,
            definition: definition.into(),
        }
    }

    pub fn invalid() -> Self {
        Self::default()
    }
}

/// Decides whether a word is playable.
///
/// Implementations fail closed: a lookup that errors reports the word as
/// invalid instead of surfacing the error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WordValidator: Send + Sync {
    async fn check(&self, word: &str, category: LengthCategory) -> WordCheck;

    async fn is_valid(&self, word: &str, category: LengthCategory) -> bool {
        self.check(word, category).await.valid
    }
}
