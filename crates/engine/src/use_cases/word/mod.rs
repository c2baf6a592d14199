//! Word use cases.

use std::sync::Arc;

use wordgrid_domain::{LengthCategory, Word};

use crate::infrastructure::ports::{RepoError, WordStore};

/// Draw the target word for a new game.
pub struct SelectWord {
    words: Arc<dyn WordStore>,
}

impl SelectWord {
    pub fn new(words: Arc<dyn WordStore>) -> Self {
        Self { words }
    }

    pub async fn execute(&self, category: LengthCategory) -> Result<Word, SelectWordError> {
        let word = match self.words.select_random(category).await {
            Ok(word) => word,
            Err(RepoError::NotFound { .. }) => {
                return Err(SelectWordError::Unresolved(category));
            }
            Err(e) => return Err(e.into()),
        };

        if word.text.trim().is_empty() {
            tracing::warn!(category = %category, "Word store returned an empty word");
            return Err(SelectWordError::Unresolved(category));
        }
        Ok(word)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectWordError {
    #[error("No word available in category {0}")]
    Unresolved(LengthCategory),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockWordStore;

    #[tokio::test]
    async fn returns_word_with_definition() {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .withf(|category| *category == LengthCategory::Seven)
            .returning(|_| Ok(Word::new("example").with_definition("a sample")));

        let word = SelectWord::new(Arc::new(words))
            .execute(LengthCategory::Seven)
            .await
            .unwrap();
        assert_eq!(word.text, "example");
        assert_eq!(word.definition, "a sample");
    }

    #[tokio::test]
    async fn when_category_missing_returns_unresolved() {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .returning(|c| Err(RepoError::not_found("Word category", c)));

        let err = SelectWord::new(Arc::new(words))
            .execute(LengthCategory::Nine)
            .await
            .unwrap_err();
        assert!(matches!(err, SelectWordError::Unresolved(LengthCategory::Nine)));
    }

    #[tokio::test]
    async fn when_store_returns_empty_word_returns_unresolved() {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .returning(|_| Ok(Word::new("  ")));

        let err = SelectWord::new(Arc::new(words))
            .execute(LengthCategory::Seven)
            .await
            .unwrap_err();
        assert!(matches!(err, SelectWordError::Unresolved(_)));
    }

    #[tokio::test]
    async fn when_store_fails_returns_repo_error() {
        let mut words = MockWordStore::new();
        words
            .expect_select_random()
            .returning(|_| Err(RepoError::database("select_random", "offline")));

        let err = SelectWord::new(Arc::new(words))
            .execute(LengthCategory::Seven)
            .await
            .unwrap_err();
        assert!(matches!(err, SelectWordError::Repo(_)));
    }
}
