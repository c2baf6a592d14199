//! Word list held in memory, bucketed by length.
//!
//! Serves both as the [`WordStore`] that new games draw their word from and
//! as a [`WordValidator`] that accepts any word on the list.
//!
//! Two file formats are understood:
//!
//! - JSON: an object from category (`"seven"` or `"7"`) to an array whose
//!   entries are either a bare word or `{"word": .., "definition": ..}`
//! - Text: one word per line, optionally followed by a tab and a definition.
//!   Blank lines and lines starting with `#` are skipped.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use wordgrid_domain::{LengthCategory, Word};

use crate::infrastructure::ports::{RandomPort, RepoError, WordCheck, WordStore, WordValidator};

/// Small list compiled into the binary, used when no file is configured.
const BUILTIN_WORDS: &str = include_str!("../../../data/words.json");

#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid word list: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Bare(String),
    Full {
        word: String,
        #[serde(default, alias = "Definition")]
        definition: String,
    },
}

impl From<JsonEntry> for Word {
    fn from(entry: JsonEntry) -> Self {
        match entry {
            JsonEntry::Bare(word) => Word::new(word),
            JsonEntry::Full { word, definition } => Word::new(word).with_definition(definition),
        }
    }
}

pub struct WordList {
    buckets: HashMap<LengthCategory, Vec<Word>>,
    /// Lowercased word to its position in its bucket.
    index: HashMap<String, usize>,
    random: Arc<dyn RandomPort>,
}

impl WordList {
    /// Build from words in any order. Words outside every length bucket and
    /// repeats of an earlier word are dropped.
    pub fn new(words: impl IntoIterator<Item = Word>, random: Arc<dyn RandomPort>) -> Self {
        let mut buckets: HashMap<LengthCategory, Vec<Word>> = HashMap::new();
        let mut index = HashMap::new();

        for word in words {
            let text = word.text.trim().to_string();
            let Some(category) = LengthCategory::for_word(&text) else {
                continue;
            };
            let key = text.to_lowercase();
            if index.contains_key(&key) {
                continue;
            }
            let bucket = buckets.entry(category).or_default();
            index.insert(key, bucket.len());
            bucket.push(Word::new(text).with_definition(word.definition));
        }

        Self {
            buckets,
            index,
            random,
        }
    }

    /// The list compiled into the binary.
    pub fn builtin(random: Arc<dyn RandomPort>) -> Result<Self, WordListError> {
        Self::from_json(BUILTIN_WORDS, random)
    }

    /// Load a list from disk. Files ending in `.json` are read as JSON, anything
    /// else as text.
    pub async fn load(path: &Path, random: Arc<dyn RandomPort>) -> Result<Self, WordListError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| WordListError::Io {
                path: path.display().to_string(),
                source,
            })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let list = if is_json {
            Self::from_json(&contents, random)?
        } else {
            Self::from_text(&contents, random)
        };

        tracing::info!(
            path = %path.display(),
            words = list.len(),
            "Loaded word list"
        );
        Ok(list)
    }

    pub fn from_json(json: &str, random: Arc<dyn RandomPort>) -> Result<Self, WordListError> {
        let raw: HashMap<String, Vec<JsonEntry>> =
            serde_json::from_str(json).map_err(|e| WordListError::Parse(e.to_string()))?;

        let mut words = Vec::new();
        for (name, entries) in raw {
            let category: LengthCategory = name
                .parse()
                .map_err(|e: wordgrid_domain::DomainError| WordListError::Parse(e.to_string()))?;
            let before = words.len();
            words.extend(
                entries
                    .into_iter()
                    .map(Word::from)
                    .filter(|w| LengthCategory::for_word(w.text.trim()) == Some(category)),
            );
            tracing::debug!(
                category = %category,
                words = words.len() - before,
                "Read word list bucket"
            );
        }
        Ok(Self::new(words, random))
    }

    pub fn from_text(text: &str, random: Arc<dyn RandomPort>) -> Self {
        let words = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| match line.split_once('\t') {
                Some((word, definition)) => Word::new(word.trim()).with_definition(definition.trim()),
                None => Word::new(line),
            });
        Self::new(words, random)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn count_in(&self, category: LengthCategory) -> usize {
        self.buckets.get(&category).map_or(0, Vec::len)
    }

    fn lookup(&self, word: &str, category: LengthCategory) -> Option<&Word> {
        let word = word.trim();
        if LengthCategory::for_word(word) != Some(category) {
            return None;
        }
        let position = *self.index.get(&word.to_lowercase())?;
        self.buckets.get(&category)?.get(position)
    }
}

#[async_trait]
impl WordStore for WordList {
    async fn select_random(&self, category: LengthCategory) -> Result<Word, RepoError> {
        let bucket = self
            .buckets
            .get(&category)
            .filter(|bucket| !bucket.is_empty())
            .ok_or_else(|| RepoError::not_found("Word category", category))?;

        let last = i32::try_from(bucket.len() - 1).unwrap_or(i32::MAX);
        let at = usize::try_from(self.random.gen_range(0, last).clamp(0, last)).unwrap_or(0);
        bucket
            .get(at)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Word", format!("{category}[{at}]")))
    }
}

#[async_trait]
impl WordValidator for WordList {
    async fn check(&self, word: &str, category: LengthCategory) -> WordCheck {
        match self.lookup(word, category) {
            Some(found) => WordCheck::valid(found.definition.clone()),
            None => WordCheck::invalid(),
        }
    }
}
