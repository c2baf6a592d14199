//! Words and the length categories the word lists are bucketed by.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Word-list bucket, named after the number of letters in its words.
///
/// Only lengths 1 through 15 have a bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthCategory {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
}

impl LengthCategory {
    pub const ALL: [LengthCategory; 15] = [
        LengthCategory::One,
        LengthCategory::Two,
        LengthCategory::Three,
        LengthCategory::Four,
        LengthCategory::Five,
        LengthCategory::Six,
        LengthCategory::Seven,
        LengthCategory::Eight,
        LengthCategory::Nine,
        LengthCategory::Ten,
        LengthCategory::Eleven,
        LengthCategory::Twelve,
        LengthCategory::Thirteen,
        LengthCategory::Fourteen,
        LengthCategory::Fifteen,
    ];

    /// Bucket for a letter count, `None` outside 1..=15.
    pub fn from_len(len: usize) -> Option<Self> {
        len.checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Bucket for a word, counted in characters rather than bytes.
    pub fn for_word(word: &str) -> Option<Self> {
        Self::from_len(word.chars().count())
    }

    pub fn letter_count(&self) -> usize {
        *self as usize + 1
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthCategory::One => "one",
            LengthCategory::Two => "two",
            LengthCategory::Three => "three",
            LengthCategory::Four => "four",
            LengthCategory::Five => "five",
            LengthCategory::Six => "six",
            LengthCategory::Seven => "seven",
            LengthCategory::Eight => "eight",
            LengthCategory::Nine => "nine",
            LengthCategory::Ten => "ten",
            LengthCategory::Eleven => "eleven",
            LengthCategory::Twelve => "twelve",
            LengthCategory::Thirteen => "thirteen",
            LengthCategory::Fourteen => "fourteen",
            LengthCategory::Fifteen => "fifteen",
        }
    }
}

impl fmt::Display for LengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LengthCategory {
    type Err = DomainError;

    /// Accepts either the bucket name (`"seven"`) or the letter count (`"7"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        if let Ok(n) = s.parse::<usize>() {
            return Self::from_len(n)
                .ok_or_else(|| DomainError::parse(format!("No word category for length {n}")));
        }
        Self::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| DomainError::parse(format!("Unknown word category: {s}")))
    }
}

/// A playable word with its dictionary definition (possibly empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub definition: String,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            definition: String::new(),
        }
    }

    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = definition.into();
        self
    }

    pub fn category(&self) -> Option<LengthCategory> {
        LengthCategory::for_word(&self.text)
    }
}
