//! Play use cases.
//!
//! Validating, scoring and recording the words players submit.

use std::sync::Arc;

mod policy;
mod submit_play;

pub use policy::{FixedMissingLetter, FixedScore, MissingLetterPolicy, ScorePolicy};
pub use submit_play::{PlayError, PlayOutcome, PlayResult, PlaySubmission, SubmitPlay};

/// Container for play use cases.
pub struct PlayUseCases {
    pub submit: Arc<SubmitPlay>,
}

impl PlayUseCases {
    pub fn new(submit: Arc<SubmitPlay>) -> Self {
        Self { submit }
    }
}
