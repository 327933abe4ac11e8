use crate::data::RarityTier;
use thiserror::Error;

/// Result type alias using [`PracticeError`].
pub type Result<T> = std::result::Result<T, PracticeError>;

/// Indicates that an error occurred while practicing.
#[derive(Debug, Error)]
pub enum PracticeError {
    /// No enabled rarity tier has a positive weight, so no tier can be chosen.
    #[error("no enabled rarity tier has a positive weight")]
    NoEligibleTier,
    /// Every word of this rarity tier is already known, so no new words can be introduced.
    #[error("every {0} word is already known")]
    ExhaustedPool(RarityTier),
    /// The word is already being tracked.
    #[error("the word {0:?} is already known")]
    AlreadyKnown(String),
    /// The word list could not be retrieved or understood.
    #[error("the word list is unavailable: {0}")]
    CatalogUnavailable(String),
    /// The learner asked to stop.
    #[error("interrupted")]
    Interrupted,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// How a single question was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// The learner gave the right answer.
    Correct,
    /// The learner picked the wrong multiple-choice option.
    Incorrect,
    /// The word was revealed, either because the learner skipped it or because hints uncovered
    /// every letter.
    Revealed,
}

impl QuestionOutcome {
    pub fn is_correct(self) -> bool {
        self == QuestionOutcome::Correct
    }
}

/// The kind of question that was asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    Typed,
    MultipleChoice,
}

/// Why a practice session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The configured number of questions was asked.
    CountReached,
    /// The learner interrupted the session.
    Interrupted,
    /// Every enabled rarity tier ran out of words to introduce.
    PoolExhausted,
}

/// Totals for a finished practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub questions: u32,
    pub correct: u32,
    pub end: SessionEnd,
}
