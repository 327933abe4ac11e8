use crate::data::DEFAULT_LANGUAGE;
use serde::Deserialize;
use serde::Serialize;

/// Learner preferences for practice sessions. Read-only while a session runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Show an approximate pronunciation after each question.
    pub show_pronunciation: bool,
    /// Show the word's running accuracy after each question.
    pub show_accuracy: bool,
    /// The chance, from 0 to 1, of asking a multiple-choice question when one is possible.
    pub multiple_choice_chance: f64,
    /// The language that definitions are shown in.
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            show_pronunciation: true,
            show_accuracy: true,
            multiple_choice_chance: 0.70,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// The on-disk layout of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub practice: Config,
}

/// Settings for a single practice session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionParams {
    /// How many new words are introduced at a time.
    pub word_rate: u32,
    /// New words keep being introduced until every known word of a tier reaches this accuracy.
    pub min_accuracy: f64,
    /// The number of questions to ask, or `None` to keep going until interrupted.
    pub count: Option<u32>,
}

impl Default for SessionParams {
    fn default() -> Self {
        SessionParams {
            word_rate: 5,
            min_accuracy: 0.8,
            count: None,
        }
    }
}

impl SessionParams {
    /// Builds parameters from a minimum accuracy given as a percentage from 0 to 100.
    ///
    /// A zero word rate or accuracy falls back to the default, and the percentage is clamped to
    /// 0..=100. The count is kept as given, so `Some(0)` asks nothing.
    pub fn from_percent(word_rate: u32, min_accuracy_percent: f64, count: Option<u32>) -> Self {
        let defaults = SessionParams::default();
        SessionParams {
            word_rate: if word_rate == 0 {
                defaults.word_rate
            } else {
                word_rate
            },
            min_accuracy: if min_accuracy_percent > 0.0 {
                min_accuracy_percent.min(100.0) / 100.0
            } else {
                defaults.min_accuracy
            },
            count,
        }
    }
}
