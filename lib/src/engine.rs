use crate::config::Config;
use crate::console::CancelFlag;
use crate::console::Console;
use crate::data::Word;
use crate::data::WordBank;
use crate::progress::Progress;
use crate::pronunciation::pronounce;
use crate::results::*;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Other known words need at least this many attempts to be used as wrong answers.
pub const MIN_DISTRACTOR_ATTEMPTS: u32 = 3;
/// A multiple-choice question needs at least this many possible wrong answers.
pub const MIN_DISTRACTOR_POOL: usize = 5;
/// The target word needs at least this many attempts before it may be asked as multiple choice.
pub const MIN_MULTIPLE_CHOICE_ATTEMPTS: u32 = 5;
/// The number of wrong answers shown alongside the right one.
pub const NUM_DISTRACTORS: usize = 3;

/// Typing this instead of a guess reveals the word.
pub const SKIP_COMMAND: &str = "skip";
/// Including this in a guess reveals one more letter.
pub const HINT_MARKER: char = '?';

/// Whether a typed guess finished the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypedTurn {
    /// The guess completed the word.
    Solved,
    /// The question goes on, possibly with a longer hint or with the word about to be revealed.
    Continue,
}

/// The progress of a typed question: how much of the word has been given away, and whether the
/// word should now be revealed.
///
/// The hint is always a prefix of the target word, and never gets shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintState {
    target: Vec<char>,
    hint_len: usize,
    skipped: bool,
}

impl HintState {
    pub fn new(target: &str) -> HintState {
        HintState {
            target: target.chars().collect(),
            hint_len: 0,
            skipped: false,
        }
    }

    /// The letters of the word given so far.
    pub fn hint(&self) -> String {
        self.target[..self.hint_len].iter().collect()
    }

    /// Whether the word will be revealed instead of asking again.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    fn is_fully_revealed(&self) -> bool {
        self.hint_len >= self.target.len()
    }

    /// Extends the hint to cover every leading letter of `hint + typed` that matches the target.
    fn extend_to_match(&mut self, typed: &str) {
        let matching = self.target[self.hint_len..]
            .iter()
            .zip(typed.chars())
            .take_while(|(expected, actual)| *expected == actual)
            .count();
        self.hint_len += matching;
    }

    /// Applies one typed guess, which follows the current hint.
    ///
    /// ```
    /// use vocab_drill::{HintState, TypedTurn};
    ///
    /// let mut state = HintState::new("toki");
    ///
    /// assert_eq!(state.submit("tok?"), TypedTurn::Continue);
    /// assert_eq!(state.hint(), "toki");
    /// assert!(state.is_skipped());
    /// ```
    pub fn submit(&mut self, guess: &str) -> TypedTurn {
        let hint_len = self.hint_len;
        if self.target[..hint_len]
            .iter()
            .copied()
            .chain(guess.chars())
            .eq(self.target.iter().copied())
        {
            return TypedTurn::Solved;
        }
        if guess == SKIP_COMMAND {
            self.skipped = true;
            return TypedTurn::Continue;
        }
        match guess.find(HINT_MARKER) {
            Some(marker) if !self.is_fully_revealed() => {
                self.extend_to_match(&guess[..marker]);
                if !self.is_fully_revealed() {
                    self.hint_len += 1;
                }
                if self.is_fully_revealed() {
                    self.skipped = true;
                }
            }
            _ => self.extend_to_match(guess),
        }
        TypedTurn::Continue
    }
}

/// How a question was asked and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionResult {
    pub kind: QuestionKind,
    pub outcome: QuestionOutcome,
}

/// Returns the known words, other than `target`, whose definitions may be offered as wrong
/// answers.
pub fn distractor_pool<'a>(
    bank: &'a WordBank,
    progress: &Progress,
    target: &Word,
    language: &str,
) -> Vec<&'a Word> {
    progress
        .entries()
        .filter(|(word, entry)| {
            entry.attempts >= MIN_DISTRACTOR_ATTEMPTS && *word != target.word()
        })
        .filter_map(|(word, _)| bank.get(word))
        .filter(|word| word.definition(language).is_some())
        .collect()
}

/// Returns whether `target` has been practiced enough, alongside enough other words, to be
/// asked as a multiple-choice question.
pub fn is_multiple_choice_eligible(
    bank: &WordBank,
    progress: &Progress,
    target: &Word,
    language: &str,
) -> bool {
    progress
        .entry(target.word())
        .map_or(false, |entry| entry.attempts >= MIN_MULTIPLE_CHOICE_ATTEMPTS)
        && distractor_pool(bank, progress, target, language).len() >= MIN_DISTRACTOR_POOL
}

/// Builds the shuffled options for a multiple-choice question: the correct definition plus
/// [`NUM_DISTRACTORS`] distinct wrong ones drawn from `pool`.
///
/// Returns `None` if the pool doesn't have enough distinct definitions.
pub fn multiple_choice_options<R: Rng + ?Sized>(
    correct: &str,
    pool: &[&Word],
    language: &str,
    rng: &mut R,
) -> Option<Vec<String>> {
    let mut options = vec![correct.to_string()];
    for word in pool.choose_multiple(rng, pool.len()) {
        if options.len() > NUM_DISTRACTORS {
            break;
        }
        if let Some(definition) = word.definition(language) {
            if !options.iter().any(|option| option == definition) {
                options.push(definition.to_string());
            }
        }
    }
    if options.len() <= NUM_DISTRACTORS {
        return None;
    }
    options.shuffle(rng);
    Some(options)
}

/// Asks single questions about words, and records the answers.
pub struct QuestionEngine<'a> {
    bank: &'a WordBank,
    config: &'a Config,
}

impl<'a> QuestionEngine<'a> {
    pub fn new(bank: &'a WordBank, config: &'a Config) -> QuestionEngine<'a> {
        QuestionEngine { bank, config }
    }

    /// Asks one question about `word`, either as multiple choice or typed.
    ///
    /// Exactly one attempt is recorded, and it is credited as correct only if the learner
    /// answers correctly. If the learner interrupts, the error is returned and the attempt is
    /// left in `progress` for the caller to discard.
    pub fn ask<C, R>(
        &self,
        word: &Word,
        progress: &mut Progress,
        console: &mut C,
        rng: &mut R,
        cancel: &CancelFlag,
    ) -> Result<QuestionResult>
    where
        C: Console + ?Sized,
        R: Rng + ?Sized,
    {
        progress.record_attempt(word.word(), false);
        let language = self.config.language.as_str();
        let definition = word.definition(language).unwrap_or_default();

        let draw: f64 = rng.gen();
        let options = if draw < self.config.multiple_choice_chance
            && is_multiple_choice_eligible(self.bank, progress, word, language)
        {
            let pool = distractor_pool(self.bank, progress, word, language);
            multiple_choice_options(definition, &pool, language, rng)
        } else {
            None
        };

        if cancel.is_cancelled() {
            return Err(PracticeError::Interrupted);
        }
        let result = match options {
            Some(options) => QuestionResult {
                kind: QuestionKind::MultipleChoice,
                outcome: self.ask_multiple_choice(word, definition, &options, progress, console)?,
            },
            None => QuestionResult {
                kind: QuestionKind::Typed,
                outcome: self.ask_typed(word, definition, progress, console, cancel)?,
            },
        };
        debug!(word = word.word(), ?result, "question resolved");

        if self.config.show_pronunciation {
            console.show(&format!("Pronunciation: {}", pronounce(word.word())));
        }
        if self.config.show_accuracy {
            if let Some(entry) = progress.entry(word.word()) {
                console.show(&format!("Accuracy: {}%", entry.accuracy_percent()));
            }
        }
        Ok(result)
    }

    fn ask_multiple_choice<C: Console + ?Sized>(
        &self,
        word: &Word,
        definition: &str,
        options: &[String],
        progress: &mut Progress,
        console: &mut C,
    ) -> Result<QuestionOutcome> {
        console.clear();
        let selected = console.select_one(&format!("Word: {}", word.word()), options)?;
        if options.get(selected).map(String::as_str) == Some(definition) {
            progress.record_correct(word.word());
            console.show(&format!("Correct!   {}: {}", word.word(), definition));
            Ok(QuestionOutcome::Correct)
        } else {
            console.show(&format!("Incorrect! {}: {}", word.word(), definition));
            Ok(QuestionOutcome::Incorrect)
        }
    }

    fn ask_typed<C: Console + ?Sized>(
        &self,
        word: &Word,
        definition: &str,
        progress: &mut Progress,
        console: &mut C,
        cancel: &CancelFlag,
    ) -> Result<QuestionOutcome> {
        let is_new = progress
            .entry(word.word())
            .map_or(true, |entry| entry.attempts == 1);
        let mut state = HintState::new(word.word());
        loop {
            if cancel.is_cancelled() {
                return Err(PracticeError::Interrupted);
            }
            console.clear();
            console.show(&format!(
                "Type '{}' to skip this word, or '{}' for a hint. (These do not take given hints into account)",
                SKIP_COMMAND, HINT_MARKER
            ));
            console.show(&format!("Definition: {}", definition));
            if is_new {
                console.show(&format!("New Word! - {}", word.word()));
            }
            if state.is_skipped() {
                console.show(&format!("Word: {}", word.word()));
                return Ok(QuestionOutcome::Revealed);
            }
            let guess = console.read_line(&format!("Word: {}", state.hint()))?;
            if state.submit(&guess) == TypedTurn::Solved {
                progress.record_correct(word.word());
                console.show("Correct!");
                return Ok(QuestionOutcome::Correct);
            }
        }
    }
}
