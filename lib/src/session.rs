use crate::config::Config;
use crate::config::SessionParams;
use crate::console::CancelFlag;
use crate::console::Console;
use crate::data::RarityTier;
use crate::data::Word;
use crate::data::WordBank;
use crate::engine::QuestionEngine;
use crate::progress::Progress;
use crate::results::*;
use crate::selection::pick_tier;
use crate::selection::pick_tier_excluding;
use crate::selection::pick_word;
use crate::storage::ProgressSink;
use rand::Rng;
use tracing::info;
use tracing::warn;

/// Everything one practice session needs, threaded through each question.
///
/// Progress is saved through the sink after new words are introduced and after every answered
/// question, so stopping between questions never loses an answer.
pub struct Session<'a, C: ?Sized, S: ?Sized, R: ?Sized> {
    bank: &'a WordBank,
    progress: &'a mut Progress,
    config: &'a Config,
    params: SessionParams,
    console: &'a mut C,
    sink: &'a mut S,
    rng: &'a mut R,
    cancel: CancelFlag,
}

impl<'a, C, S, R> Session<'a, C, S, R>
where
    C: Console + ?Sized,
    S: ProgressSink + ?Sized,
    R: Rng + ?Sized,
{
    pub fn new(
        bank: &'a WordBank,
        progress: &'a mut Progress,
        config: &'a Config,
        params: SessionParams,
        console: &'a mut C,
        sink: &'a mut S,
        rng: &'a mut R,
    ) -> Self {
        Session {
            bank,
            progress,
            config,
            params,
            console,
            sink,
            rng,
            cancel: CancelFlag::new(),
        }
    }

    /// Stops the session once the given flag is cancelled.
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = cancel;
        self
    }

    /// Asks questions until the configured count is reached, the learner interrupts, or there
    /// are no words left to introduce.
    ///
    /// Fails before asking anything if the word list is empty or no rarity tier can be chosen.
    pub fn run(mut self) -> Result<SessionSummary> {
        if self.bank.is_empty() {
            return Err(PracticeError::CatalogUnavailable(
                "the word list is empty".to_string(),
            ));
        }
        // Validates the rarity configuration up front.
        pick_tier(self.progress.rarity(), self.rng)?;

        let engine = QuestionEngine::new(self.bank, self.config);
        let mut questions = 0;
        let mut correct = 0;
        let end = loop {
            if self.cancel.is_cancelled() {
                break SessionEnd::Interrupted;
            }
            if self.params.count.map_or(false, |count| questions >= count) {
                break SessionEnd::CountReached;
            }
            let word = match self.next_word()? {
                Some(word) => word,
                None => break SessionEnd::PoolExhausted,
            };

            let before = self.progress.entry(word.word()).copied();
            let result = match engine.ask(
                word,
                self.progress,
                self.console,
                self.rng,
                &self.cancel,
            ) {
                Ok(result) => result,
                Err(PracticeError::Interrupted) => {
                    // Leave progress exactly as it was last saved.
                    self.progress.restore(word.word(), before);
                    break SessionEnd::Interrupted;
                }
                Err(err) => return Err(err),
            };
            self.sink.save(self.progress)?;

            questions += 1;
            if result.outcome.is_correct() {
                correct += 1;
            }
            self.console.pause();
        };

        match end {
            SessionEnd::CountReached => self.console.show("Session over!"),
            SessionEnd::Interrupted => self.console.show("Session interrupted."),
            SessionEnd::PoolExhausted => self.console.show(
                "You know every word in the enabled rarity tiers! Enable more tiers to keep learning.",
            ),
        }
        info!(questions, correct, ?end, "practice session finished");
        Ok(SessionSummary {
            questions,
            correct,
            end,
        })
    }

    /// Picks the next word, moving on to other tiers when one runs out of new words.
    ///
    /// Returns `None` once every enabled tier has run out.
    fn next_word(&mut self) -> Result<Option<&'a Word>> {
        let mut exhausted: Vec<RarityTier> = Vec::new();
        loop {
            let tier = match pick_tier_excluding(self.progress.rarity(), &exhausted, self.rng) {
                Ok(tier) => tier,
                Err(PracticeError::NoEligibleTier) if !exhausted.is_empty() => return Ok(None),
                Err(err) => return Err(err),
            };
            match pick_word(
                self.bank,
                self.progress,
                tier,
                &self.params,
                self.sink,
                self.rng,
            ) {
                Ok(word) => return Ok(Some(word)),
                Err(PracticeError::ExhaustedPool(tier)) => {
                    warn!(%tier, "no new words left in tier, trying another");
                    exhausted.push(tier);
                }
                Err(err) => return Err(err),
            }
        }
    }
}
