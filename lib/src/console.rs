use crate::results::Result;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;

/// The learner-facing side of a practice session.
///
/// `select_one` and `read_line` block until the learner responds. Either may fail with
/// [`PracticeError::Interrupted`](crate::PracticeError::Interrupted) if the learner asks to stop.
pub trait Console {
    /// Clears whatever was shown for the previous question.
    fn clear(&mut self);

    /// Shows a line of text.
    fn show(&mut self, line: &str);

    /// Asks the learner to pick one of `choices`, returning the index of the chosen one.
    ///
    /// `title` is shown above the choices.
    fn select_one(&mut self, title: &str, choices: &[String]) -> Result<usize>;

    /// Reads one line of input. The `prompt` is shown before the learner's input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Gives the learner a moment to read feedback before the next question.
    fn pause(&mut self) {}
}

/// A flag that can be shared with another thread or signal handler to stop a session.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> CancelFlag {
        CancelFlag::default()
    }

    /// Asks the session to stop at its next opportunity.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}
