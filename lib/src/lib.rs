//! An adaptive vocabulary practice engine.
//!
//! Words are chosen by first drawing a rarity tier by weight, then drawing a known word of that
//! tier, favoring words the learner struggles with. New words are introduced a few at a time,
//! once the learner has mastered the words they already know. Each word is asked either as a
//! typed question with progressive hints, or as a multiple-choice question once the learner has
//! seen it enough times.

mod config;
mod console;
mod data;
mod engine;
mod progress;
mod pronunciation;
mod report;
mod results;
mod selection;
mod session;
pub mod storage;

pub use config::*;
pub use console::*;
pub use data::*;
pub use engine::*;
pub use progress::*;
pub use pronunciation::pronounce;
pub use report::*;
pub use results::*;
pub use selection::*;
pub use session::Session;
