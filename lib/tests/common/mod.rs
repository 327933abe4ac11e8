#![allow(dead_code)]

use std::collections::HashMap;
use std::collections::VecDeque;
use vocab_drill::storage::ProgressSink;
use vocab_drill::*;

pub const CORE_WORDS: [(&str, &str); 8] = [
    ("toki", "speech"),
    ("pona", "good"),
    ("jan", "person"),
    ("mi", "I, me"),
    ("sina", "you"),
    ("moku", "food"),
    ("telo", "water"),
    ("ni", "this, that"),
];

pub const UNCOMMON_WORDS: [(&str, &str); 2] = [("kipisi", "cut"), ("leko", "square")];

pub const OBSCURE_WORDS: [(&str, &str); 1] = [("kijetesantakalu", "raccoon")];

pub fn word(word: &str, tier: RarityTier, definition: &str) -> Word {
    Word::new(word, tier).with_definition(DEFAULT_LANGUAGE, definition)
}

pub fn create_word_bank(words: &[(&str, RarityTier, &str)]) -> WordBank {
    WordBank::from_iterator(
        words
            .iter()
            .map(|(spelling, tier, definition)| word(spelling, *tier, definition)),
    )
}

/// Core, uncommon and obscure words, with no common words.
pub fn sample_word_bank() -> WordBank {
    WordBank::from_iterator(
        CORE_WORDS
            .iter()
            .map(|(spelling, definition)| word(spelling, RarityTier::Core, definition))
            .chain(
                UNCOMMON_WORDS
                    .iter()
                    .map(|(spelling, definition)| word(spelling, RarityTier::Uncommon, definition)),
            )
            .chain(
                OBSCURE_WORDS
                    .iter()
                    .map(|(spelling, definition)| word(spelling, RarityTier::Obscure, definition)),
            ),
    )
}

/// Makes every word known with the given record.
pub fn known(progress: &mut Progress, words: &[&str], attempts: u32, correct: u32) {
    for word in words {
        if !progress.is_known(word) {
            progress.add_word(word).unwrap();
        }
        for attempt in 0..attempts {
            progress.record_attempt(word, attempt < correct);
        }
    }
}

pub fn typed_only_config() -> Config {
    Config {
        multiple_choice_chance: 0.0,
        ..Config::default()
    }
}

/// Keeps a copy of every saved progress.
#[derive(Default)]
pub struct RecordingSink {
    pub saves: Vec<Progress>,
}

impl ProgressSink for RecordingSink {
    fn save(&mut self, progress: &Progress) -> Result<()> {
        self.saves.push(progress.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub enum Reply {
    /// Types the given line.
    Line(String),
    /// Selects the option equal to the given text.
    Choose(String),
    /// Selects the first option not equal to the given text.
    ChooseOther(String),
}

pub fn line(text: &str) -> Reply {
    Reply::Line(text.to_string())
}

/// Replies from a fixed script, and interrupts once the script runs out.
#[derive(Default)]
pub struct ScriptedConsole {
    replies: VecDeque<Reply>,
    pub output: Vec<String>,
    pub prompts: Vec<String>,
    pub menus: Vec<(String, Vec<String>)>,
}

impl ScriptedConsole {
    pub fn new(replies: Vec<Reply>) -> ScriptedConsole {
        ScriptedConsole {
            replies: replies.into(),
            ..ScriptedConsole::default()
        }
    }

    pub fn showed(&self, line: &str) -> bool {
        self.output.iter().any(|shown| shown == line)
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) {}

    fn show(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn select_one(&mut self, title: &str, choices: &[String]) -> Result<usize> {
        self.menus.push((title.to_string(), choices.to_vec()));
        match self.replies.pop_front() {
            Some(Reply::Choose(text)) => Ok(choices
                .iter()
                .position(|choice| *choice == text)
                .expect("scripted choice is not an option")),
            Some(Reply::ChooseOther(text)) => Ok(choices
                .iter()
                .position(|choice| *choice != text)
                .expect("every option matches")),
            Some(Reply::Line(text)) => panic!("expected a line to be read, not {:?}", text),
            None => Err(PracticeError::Interrupted),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(Reply::Line(text)) => Ok(text),
            Some(other) => panic!("expected a selection, not {:?}", other),
            None => Err(PracticeError::Interrupted),
        }
    }
}

/// Always answers correctly, by looking up the definition or word it was shown.
pub struct KnowItAllConsole {
    words_by_definition: HashMap<String, String>,
    definitions_by_word: HashMap<String, String>,
    last_definition: Option<String>,
    pub asked: Vec<String>,
    pub output: Vec<String>,
}

impl KnowItAllConsole {
    pub fn new(bank: &WordBank) -> KnowItAllConsole {
        let definitions_by_word: HashMap<String, String> = bank
            .iter()
            .map(|word| {
                (
                    word.word().to_string(),
                    word.definition(DEFAULT_LANGUAGE).unwrap().to_string(),
                )
            })
            .collect();
        KnowItAllConsole {
            words_by_definition: definitions_by_word
                .iter()
                .map(|(word, definition)| (definition.clone(), word.clone()))
                .collect(),
            definitions_by_word,
            last_definition: None,
            asked: Vec::new(),
            output: Vec::new(),
        }
    }
}

impl Console for KnowItAllConsole {
    fn clear(&mut self) {}

    fn show(&mut self, line: &str) {
        if let Some(definition) = line.strip_prefix("Definition: ") {
            self.last_definition = Some(definition.to_string());
        }
        self.output.push(line.to_string());
    }

    fn select_one(&mut self, title: &str, choices: &[String]) -> Result<usize> {
        let word = title.strip_prefix("Word: ").unwrap();
        self.asked.push(word.to_string());
        let definition = &self.definitions_by_word[word];
        Ok(choices
            .iter()
            .position(|choice| choice == definition)
            .unwrap())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let definition = self.last_definition.take().unwrap();
        let word = &self.words_by_definition[&definition];
        self.asked.push(word.clone());
        let hint = prompt.strip_prefix("Word: ").unwrap();
        Ok(word[hint.len()..].to_string())
    }
}
