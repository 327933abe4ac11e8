use crate::data::RarityTier;
use crate::data::WordBank;
use crate::results::PracticeError;
use crate::results::Result;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

/// Whether a rarity tier may be chosen, and how likely it is to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityConfig {
    pub enabled: bool,
    pub weight: u32,
}

impl RarityConfig {
    pub fn new(enabled: bool, weight: u32) -> RarityConfig {
        RarityConfig { enabled, weight }
    }
}

/// The learner's record for one known word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawProgressEntry")]
pub struct ProgressEntry {
    /// The number of times this word has been asked.
    pub attempts: u32,
    /// The number of times this word was answered correctly. Never exceeds `attempts`.
    pub correct: u32,
}

/// A record as stored on disk, which may have more correct answers than attempts.
#[derive(Deserialize)]
struct RawProgressEntry {
    attempts: u32,
    correct: u32,
}

impl From<RawProgressEntry> for ProgressEntry {
    fn from(raw: RawProgressEntry) -> Self {
        ProgressEntry::new(raw.attempts, raw.correct)
    }
}

impl ProgressEntry {
    pub fn new(attempts: u32, correct: u32) -> ProgressEntry {
        ProgressEntry {
            attempts,
            correct: correct.min(attempts),
        }
    }

    /// The fraction of attempts that were correct, or 0 if there have been no attempts.
    pub fn accuracy(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.correct as f64 / self.attempts as f64
    }

    /// The accuracy as a percentage, rounded to two decimal places.
    pub fn accuracy_percent(&self) -> f64 {
        (self.accuracy() * 10000.0).round() / 100.0
    }
}

/// Everything the learner has practiced, plus how rarity tiers are weighted.
///
/// A word is "known" iff it has an entry here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    rarity: BTreeMap<RarityTier, RarityConfig>,
    #[serde(default)]
    words: BTreeMap<String, ProgressEntry>,
}

impl Default for Progress {
    fn default() -> Self {
        Progress {
            rarity: BTreeMap::from([
                (RarityTier::Core, RarityConfig::new(true, 100)),
                (RarityTier::Common, RarityConfig::new(true, 0)),
                (RarityTier::Uncommon, RarityConfig::new(true, 0)),
                (RarityTier::Obscure, RarityConfig::new(false, 0)),
            ]),
            words: BTreeMap::new(),
        }
    }
}

impl Progress {
    /// Constructs progress with the given rarity configuration and no known words.
    ///
    /// Tiers missing from `rarity` are treated as disabled.
    pub fn with_rarity<I>(rarity: I) -> Progress
    where
        I: IntoIterator<Item = (RarityTier, RarityConfig)>,
    {
        Progress {
            rarity: rarity.into_iter().collect(),
            words: BTreeMap::new(),
        }
    }

    /// The rarity configuration, in tier enumeration order.
    pub fn rarity(&self) -> &BTreeMap<RarityTier, RarityConfig> {
        &self.rarity
    }

    pub fn set_rarity(&mut self, tier: RarityTier, config: RarityConfig) {
        self.rarity.insert(tier, config);
    }

    /// Returns the record for the given word, if it is known.
    pub fn entry(&self, word: &str) -> Option<&ProgressEntry> {
        self.words.get(word)
    }

    /// Returns whether the given word is known.
    pub fn is_known(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// All known words and their records, sorted by word.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProgressEntry)> {
        self.words.iter().map(|(word, entry)| (word.as_str(), entry))
    }

    /// Returns the number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Starts tracking a new word with no attempts.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        if self.words.contains_key(word) {
            return Err(PracticeError::AlreadyKnown(word.to_string()));
        }
        self.words.insert(word.to_string(), ProgressEntry::default());
        Ok(())
    }

    /// Records one attempt at the given word. Unknown words start being tracked.
    pub fn record_attempt(&mut self, word: &str, was_correct: bool) {
        let entry = self.words.entry(word.to_string()).or_default();
        entry.attempts += 1;
        if was_correct {
            entry.correct += 1;
        }
    }

    /// Credits an already-recorded attempt at the given word as correct.
    ///
    /// Does nothing if that would make `correct` exceed `attempts`.
    pub fn record_correct(&mut self, word: &str) {
        if let Some(entry) = self.words.get_mut(word) {
            if entry.correct < entry.attempts {
                entry.correct += 1;
            }
        }
    }

    /// Puts back a previously read record, discarding any changes made since.
    pub(crate) fn restore(&mut self, word: &str, entry: Option<ProgressEntry>) {
        match entry {
            Some(entry) => {
                self.words.insert(word.to_string(), entry);
            }
            None => {
                self.words.remove(word);
            }
        }
    }

    /// Returns the known words that the bank places in the given tier.
    ///
    /// Known words missing from the bank are ignored.
    pub fn known_words(&self, tier: RarityTier, bank: &WordBank) -> BTreeSet<&str> {
        self.words
            .keys()
            .filter(|word| {
                bank.get(word)
                    .map_or(false, |word| word.usage_category() == tier)
            })
            .map(String::as_str)
            .collect()
    }
}
