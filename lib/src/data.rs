use crate::results::PracticeError;
use crate::results::Result;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::ops::Deref;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// The language whose definitions are shown unless configured otherwise.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A coarse frequency classification for a word.
///
/// The declaration order is the order in which tiers are enumerated when picking one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityTier {
    Core,
    Common,
    Uncommon,
    Obscure,
}

impl RarityTier {
    /// All tiers, in enumeration order.
    pub const ALL: [RarityTier; 4] = [
        RarityTier::Core,
        RarityTier::Common,
        RarityTier::Uncommon,
        RarityTier::Obscure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RarityTier::Core => "core",
            RarityTier::Common => "common",
            RarityTier::Uncommon => "uncommon",
            RarityTier::Obscure => "obscure",
        }
    }
}

impl fmt::Display for RarityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RarityTier {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        RarityTier::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or(())
    }
}

/// A vocabulary word along with its definitions.
///
/// Words are identified by their spelling alone.
#[derive(Debug, Clone)]
pub struct Word {
    word: Arc<str>,
    usage_category: RarityTier,
    definitions: HashMap<String, String>,
}

impl Word {
    /// Constructs a word with no definitions.
    pub fn new(word: &str, usage_category: RarityTier) -> Word {
        Word {
            word: Arc::from(word),
            usage_category,
            definitions: HashMap::new(),
        }
    }

    /// Adds a definition in the given language.
    ///
    /// ```
    /// use vocab_drill::{RarityTier, Word};
    ///
    /// let word = Word::new("toki", RarityTier::Core).with_definition("en", "speech");
    ///
    /// assert_eq!(word.definition("en"), Some("speech"));
    /// assert_eq!(word.definition("eo"), None);
    /// ```
    pub fn with_definition(mut self, language: &str, definition: &str) -> Word {
        self.definitions
            .insert(language.to_string(), definition.to_string());
        self
    }

    /// The word itself.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn usage_category(&self) -> RarityTier {
        self.usage_category
    }

    /// The definition of this word in the given language, if there is one.
    pub fn definition(&self, language: &str) -> Option<&str> {
        self.definitions.get(language).map(String::as_str)
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for Word {}

#[derive(Deserialize)]
struct RawTranslation {
    definition: String,
}

#[derive(Deserialize)]
struct RawWord {
    word: String,
    usage_category: String,
    #[serde(default)]
    translations: HashMap<String, RawTranslation>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWordList {
    Keyed(HashMap<String, RawWord>),
    Listed(Vec<RawWord>),
}

/// Contains every word that may be practiced.
#[derive(Debug, Clone, Default)]
pub struct WordBank {
    words: Vec<Word>,
    index: HashMap<Arc<str>, usize>,
}

impl WordBank {
    /// Constructs a new `WordBank` from the given words.
    ///
    /// Empty words are skipped, and only the first of several words with the same spelling is
    /// kept.
    pub fn from_iterator<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Word>,
    {
        let mut bank = WordBank::default();
        for word in words {
            if word.word.is_empty() || bank.index.contains_key(&word.word) {
                continue;
            }
            bank.index.insert(Arc::clone(&word.word), bank.words.len());
            bank.words.push(word);
        }
        bank
    }

    /// Constructs a new `WordBank` from a JSON word list.
    ///
    /// The list may be either an object keyed by word or an array of entries. Each entry needs a
    /// `word`, a `usage_category`, and `translations` keyed by language, each with a `definition`.
    /// Entries without a definition in `language`, or with an unknown usage category, are
    /// skipped.
    pub fn from_json_str(json: &str, language: &str) -> Result<Self> {
        let raw: RawWordList = serde_json::from_str(json)
            .map_err(|err| PracticeError::CatalogUnavailable(err.to_string()))?;
        Ok(Self::from_raw(raw, language))
    }

    /// Like [`WordBank::from_json_str`], but reads the JSON from the given reader.
    pub fn from_reader<R: Read>(reader: R, language: &str) -> Result<Self> {
        let raw: RawWordList = serde_json::from_reader(reader)
            .map_err(|err| PracticeError::CatalogUnavailable(err.to_string()))?;
        Ok(Self::from_raw(raw, language))
    }

    fn from_raw(raw: RawWordList, language: &str) -> Self {
        let mut entries = match raw {
            RawWordList::Keyed(map) => map.into_values().collect::<Vec<RawWord>>(),
            RawWordList::Listed(list) => list,
        };
        // Object keys come back in arbitrary order.
        entries.sort_by(|a, b| a.word.cmp(&b.word));
        let total = entries.len();
        let bank = WordBank::from_iterator(entries.into_iter().filter_map(|entry| {
            let tier = entry.usage_category.parse::<RarityTier>().ok()?;
            let definition = entry.translations.get(language)?;
            Some(Word::new(&entry.word, tier).with_definition(language, &definition.definition))
        }));
        debug!(
            total,
            kept = bank.len(),
            language,
            "parsed word list"
        );
        bank
    }

    /// Looks up a word by its spelling.
    pub fn get(&self, word: &str) -> Option<&Word> {
        self.index.get(word).map(|index| &self.words[*index])
    }

    /// Returns whether the bank contains the given word.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Returns the words with the given usage category, in bank order.
    pub fn words_in_tier(&self, tier: RarityTier) -> impl Iterator<Item = &Word> {
        self.words
            .iter()
            .filter(move |word| word.usage_category == tier)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Deref for WordBank {
    type Target = [Word];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
