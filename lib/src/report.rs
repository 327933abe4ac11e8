use crate::data::RarityTier;
use crate::data::WordBank;
use crate::progress::Progress;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// One line of the learned-words listing.
#[derive(Debug, Clone, PartialEq)]
pub struct LearnedWord {
    pub word: String,
    /// Accuracy as a percentage, rounded to two decimal places.
    pub accuracy_percent: f64,
    pub attempts: u32,
}

impl fmt::Display for LearnedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}%) - {} attempts",
            self.word, self.accuracy_percent, self.attempts
        )
    }
}

/// Lists every known word, most accurate first. Words with equal accuracy stay in alphabetical
/// order.
pub fn list_learned_words(progress: &Progress) -> Vec<LearnedWord> {
    let mut entries: Vec<_> = progress.entries().collect();
    entries.sort_by(|(_, a), (_, b)| {
        b.accuracy()
            .partial_cmp(&a.accuracy())
            .unwrap_or(Ordering::Equal)
    });
    entries
        .into_iter()
        .map(|(word, entry)| LearnedWord {
            word: word.to_string(),
            accuracy_percent: entry.accuracy_percent(),
            attempts: entry.attempts,
        })
        .collect()
}

/// How many words the learner knows, overall and per rarity tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total: usize,
    /// Counts for every tier, including tiers with no known words.
    pub per_tier: BTreeMap<RarityTier, usize>,
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        write!(f, "Total learned words: {}", self.total)?;
        for (tier, count) in &self.per_tier {
            write!(f, "\nLearned {} words: {}", tier, count)?;
        }
        Ok(())
    }
}

/// Counts the known words in each rarity tier. Known words missing from the bank only count
/// towards the total.
pub fn compute_statistics(bank: &WordBank, progress: &Progress) -> Statistics {
    Statistics {
        total: progress.len(),
        per_tier: RarityTier::ALL
            .into_iter()
            .map(|tier| (tier, progress.known_words(tier, bank).len()))
            .collect(),
    }
}
