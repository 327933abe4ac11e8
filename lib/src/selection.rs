//! Choosing which word to practice next.
//!
//! A word is chosen in two steps: first a rarity tier is drawn by weight, then a word is drawn
//! from the known words of that tier, weighted by how well the learner knows each one. When every
//! known word of the tier is mastered, new words are introduced instead.

use crate::config::SessionParams;
use crate::data::RarityTier;
use crate::data::Word;
use crate::data::WordBank;
use crate::progress::Progress;
use crate::progress::ProgressEntry;
use crate::progress::RarityConfig;
use crate::results::PracticeError;
use crate::results::Result;
use crate::storage::ProgressSink;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;
use tracing::info;

/// Words need at least this many attempts before their accuracy affects their weight.
pub const MIN_ATTEMPTS_FOR_WEIGHTING: u32 = 5;
/// The number of copies of a word in the candidate list before accounting for accuracy.
pub const BASE_WEIGHT: i64 = 5;

/// Draws an enabled rarity tier, with probability proportional to its weight.
///
/// Fails with [`PracticeError::NoEligibleTier`] if no enabled tier has a positive weight.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use vocab_drill::{pick_tier, Progress, RarityTier};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let progress = Progress::default();
///
/// assert_eq!(pick_tier(progress.rarity(), &mut rng).unwrap(), RarityTier::Core);
/// ```
pub fn pick_tier<R: Rng + ?Sized>(
    rarity: &BTreeMap<RarityTier, RarityConfig>,
    rng: &mut R,
) -> Result<RarityTier> {
    pick_tier_excluding(rarity, &[], rng)
}

/// Like [`pick_tier`], but never returns one of the `excluded` tiers.
pub fn pick_tier_excluding<R: Rng + ?Sized>(
    rarity: &BTreeMap<RarityTier, RarityConfig>,
    excluded: &[RarityTier],
    rng: &mut R,
) -> Result<RarityTier> {
    let enabled: Vec<(RarityTier, u64)> = rarity
        .iter()
        .filter(|(tier, config)| config.enabled && !excluded.contains(tier))
        .map(|(tier, config)| (*tier, config.weight as u64))
        .collect();
    let total_weight: u64 = enabled.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0 {
        return Err(PracticeError::NoEligibleTier);
    }
    let chosen = rng.gen_range(0..total_weight);
    let mut cumulative = 0;
    for (tier, weight) in enabled {
        cumulative += weight;
        if cumulative > chosen {
            debug!(%tier, chosen, total_weight, "picked rarity tier");
            return Ok(tier);
        }
    }
    unreachable!("the draw is always below the total weight")
}

/// Computes how many copies of a word go into the candidate list, given its record.
///
/// Words with fewer than [`MIN_ATTEMPTS_FOR_WEIGHTING`] attempts get [`BASE_WEIGHT`]. After
/// that, words with at least 80% accuracy lose weight as they approach 100%, while words below
/// 80% gain weight as their accuracy rises. The result is never negative.
pub fn word_weight(entry: &ProgressEntry) -> u32 {
    let mut weight = BASE_WEIGHT;
    if entry.attempts >= MIN_ATTEMPTS_FOR_WEIGHTING {
        let accuracy = entry.accuracy();
        if accuracy >= 0.8 {
            weight -= ((accuracy - 0.79) * 20.0).floor().round() as i64;
        } else {
            weight += (accuracy * 20.0).round() as i64;
        }
    }
    weight.max(0) as u32
}

/// Returns whether the word has enough attempts at a high enough accuracy to stop being a
/// reason to hold back new words.
pub fn is_mastered(entry: &ProgressEntry, min_accuracy: f64) -> bool {
    entry.attempts >= MIN_ATTEMPTS_FOR_WEIGHTING && entry.accuracy() >= min_accuracy
}

/// Builds the weighted candidate list for the given tier.
///
/// Each known word of the tier appears [`word_weight`] times. If there are no such words, or
/// every one of them is mastered, the list is empty, which signals that new words should be
/// introduced.
pub fn sample_candidates<'a>(
    bank: &'a WordBank,
    progress: &Progress,
    tier: RarityTier,
    min_accuracy: f64,
) -> Vec<&'a Word> {
    let mut candidates = Vec::new();
    let mut all_mastered = true;
    for word in progress.known_words(tier, bank) {
        let (Some(word), Some(entry)) = (bank.get(word), progress.entry(word)) else {
            continue;
        };
        if !is_mastered(entry, min_accuracy) {
            all_mastered = false;
        }
        let weight = word_weight(entry) as usize;
        candidates.extend(std::iter::repeat(word).take(weight));
    }
    if all_mastered {
        return Vec::new();
    }
    candidates
}

/// Introduces up to `rate` unknown words of the given tier, chosen uniformly at random.
///
/// Returns the words that were introduced, which is empty once every word of the tier is known.
pub fn inject_new_words<R: Rng + ?Sized>(
    bank: &WordBank,
    progress: &mut Progress,
    tier: RarityTier,
    rate: u32,
    rng: &mut R,
) -> Result<Vec<String>> {
    let mut unseen: Vec<&Word> = bank
        .words_in_tier(tier)
        .filter(|word| !progress.is_known(word.word()))
        .collect();
    let mut injected = Vec::new();
    for _ in 0..rate {
        if unseen.is_empty() {
            break;
        }
        let chosen = unseen.swap_remove(rng.gen_range(0..unseen.len()));
        progress.add_word(chosen.word())?;
        injected.push(chosen.word().to_string());
    }
    if !injected.is_empty() {
        info!(%tier, words = ?injected, "introduced new words");
    }
    Ok(injected)
}

/// Picks the next word to practice from the given tier.
///
/// New words are introduced (and saved) whenever the candidate list is empty. Fails with
/// [`PracticeError::ExhaustedPool`] if the list is empty and there are no more words to
/// introduce.
pub fn pick_word<'a, R, S>(
    bank: &'a WordBank,
    progress: &mut Progress,
    tier: RarityTier,
    params: &SessionParams,
    sink: &mut S,
    rng: &mut R,
) -> Result<&'a Word>
where
    R: Rng + ?Sized,
    S: ProgressSink + ?Sized,
{
    loop {
        let candidates = sample_candidates(bank, progress, tier, params.min_accuracy);
        if let Some(word) = candidates.choose(rng) {
            return Ok(*word);
        }
        let injected = inject_new_words(bank, progress, tier, params.word_rate, rng)?;
        if injected.is_empty() {
            return Err(PracticeError::ExhaustedPool(tier));
        }
        sink.save(progress)?;
    }
}
