#[macro_use]
extern crate assert_matches;

mod common;

use common::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::result::Result;
use vocab_drill::*;

fn params(word_rate: u32, count: Option<u32>) -> SessionParams {
    SessionParams {
        word_rate,
        count,
        ..SessionParams::default()
    }
}

#[test]
fn session_stops_after_count() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    let config = Config::default();
    let mut console = KnowItAllConsole::new(&bank);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(2, Some(3)),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(
        summary,
        SessionSummary {
            questions: 3,
            correct: 3,
            end: SessionEnd::CountReached,
        }
    );
    // Once after introducing words, then once per answer.
    assert_eq!(sink.saves.len(), 4);
    assert_eq!(sink.saves.last(), Some(&progress));
    assert_eq!(progress.len(), 2);
    assert_eq!(
        progress.entries().map(|(_, entry)| entry.attempts).sum::<u32>(),
        3
    );
    assert!(console
        .asked
        .iter()
        .all(|word| bank.get(word).unwrap().usage_category() == RarityTier::Core));
    assert!(console.output.iter().any(|line| line == "Session over!"));
    Ok(())
}

#[test]
fn session_with_zero_count_asks_nothing() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    let config = Config::default();
    let mut console = KnowItAllConsole::new(&bank);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(5, Some(0)),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(summary.questions, 0);
    assert_eq!(summary.end, SessionEnd::CountReached);
    assert!(console.asked.is_empty());
    assert!(sink.saves.is_empty());
    Ok(())
}

#[test]
fn interrupted_session_keeps_last_saved_progress() -> Result<(), PracticeError> {
    let bank = create_word_bank(&[("toki", RarityTier::Core, "speech")]);
    let mut progress = Progress::default();
    let config = typed_only_config();
    // Answers the first question, then interrupts the second.
    let mut console = ScriptedConsole::new(vec![line("toki")]);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(5, None),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(
        summary,
        SessionSummary {
            questions: 1,
            correct: 1,
            end: SessionEnd::Interrupted,
        }
    );
    assert_eq!(sink.saves.len(), 2);
    assert_eq!(sink.saves.last(), Some(&progress));
    assert_eq!(progress.entry("toki"), Some(&ProgressEntry::new(1, 1)));
    assert!(console.showed("Session interrupted."));
    Ok(())
}

#[test]
fn interrupting_first_question_keeps_introduced_words() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    let config = typed_only_config();
    let mut console = ScriptedConsole::new(vec![]);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(4);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(3, None),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(summary.questions, 0);
    assert_eq!(summary.end, SessionEnd::Interrupted);
    assert_eq!(sink.saves, vec![progress.clone()]);
    assert_eq!(progress.len(), 3);
    assert!(progress
        .entries()
        .all(|(_, entry)| *entry == ProgressEntry::new(0, 0)));
    Ok(())
}

#[test]
fn cancelled_session_asks_nothing() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    let config = Config::default();
    let mut console = KnowItAllConsole::new(&bank);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);
    let cancel = CancelFlag::new();
    cancel.cancel();

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(5, None),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .with_cancel(cancel)
    .run()?;

    assert_eq!(summary.end, SessionEnd::Interrupted);
    assert!(console.asked.is_empty());
    assert!(sink.saves.is_empty());
    assert!(progress.is_empty());
    Ok(())
}

#[test]
fn session_moves_on_when_a_tier_is_exhausted() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    progress.set_rarity(RarityTier::Uncommon, RarityConfig::new(true, 10));
    let core_words: Vec<&str> = CORE_WORDS.iter().map(|(word, _)| *word).collect();
    known(&mut progress, &core_words, 5, 5);
    let config = Config::default();
    let mut console = KnowItAllConsole::new(&bank);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(8);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(5, Some(4)),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(summary.questions, 4);
    assert_eq!(summary.end, SessionEnd::CountReached);
    assert!(console
        .asked
        .iter()
        .all(|word| bank.get(word).unwrap().usage_category() == RarityTier::Uncommon));
    assert!(progress.is_known("kipisi"));
    assert!(progress.is_known("leko"));
    Ok(())
}

#[test]
fn session_ends_when_every_tier_is_exhausted() -> Result<(), PracticeError> {
    let bank = sample_word_bank();
    let mut progress = Progress::default();
    let core_words: Vec<&str> = CORE_WORDS.iter().map(|(word, _)| *word).collect();
    known(&mut progress, &core_words, 5, 5);
    let config = Config::default();
    let mut console = ScriptedConsole::new(vec![]);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    let summary = Session::new(
        &bank,
        &mut progress,
        &config,
        params(5, None),
        &mut console,
        &mut sink,
        &mut rng,
    )
    .run()?;

    assert_eq!(summary.questions, 0);
    assert_eq!(summary.end, SessionEnd::PoolExhausted);
    assert!(sink.saves.is_empty());
    assert!(console.prompts.is_empty());
    Ok(())
}

#[test]
fn session_without_eligible_tier_fails() {
    let bank = sample_word_bank();
    let mut progress = Progress::with_rarity(
        RarityTier::ALL.map(|tier| (tier, RarityConfig::new(false, 100))),
    );
    let config = Config::default();
    let mut console = ScriptedConsole::new(vec![]);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    assert_matches!(
        Session::new(
            &bank,
            &mut progress,
            &config,
            params(5, None),
            &mut console,
            &mut sink,
            &mut rng,
        )
        .run(),
        Err(PracticeError::NoEligibleTier)
    );
    assert!(sink.saves.is_empty());
}

#[test]
fn session_with_empty_word_list_fails() {
    let bank = WordBank::from_iterator(Vec::new());
    let mut progress = Progress::default();
    let config = Config::default();
    let mut console = ScriptedConsole::new(vec![]);
    let mut sink = RecordingSink::default();
    let mut rng = StdRng::seed_from_u64(1);

    assert_matches!(
        Session::new(
            &bank,
            &mut progress,
            &config,
            params(5, None),
            &mut console,
            &mut sink,
            &mut rng,
        )
        .run(),
        Err(PracticeError::CatalogUnavailable(_))
    );
}
