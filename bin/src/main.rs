use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vocab_drill::storage::{self, ProgressFile, CONFIG_FILE_NAME};
use vocab_drill::*;

mod catalog;
mod terminal;

use terminal::TerminalConsole;

/// Practice vocabulary, with new words introduced as you master the ones you know.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Skip the main menu and go straight to practice.
    #[arg(short, long, visible_alias = "kitz")]
    practice: bool,

    /// Skip the main menu and list learned words.
    #[arg(short = 'W', long)]
    words: bool,

    /// Skip the main menu and show statistics.
    #[arg(short = 'S', long)]
    stats: bool,

    /// How many new words are introduced at a time.
    #[arg(short = 'w', long, default_value_t = 5)]
    word_rate: u32,

    /// Accuracy (in percent, 0-100) every known word needs before new words are introduced.
    #[arg(short = 'a', long, default_value_t = 80.0)]
    min_accuracy: f64,

    /// Number of words to practice before exiting.
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    count: Option<u32>,

    /// Read the word list from this JSON file instead of downloading it.
    #[arg(short = 'f', long)]
    words_file: Option<PathBuf>,

    /// Directory holding progress.json and config.json.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Practice,
    LearnedWords,
    Statistics,
    Exit,
}

const MENU: [(&str, Mode); 4] = [
    ("Practice", Mode::Practice),
    ("Learned Words", Mode::LearnedWords),
    ("Statistics", Mode::Statistics),
    ("Exit", Mode::Exit),
];

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let progress_file = ProgressFile::in_dir(&args.data_dir);
    let mut progress = progress_file.load()?;
    let config = storage::load_config(args.data_dir.join(CONFIG_FILE_NAME))?;
    let params = SessionParams::from_percent(args.word_rate, args.min_accuracy, args.count);
    let cancel = CancelFlag::new();

    let mode = if args.practice {
        Mode::Practice
    } else if args.words {
        Mode::LearnedWords
    } else if args.stats {
        Mode::Statistics
    } else {
        let choices: Vec<String> = MENU.iter().map(|(name, _)| name.to_string()).collect();
        // The menu's raw mode ends here, before anything is fetched or printed.
        let choice = TerminalConsole::new(cancel.clone())?.select_one("", &choices);
        match choice {
            Ok(index) => MENU[index].1,
            Err(PracticeError::Interrupted) => return Ok(interrupted()),
            Err(err) => return Err(err.into()),
        }
    };

    match mode {
        Mode::Practice => {
            let bank = catalog::load_word_bank(args.words_file.as_deref(), &config.language)?;
            let mut terminal = TerminalConsole::new(cancel.clone())?;
            let mut sink = progress_file.clone();
            let mut rng = rand::thread_rng();
            let summary = Session::new(
                &bank,
                &mut progress,
                &config,
                params,
                &mut terminal,
                &mut sink,
                &mut rng,
            )
            .with_cancel(cancel)
            .run()?;
            drop(terminal);
            if summary.end == SessionEnd::Interrupted {
                return Ok(interrupted());
            }
        }
        Mode::LearnedWords => {
            let learned = list_learned_words(&progress);
            println!("Learned Words ({}):", learned.len());
            for word in learned {
                println!("{}", word);
            }
        }
        Mode::Statistics => {
            let bank = catalog::load_word_bank(args.words_file.as_deref(), &config.language)?;
            println!("{}", compute_statistics(&bank, &progress));
        }
        Mode::Exit => {}
    }
    Ok(ExitCode::SUCCESS)
}

fn interrupted() -> ExitCode {
    eprintln!("Exiting due to ctrl+c interrupt");
    ExitCode::FAILURE
}
