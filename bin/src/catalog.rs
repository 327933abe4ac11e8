use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;
use vocab_drill::{PracticeError, Result, WordBank};

/// Where the word list is fetched from when no local file is given.
pub const WORD_LIST_URL: &str = "https://api.linku.la/v1/words";

/// Loads the word list from `words_file` if given, or else from [`WORD_LIST_URL`].
pub fn load_word_bank(words_file: Option<&Path>, language: &str) -> Result<WordBank> {
    let bank = match words_file {
        Some(path) => {
            let file = File::open(path).map_err(|err| {
                PracticeError::CatalogUnavailable(format!("{}: {}", path.display(), err))
            })?;
            WordBank::from_reader(BufReader::new(file), language)?
        }
        None => {
            println!("Fetching word list..");
            let body = reqwest::blocking::get(WORD_LIST_URL)
                .and_then(|response| response.error_for_status())
                .and_then(|response| response.text())
                .map_err(|err| PracticeError::CatalogUnavailable(err.to_string()))?;
            WordBank::from_json_str(&body, language)?
        }
    };
    info!(words = bank.len(), "loaded word list");
    Ok(bank)
}
