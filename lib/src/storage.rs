//! Loading and saving progress and config files.
//!
//! Missing or malformed files are replaced by defaults, so callers never see a parse error.
//! Writes go through a temporary file in the same directory, so a crash mid-write leaves the
//! previous file intact.

use crate::config::Config;
use crate::config::ConfigFile;
use crate::progress::Progress;
use crate::results::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use tracing::debug;
use tracing::warn;

/// The file name used for progress inside the data directory.
pub const PROGRESS_FILE_NAME: &str = "progress.json";
/// The file name used for config inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Somewhere to save progress after every change.
pub trait ProgressSink {
    fn save(&mut self, progress: &Progress) -> Result<()>;
}

/// Saves progress as pretty-printed JSON to a single file.
#[derive(Debug, Clone)]
pub struct ProgressFile {
    path: PathBuf,
}

impl ProgressFile {
    pub fn new<P: Into<PathBuf>>(path: P) -> ProgressFile {
        ProgressFile { path: path.into() }
    }

    /// Uses [`PROGRESS_FILE_NAME`] within the given directory.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> ProgressFile {
        ProgressFile::new(dir.as_ref().join(PROGRESS_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads progress, falling back to (and saving) the defaults if the file is missing,
    /// malformed, or has no rarity tiers.
    pub fn load(&self) -> Result<Progress> {
        match read_json::<Progress>(&self.path) {
            Some(progress) if !progress.rarity().is_empty() => Ok(progress),
            _ => {
                warn!(path = %self.path.display(), "resetting progress");
                let progress = Progress::default();
                save_json(&self.path, &progress)?;
                Ok(progress)
            }
        }
    }
}

impl ProgressSink for ProgressFile {
    fn save(&mut self, progress: &Progress) -> Result<()> {
        save_json(&self.path, progress)
    }
}

/// Loads the config from the given file, falling back to (and saving) the defaults if the file
/// is missing or malformed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    match read_json::<ConfigFile>(path) {
        Some(file) => Ok(file.practice),
        None => {
            warn!(path = %path.display(), "resetting config");
            let config = Config::default();
            save_config(path, &config)?;
            Ok(config)
        }
    }
}

/// Saves the config to the given file.
pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<()> {
    save_json(
        path.as_ref(),
        &ConfigFile {
            practice: config.clone(),
        },
    )
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no existing file");
            return None;
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to read file");
            return None;
        }
    };
    match serde_json::from_str(&contents) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "failed to parse file");
            None
        }
    }
}

fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp_file.persist(path).map_err(|err| err.error)?;
    Ok(())
}
