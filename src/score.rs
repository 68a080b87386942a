use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "arcade-snake";
const BEST_FILE_NAME: &str = "best.json";

/// Best result reached across all sessions.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestRecord {
    pub score: u32,
    pub level: u32,
}

impl BestRecord {
    /// Folds a finished session in; returns true when the record improved.
    pub fn update(&mut self, score: u32, level: u32) -> bool {
        if score > self.score {
            self.score = score;
            self.level = level;
            return true;
        }
        false
    }
}

/// Returns the platform-correct best-record file path.
#[must_use]
pub fn best_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(BEST_FILE_NAME);
    base
}

/// Loads the best record from disk.
///
/// Returns the default record when the file does not yet exist (first run).
/// Returns `Err` when the file exists but cannot be read or parsed, so the
/// caller can surface a warning before entering raw terminal mode.
pub fn load_best() -> io::Result<BestRecord> {
    load_best_from_path(&best_path())
}

/// Saves the best record to disk, creating parent directories when needed.
pub fn save_best(record: BestRecord) -> io::Result<()> {
    save_best_to_path(&best_path(), record)
}

fn load_best_from_path(path: &Path) -> io::Result<BestRecord> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BestRecord::default()),
        Err(e) => return Err(e),
    };

    serde_json::from_str(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

fn save_best_to_path(path: &Path, record: BestRecord) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&record)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;

    fs::write(path, json)
}
