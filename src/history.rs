use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use thiserror::Error;

const APP_DIR_NAME: &str = "arcade-snake";
const HISTORY_FILE_NAME: &str = "history.txt";

/// Most recent results kept on disk.
pub const HISTORY_CAPACITY: usize = 10;

/// One finished session, newest entries stored first.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct HistoryEntry {
    pub score: u32,
    pub level: u32,
    pub elapsed_secs: u64,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} | Level: {} | Time: {}s",
            self.score, self.level, self.elapsed_secs
        )
    }
}

/// A history line did not match the persisted format.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[error("malformed history line")]
pub struct MalformedHistoryLine;

impl FromStr for HistoryEntry {
    type Err = MalformedHistoryLine;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s.strip_prefix("Score: ").ok_or(MalformedHistoryLine)?;
        let (score, rest) = rest.split_once(" | Level: ").ok_or(MalformedHistoryLine)?;
        let (level, time) = rest.split_once(" | Time: ").ok_or(MalformedHistoryLine)?;
        let secs = time.strip_suffix('s').ok_or(MalformedHistoryLine)?;

        Ok(Self {
            score: score.parse().map_err(|_| MalformedHistoryLine)?,
            level: level.parse().map_err(|_| MalformedHistoryLine)?,
            elapsed_secs: secs.parse().map_err(|_| MalformedHistoryLine)?,
        })
    }
}

/// Append-only recent-results list, newest first, capped at
/// `HISTORY_CAPACITY` entries.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries from newest to oldest.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Inserts `entry` at the front, dropping the oldest past capacity.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAPACITY);
    }

    /// Loads history from the platform data directory.
    ///
    /// A missing file is first-run, not an error. A file that does not parse
    /// is recovered as empty history; only genuine I/O failures surface.
    pub fn load() -> io::Result<Self> {
        Self::load_from_path(&history_path())
    }

    /// Rewrites the full history file, creating parent directories.
    pub fn save(&self) -> io::Result<()> {
        self.save_to_path(&history_path())
    }

    fn load_from_path(path: &Path) -> io::Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::new()),
            Err(e) => return Err(e),
        };

        let parsed: Result<Vec<HistoryEntry>, MalformedHistoryLine> = raw
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(HistoryEntry::from_str)
            .collect();

        let mut entries = parsed.unwrap_or_default();
        entries.truncate(HISTORY_CAPACITY);
        Ok(Self { entries })
    }

    fn save_to_path(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut contents = String::new();
        for entry in &self.entries {
            contents.push_str(&entry.to_string());
            contents.push('\n');
        }

        fs::write(path, contents)
    }
}

/// Returns the platform-correct history file path.
#[must_use]
pub fn history_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(HISTORY_FILE_NAME);
    base
}
