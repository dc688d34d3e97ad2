//! High-score persistence.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::error::GameResult;

/// Where the high score lives between games.
pub trait ScoreStore {
    /// Returns the stored high score, or 0 when nothing was stored yet.
    fn load_high_score(&self) -> u32;

    fn save_high_score(&mut self, score: u32) -> GameResult<()>;
}

/// Keeps the high score in memory, for tests and throwaway sessions.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    high_score: u32,
}

impl MemoryStore {
    pub fn new(high_score: u32) -> Self {
        Self { high_score }
    }
}

impl ScoreStore for MemoryStore {
    fn load_high_score(&self) -> u32 {
        self.high_score
    }

    fn save_high_score(&mut self, score: u32) -> GameResult<()> {
        self.high_score = score;
        Ok(())
    }
}

/// Keeps the high score as a decimal number in a text file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScoreStore for FileStore {
    fn load_high_score(&self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or_else(|e| {
                warn!(path = %self.path.display(), error = %e, "Unreadable high score, starting from 0");
                0
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No high score stored yet");
                0
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Could not read high score, starting from 0");
                0
            }
        }
    }

    fn save_high_score(&mut self, score: u32) -> GameResult<()> {
        fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}
