//! Persistence for the single high-score scalar.
//!
//! The store is a bare integer in a text file. A missing or unreadable file
//! and malformed contents are all treated as a zero high score rather than
//! an error; losing the number is never worth failing startup over.

use std::fs;
use std::path::{Path, PathBuf};

use bevy_ecs::resource::Resource;

use crate::error::GameResult;

#[derive(Resource, Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored high score, treating any failure as zero.
    pub fn load(&self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return 0,
        };

        match contents.trim().parse::<u32>() {
            Ok(score) => score,
            Err(_) => {
                tracing::warn!(path = %self.path.display(), "High score file is malformed, treating as 0");
                0
            }
        }
    }

    pub fn save(&self, score: u32) -> GameResult<()> {
        fs::write(&self.path, score.to_string())?;
        tracing::debug!(score, path = %self.path.display(), "High score saved");
        Ok(())
    }
}
