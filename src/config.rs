use std::path::PathBuf;

use clap::Parser;

use crate::constants::{DIFFICULTY_MAX, DIFFICULTY_MIN};

/// Pre-run configuration. Fixed for the duration of one run.
#[derive(Parser, Debug, Clone)]
#[command(name = "bounce", about = "An endless vertical-scrolling platformer")]
pub struct Config {
    /// Difficulty multiplier applied to movement speeds and score rate.
    /// Clamped to [0.5, 3.0].
    #[arg(long, default_value_t = 1.0)]
    pub difficulty: f32,

    /// Start with all sound muted.
    #[arg(long)]
    pub muted: bool,

    /// Where the high score is persisted.
    #[arg(long, default_value = "score.txt")]
    pub high_score_file: PathBuf,
}

impl Config {
    /// Returns the configuration with the difficulty clamped to its legal range.
    pub fn clamped(mut self) -> Self {
        let requested = self.difficulty;
        self.difficulty = self.difficulty.clamp(DIFFICULTY_MIN, DIFFICULTY_MAX);
        if self.difficulty != requested {
            tracing::warn!(requested, clamped = self.difficulty, "Difficulty out of range");
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_difficulty(difficulty: f32) -> Config {
        Config {
            difficulty,
            muted: false,
            high_score_file: PathBuf::from("score.txt"),
        }
    }

    #[test]
    fn test_difficulty_clamped_low() {
        assert_eq!(config_with_difficulty(0.1).clamped().difficulty, DIFFICULTY_MIN);
    }

    #[test]
    fn test_difficulty_clamped_high() {
        assert_eq!(config_with_difficulty(10.0).clamped().difficulty, DIFFICULTY_MAX);
    }

    #[test]
    fn test_difficulty_in_range_untouched() {
        assert_eq!(config_with_difficulty(1.5).clamped().difficulty, 1.5);
    }
}
