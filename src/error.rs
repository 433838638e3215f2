//! Centralized error types for the game.
//!
//! This module defines all error types used throughout the application,
//! providing a consistent error handling approach.

use std::io;

/// Main error type for the game.
///
/// This is the primary error type that should be used in public APIs.
/// It can represent any error that can occur during game operation.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

/// Errors related to audio setup and playback.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Failed to open audio device: {0}")]
    DeviceInit(String),

    #[error("Failed to build sound cue: {0}")]
    CueBuild(String),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
