//! Endless vertical-scrolling platformer library crate.

pub mod app;
pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod game;
pub mod geometry;
pub mod highscore;
pub mod input;
pub mod systems;
