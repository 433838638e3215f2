//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::Vec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the playfield, in pixels.
pub const SCREEN_SIZE: Vec2 = Vec2::new(400.0, 600.0);

/// The height above which an ascending player scrolls the camera instead of moving.
pub const SCROLL_THRESHOLD: f32 = 200.0;
/// Downward acceleration applied to the player every tick.
pub const GRAVITY: f32 = 1.0;
/// Vertical velocity set on the player when landing on a platform.
pub const JUMP_IMPULSE: f32 = -20.0;
/// Horizontal player speed per tick, before the difficulty multiplier.
pub const PLAYER_SPEED: f32 = 10.0;
/// The size of the player's bounding box, in pixels.
pub const PLAYER_SIZE: Vec2 = Vec2::new(45.0, 45.0);
/// Where the player's bounding box is centered at the start of a run.
pub const PLAYER_SPAWN: Vec2 = Vec2::new(200.0, 450.0);

/// The maximum number of live platforms; the spawner tops the world up to this count.
pub const MAX_PLATFORMS: usize = 10;
/// The height of every platform, in pixels.
pub const PLATFORM_HEIGHT: f32 = 10.0;
/// Inclusive range of freshly spawned platform widths, in pixels.
pub const PLATFORM_WIDTH_RANGE: (i32, i32) = (40, 60);
/// Inclusive range of the vertical gap between a new platform and the current topmost one.
/// The upper bound keeps every platform reachable within one jump.
pub const PLATFORM_GAP_RANGE: (i32, i32) = (30, 80);
/// A moving platform reverses after this many ticks of continuous motion.
pub const PLATFORM_REVERSE_TICKS: u32 = 100;
/// Probability that a new platform is destroyable.
pub const PLATFORM_DESTROYABLE_CHANCE: f64 = 0.25;
/// Per-tick removal probability for a vacated destroyable platform that was stood on.
pub const PLATFORM_DECAY_CHANCE: f64 = 0.25;
/// Score required before the spawner may produce moving platforms.
pub const MOVING_PLATFORM_SCORE: f32 = 1000.0;

/// The seed platform present before the first spawn decision.
pub const SEED_PLATFORM_POS: Vec2 = Vec2::new(150.0, 550.0);
pub const SEED_PLATFORM_WIDTH: f32 = 100.0;

/// Score required before the spawner may produce an enemy.
pub const ENEMY_SCORE: f32 = 2000.0;
/// Horizontal enemy speed per tick, before the difficulty multiplier.
pub const ENEMY_BASE_SPEED: f32 = 2.0;
/// The size of an enemy's bounding box, in pixels.
pub const ENEMY_SIZE: Vec2 = Vec2::new(96.0, 96.0);
/// Enemies spawn at a random height this far away from the top and bottom edges.
pub const ENEMY_SPAWN_MARGIN: i32 = 100;
/// Number of frames in the enemy's flight animation.
pub const ENEMY_FRAME_COUNT: usize = 4;
/// Seconds each enemy animation frame is held. Enemy animation is delta-time
/// based while physics is tick based; the two are intentionally not unified.
pub const ENEMY_FRAME_DURATION: f32 = 0.1;

/// The allowed difficulty range; values outside are clamped.
pub const DIFFICULTY_MIN: f32 = 0.5;
pub const DIFFICULTY_MAX: f32 = 3.0;
