use bevy_ecs::{component::Component, resource::Resource};
use rand::rngs::SmallRng;

use crate::constants::{ENEMY_FRAME_COUNT, ENEMY_FRAME_DURATION};
use crate::geometry::Rect;

/// The bounding box of an entity, in screen coordinates.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Body(pub Rect);

/// The player character.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    /// Vertical velocity in pixels per tick; positive is downward.
    pub vel_y: f32,
    /// Which way the sprite faces; follows the last horizontal input.
    pub facing_right: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            vel_y: 0.0,
            facing_right: false,
        }
    }
}

/// A single platform and its motion/destruction state.
#[derive(Component, Debug, Clone, Copy)]
pub struct Platform {
    pub moving: bool,
    /// Horizontal motion direction, -1.0 or 1.0.
    pub direction: f32,
    /// Motion speed in pixels per tick, before the difficulty multiplier.
    pub speed: f32,
    /// Ticks of continuous motion since the last reversal.
    pub move_counter: u32,
    pub destroyable: bool,
    /// Set once the player has stood on a destroyable platform. One-way:
    /// never reverts, and arms the per-tick decay roll once vacated.
    pub stepped_on: bool,
}

impl Platform {
    /// A platform that never moves and never decays.
    pub fn fixed() -> Self {
        Self {
            moving: false,
            direction: 1.0,
            speed: 0.0,
            move_counter: 0,
            destroyable: false,
            stepped_on: false,
        }
    }
}

/// An enemy bird flying right-to-left across the screen.
#[derive(Component, Debug, Clone)]
pub struct Enemy {
    /// Horizontal speed in pixels per tick, before the difficulty multiplier.
    pub speed: f32,
    pub animator: FrameAnimator,
}

impl Enemy {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            animator: FrameAnimator::new(ENEMY_FRAME_COUNT, ENEMY_FRAME_DURATION),
        }
    }
}

/// A frame-cycling animator: the state is a frame index in `[0, frame_count)`,
/// advancing whenever the accumulated delta time reaches the frame duration
/// and wrapping modulo the frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAnimator {
    frame_count: usize,
    frame_duration: f32,
    current_frame: usize,
    time_bank: f32,
}

impl FrameAnimator {
    pub fn new(frame_count: usize, frame_duration: f32) -> Self {
        Self {
            frame_count,
            frame_duration,
            current_frame: 0,
            time_bank: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.time_bank += dt;
        while self.time_bank >= self.frame_duration {
            self.time_bank -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.frame_count;
        }
    }

    pub fn frame(&self) -> usize {
        self.current_frame
    }
}

/// Cumulative run score. Only ever grows while a run is active.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Score(pub f32);

impl Score {
    /// The integer value used for display and persistence.
    pub fn points(&self) -> u32 {
        self.0 as u32
    }
}

/// The best score seen so far, including past processes.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct HighScore(pub u32);

/// The fixed-per-run multiplier on speeds and score rate.
#[derive(Resource, Debug, Clone, Copy)]
pub struct Difficulty(pub f32);

/// The camera displacement produced by the player this tick. Non-negative;
/// positive values push every world entity downward.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct Scroll(pub f32);

/// Accumulated background offset, wrapped at the screen height.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct BgScroll(pub f32);

/// Seconds elapsed since the previous tick. Drives enemy animation only;
/// physics advances per tick.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct DeltaTime(pub f32);

/// The RNG behind all spawn and decay decisions. A resource so tests can
/// seed it deterministically.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

/// High-level state of the current run.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStage {
    /// The simulation is advancing.
    #[default]
    Playing,
    /// The run has ended; waiting for a restart request.
    GameOver,
}
