//! The RNG-driven spawner: keeps the platform count topped up and introduces
//! the enemy once the score gate is passed.

use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::constants::{
    ENEMY_BASE_SPEED, ENEMY_SCORE, ENEMY_SIZE, ENEMY_SPAWN_MARGIN, MAX_PLATFORMS, MOVING_PLATFORM_SCORE,
    PLATFORM_DESTROYABLE_CHANCE, PLATFORM_GAP_RANGE, PLATFORM_HEIGHT, PLATFORM_WIDTH_RANGE, SCREEN_SIZE,
    SEED_PLATFORM_POS, SEED_PLATFORM_WIDTH,
};
use crate::geometry::Rect;
use crate::systems::components::{Body, Difficulty, Enemy, GameRng, GameStage, Platform, Score};

/// The static platform guaranteed to exist before the first spawn decision.
pub fn seed_platform() -> (Platform, Body) {
    (
        Platform::fixed(),
        Body(Rect::new(
            SEED_PLATFORM_POS.x,
            SEED_PLATFORM_POS.y,
            SEED_PLATFORM_WIDTH,
            PLATFORM_HEIGHT,
        )),
    )
}

/// Rolls a new platform above the current topmost one.
///
/// The gap is bounded so the new platform is always reachable within one
/// jump. A coin flip picks one of two platform categories; the first enables
/// motion, but only once the score has passed the moving-platform gate.
/// Destroyability is an independent roll.
pub fn roll_platform(rng: &mut SmallRng, topmost_y: f32, score: f32) -> (Platform, Body) {
    let width = rng.random_range(PLATFORM_WIDTH_RANGE.0..=PLATFORM_WIDTH_RANGE.1);
    let x = rng.random_range(0..=(SCREEN_SIZE.x as i32 - width));
    let gap = rng.random_range(PLATFORM_GAP_RANGE.0..=PLATFORM_GAP_RANGE.1);

    let moving = rng.random_bool(0.5) && score > MOVING_PLATFORM_SCORE;
    let destroyable = rng.random_bool(PLATFORM_DESTROYABLE_CHANCE);

    let platform = Platform {
        moving,
        direction: if rng.random_bool(0.5) { 1.0 } else { -1.0 },
        speed: rng.random_range(1..=2) as f32,
        move_counter: rng.random_range(0..=50),
        destroyable,
        stepped_on: false,
    };

    let body = Body(Rect::new(
        x as f32,
        topmost_y - gap as f32,
        width as f32,
        PLATFORM_HEIGHT,
    ));

    (platform, body)
}

/// Rolls an enemy centered on the right screen edge at a random height.
pub fn roll_enemy(rng: &mut SmallRng, difficulty: f32) -> (Enemy, Body) {
    let y = rng.random_range(ENEMY_SPAWN_MARGIN..=(SCREEN_SIZE.y as i32 - ENEMY_SPAWN_MARGIN));
    let body = Body(Rect::from_center(Vec2::new(SCREEN_SIZE.x, y as f32), ENEMY_SIZE));
    (Enemy::new(ENEMY_BASE_SPEED * difficulty), body)
}

pub fn spawn_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    score: Res<Score>,
    difficulty: Res<Difficulty>,
    mut rng: ResMut<GameRng>,
    platforms: Query<&Body, With<Platform>>,
    enemies: Query<(), With<Enemy>>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    if platforms.iter().count() < MAX_PLATFORMS {
        let topmost_y = platforms.iter().map(|b| b.0.top()).reduce(f32::min);
        match topmost_y {
            Some(topmost_y) => {
                let (platform, body) = roll_platform(&mut rng.0, topmost_y, score.0);
                tracing::trace!(
                    x = body.0.left(),
                    y = body.0.top(),
                    moving = platform.moving,
                    destroyable = platform.destroyable,
                    "Platform spawned"
                );
                commands.spawn((platform, body));
            }
            // The seed platform makes this unreachable during a run.
            None => tracing::warn!("No live platforms to spawn above, skipping spawn"),
        }
    }

    if enemies.is_empty() && score.0 > ENEMY_SCORE {
        let (enemy, body) = roll_enemy(&mut rng.0, difficulty.0);
        tracing::debug!(y = body.0.center().y, speed = enemy.speed, "Enemy spawned");
        commands.spawn((enemy, body));
    }
}
