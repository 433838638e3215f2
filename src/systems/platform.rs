//! Per-platform motion, scroll application, and the destroyable-decay rule.

use bevy_ecs::entity::Entity;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use rand::Rng;

use crate::constants::{PLATFORM_DECAY_CHANCE, PLATFORM_REVERSE_TICKS, SCREEN_SIZE};
use crate::geometry::Rect;
use crate::systems::components::{Body, Difficulty, GameRng, GameStage, Platform, Player, Scroll};

impl Platform {
    /// Advances horizontal motion by one tick. A moving platform reverses
    /// after 100 ticks of continuous motion or when it reaches a screen edge.
    pub fn step_motion(&mut self, rect: &mut Rect, difficulty: f32) {
        if !self.moving {
            return;
        }

        self.move_counter += 1;
        rect.pos.x += self.direction * self.speed * difficulty;

        if self.move_counter >= PLATFORM_REVERSE_TICKS || rect.left() < 0.0 || rect.right() > SCREEN_SIZE.x {
            self.direction = -self.direction;
            self.move_counter = 0;
        }
    }
}

pub fn platform_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    difficulty: Res<Difficulty>,
    scroll: Res<Scroll>,
    mut rng: ResMut<GameRng>,
    mut platforms: Query<(Entity, &mut Platform, &mut Body), Without<Player>>,
    players: Query<&Body, With<Player>>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    let Ok(player_body) = players.single() else {
        return;
    };

    let world_scroll = scroll.0 * difficulty.0;

    for (entity, mut platform, mut body) in platforms.iter_mut() {
        platform.step_motion(&mut body.0, difficulty.0);
        body.0.pos.y += world_scroll;

        if body.0.top() > SCREEN_SIZE.y {
            commands.entity(entity).despawn();
            continue;
        }

        let overlapping = body.0.overlaps(&player_body.0);

        // Standing on a destroyable platform weakens it for good.
        if platform.destroyable && overlapping && !platform.stepped_on {
            platform.stepped_on = true;
            tracing::trace!(?entity, "Destroyable platform weakened");
        }

        if platform.stepped_on && !overlapping && rng.0.random_bool(PLATFORM_DECAY_CHANCE) {
            tracing::trace!(?entity, "Weakened platform crumbled");
            commands.entity(entity).despawn();
        }
    }
}
