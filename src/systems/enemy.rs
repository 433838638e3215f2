//! Enemy flight and animation.
//!
//! Animation runs on the frame clock's delta time so its speed is independent
//! of the tick rate; motion advances per tick like the rest of the physics.

use bevy_ecs::entity::Entity;
use bevy_ecs::system::{Commands, Query, Res};

use crate::systems::components::{Body, DeltaTime, Difficulty, Enemy, GameStage, Scroll};

pub fn enemy_system(
    mut commands: Commands,
    stage: Res<GameStage>,
    dt: Res<DeltaTime>,
    difficulty: Res<Difficulty>,
    scroll: Res<Scroll>,
    mut enemies: Query<(Entity, &mut Enemy, &mut Body)>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    let world_scroll = scroll.0 * difficulty.0;

    for (entity, mut enemy, mut body) in enemies.iter_mut() {
        enemy.animator.tick(dt.0);

        body.0.pos.x -= enemy.speed * difficulty.0;
        body.0.pos.y += world_scroll;

        if body.0.right() < 0.0 {
            tracing::debug!(?entity, "Enemy left the screen");
            commands.entity(entity).despawn();
        }
    }
}
