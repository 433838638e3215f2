//! The run state machine: Playing until a death event arrives, GameOver until
//! the player confirms a restart. High-score persistence happens on the
//! Playing → GameOver transition.

use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventReader;
use bevy_ecs::query::{Or, With, Without};
use bevy_ecs::system::{Commands, Query, Res, ResMut};
use glam::Vec2;

use crate::constants::{PLAYER_SIZE, PLAYER_SPAWN};
use crate::events::GameEvent;
use crate::geometry::Rect;
use crate::highscore::HighScoreStore;
use crate::input::InputState;
use crate::systems::components::{BgScroll, Body, Enemy, GameStage, HighScore, Platform, Player, Score, Scroll};
use crate::systems::spawn::seed_platform;

#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn stage_system(
    mut commands: Commands,
    mut stage: ResMut<GameStage>,
    input: Res<InputState>,
    mut deaths: EventReader<GameEvent>,
    mut score: ResMut<Score>,
    mut high_score: ResMut<HighScore>,
    store: Res<HighScoreStore>,
    mut scroll: ResMut<Scroll>,
    mut bg_scroll: ResMut<BgScroll>,
    mut players: Query<(&mut Player, &mut Body), (Without<Platform>, Without<Enemy>)>,
    world_entities: Query<Entity, Or<(With<Platform>, With<Enemy>)>>,
) {
    match *stage {
        GameStage::Playing => {
            if deaths.read().next().is_none() {
                return;
            }

            *stage = GameStage::GameOver;

            let final_score = score.points();
            if final_score > high_score.0 {
                tracing::info!(final_score, previous = high_score.0, "New high score");
                high_score.0 = final_score;
                if let Err(e) = store.save(final_score) {
                    tracing::error!("Failed to persist high score: {e}");
                }
            }
        }
        GameStage::GameOver => {
            deaths.clear();
            if !input.confirm_pressed {
                return;
            }

            tracing::info!("Restarting run");

            for entity in world_entities.iter() {
                commands.entity(entity).despawn();
            }
            commands.spawn(seed_platform());

            if let Ok((mut player, mut body)) = players.single_mut() {
                *player = Player::default();
                body.0 = Rect::from_center(Vec2::new(PLAYER_SPAWN.x, PLAYER_SPAWN.y), PLAYER_SIZE);
            }

            score.0 = 0.0;
            scroll.0 = 0.0;
            bg_scroll.0 = 0.0;
            *stage = GameStage::Playing;
        }
    }
}
