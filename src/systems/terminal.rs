//! End-of-run conditions, evaluated in a fixed order: falling off the bottom
//! of the screen first, then contact with any live enemy.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, Res};

use crate::constants::SCREEN_SIZE;
use crate::events::{AudioEvent, DeathCause, GameEvent};
use crate::systems::components::{Body, Enemy, GameStage, Player};

pub fn terminal_system(
    stage: Res<GameStage>,
    players: Query<&Body, With<Player>>,
    enemies: Query<&Body, With<Enemy>>,
    mut events: EventWriter<GameEvent>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    let Ok(player_body) = players.single() else {
        return;
    };

    let cause = if player_body.0.top() > SCREEN_SIZE.y {
        Some(DeathCause::FellOffScreen)
    } else if enemies.iter().any(|enemy| enemy.0.overlaps(&player_body.0)) {
        Some(DeathCause::EnemyContact)
    } else {
        None
    };

    if let Some(cause) = cause {
        tracing::info!(?cause, "Run ended");
        events.write(GameEvent::PlayerDied(cause));
        audio_events.write(AudioEvent::Death);
    }
}
