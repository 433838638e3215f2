mod common;

use bevy_ecs::query::With;
use bevy_ecs::system::RunSystemOnce;
use glam::Vec2;

use bounce::constants::PLAYER_SPAWN;
use bounce::events::{DeathCause, GameEvent};
use bounce::geometry::Rect;
use bounce::highscore::HighScoreStore;
use bounce::input::InputState;
use bounce::systems::components::{Body, Enemy, GameStage, HighScore, Platform, Player, Score};
use bounce::systems::stage::stage_system;

use common::{playing_world, spawn_player_at, spawn_static_platform};

fn world_with_store(score: f32, high_score: u32) -> (bevy_ecs::world::World, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let mut world = playing_world(1.0, 4);
    world.insert_resource(HighScoreStore::new(dir.path().join("score.txt")));
    world.resource_mut::<Score>().0 = score;
    world.resource_mut::<HighScore>().0 = high_score;
    (world, dir)
}

#[test]
fn test_death_event_moves_to_game_over() {
    let (mut world, _dir) = world_with_store(0.0, 0);
    spawn_player_at(&mut world, Vec2::new(200.0, 650.0));

    world.send_event(GameEvent::PlayerDied(DeathCause::FellOffScreen));
    world.run_system_once(stage_system).unwrap();

    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver);
}

#[test]
fn test_stays_playing_without_death_event() {
    let (mut world, _dir) = world_with_store(0.0, 0);
    spawn_player_at(&mut world, Vec2::new(200.0, 450.0));

    world.run_system_once(stage_system).unwrap();

    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);
}

#[test]
fn test_new_high_score_persisted_on_game_over() {
    let (mut world, _dir) = world_with_store(500.7, 100);
    spawn_player_at(&mut world, Vec2::new(200.0, 650.0));

    world.send_event(GameEvent::PlayerDied(DeathCause::FellOffScreen));
    world.run_system_once(stage_system).unwrap();

    assert_eq!(world.resource::<HighScore>().0, 500);
    assert_eq!(world.resource::<HighScoreStore>().load(), 500);
}

#[test]
fn test_lower_score_leaves_high_score_alone() {
    let (mut world, _dir) = world_with_store(50.0, 100);
    world.resource::<HighScoreStore>().save(100).unwrap();
    spawn_player_at(&mut world, Vec2::new(200.0, 650.0));

    world.send_event(GameEvent::PlayerDied(DeathCause::FellOffScreen));
    world.run_system_once(stage_system).unwrap();

    assert_eq!(world.resource::<HighScore>().0, 100);
    assert_eq!(world.resource::<HighScoreStore>().load(), 100);
}

#[test]
fn test_confirm_restarts_a_fresh_run() {
    let (mut world, _dir) = world_with_store(3000.0, 0);
    *world.resource_mut::<GameStage>() = GameStage::GameOver;

    let player = spawn_player_at(&mut world, Vec2::new(50.0, 650.0));
    world.entity_mut(player).get_mut::<Player>().unwrap().vel_y = 14.0;
    for i in 0..5 {
        spawn_static_platform(&mut world, Rect::new(100.0, 100.0 + i as f32 * 80.0, 60.0, 10.0));
    }
    world.spawn((Enemy::new(2.0), Body(Rect::new(300.0, 200.0, 96.0, 96.0))));

    world.insert_resource(InputState {
        confirm: true,
        confirm_pressed: true,
        ..Default::default()
    });

    world.run_system_once(stage_system).unwrap();

    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);
    assert_eq!(world.resource::<Score>().0, 0.0);

    // Only the starting platform survives the reset.
    let platforms = world.query_filtered::<(), With<Platform>>().iter(&world).count();
    assert_eq!(platforms, 1);
    let enemies = world.query_filtered::<(), With<Enemy>>().iter(&world).count();
    assert_eq!(enemies, 0);

    let body = world.entity(player).get::<Body>().unwrap().0;
    assert_eq!(body.center(), PLAYER_SPAWN);
    assert_eq!(world.entity(player).get::<Player>().unwrap().vel_y, 0.0);
}

#[test]
fn test_held_confirm_does_not_restart() {
    let (mut world, _dir) = world_with_store(0.0, 0);
    *world.resource_mut::<GameStage>() = GameStage::GameOver;
    spawn_player_at(&mut world, Vec2::new(200.0, 650.0));

    // Held since before the run ended; no rising edge.
    world.insert_resource(InputState {
        confirm: true,
        confirm_pressed: false,
        ..Default::default()
    });

    world.run_system_once(stage_system).unwrap();

    assert_eq!(*world.resource::<GameStage>(), GameStage::GameOver);
}
