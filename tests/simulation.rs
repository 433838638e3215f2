mod common;

use bevy_ecs::query::With;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;

use bounce::constants::{MAX_PLATFORMS, PLAYER_SPAWN};
use bounce::highscore::HighScoreStore;
use bounce::input::InputState;
use bounce::systems::components::{Body, Enemy, GameStage, Platform, Player, Score};
use bounce::systems::enemy::enemy_system;
use bounce::systems::platform::platform_system;
use bounce::systems::player::player_system;
use bounce::systems::score::score_system;
use bounce::systems::spawn::{seed_platform, spawn_system};
use bounce::systems::stage::stage_system;
use bounce::systems::terminal::terminal_system;

use common::{playing_world, spawn_player_at};

/// The full per-tick schedule minus the audio and render endpoints.
fn sim_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            player_system,
            spawn_system,
            platform_system,
            enemy_system,
            score_system,
            terminal_system,
            stage_system,
        )
            .chain(),
    );
    schedule
}

fn sim_world(dir: &tempfile::TempDir, player_center: Vec2) -> World {
    let mut world = playing_world(1.0, 99);
    world.insert_resource(HighScoreStore::new(dir.path().join("score.txt")));
    spawn_player_at(&mut world, player_center);
    world.spawn(seed_platform());
    world
}

fn platform_count(world: &mut World) -> usize {
    world.query_filtered::<(), With<Platform>>().iter(world).count()
}

#[test]
fn test_long_run_preserves_world_invariants() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = sim_world(&dir, PLAYER_SPAWN);
    let mut schedule = sim_schedule();

    // The player bounces unattended; the run may climb or end, but the world
    // invariants hold either way.
    let mut previous_score = 0.0;
    for _ in 0..2000 {
        if *world.resource::<GameStage>() != GameStage::Playing {
            break;
        }

        schedule.run(&mut world);

        assert!(platform_count(&mut world) <= MAX_PLATFORMS);

        let enemies = world.query_filtered::<(), With<Enemy>>().iter(&world).count();
        assert!(enemies <= 1);

        let score = world.resource::<Score>().0;
        assert!(score >= previous_score);
        previous_score = score;
    }
}

#[test]
fn test_spawner_fills_the_world_to_cap() {
    let dir = tempfile::tempdir().unwrap();
    // The player is parked far above the tower so nothing gets stepped on.
    let mut world = sim_world(&dir, Vec2::new(200.0, -1000.0));
    let mut schedule = sim_schedule();

    for _ in 0..MAX_PLATFORMS {
        schedule.run(&mut world);
    }

    assert_eq!(platform_count(&mut world), MAX_PLATFORMS);
}

#[test]
fn test_falling_to_death_and_restarting() {
    let dir = tempfile::tempdir().unwrap();
    let mut world = sim_world(&dir, PLAYER_SPAWN);
    let mut schedule = sim_schedule();

    // Take the floor out from under the player.
    let platforms: Vec<_> = world
        .query_filtered::<bevy_ecs::entity::Entity, With<Platform>>()
        .iter(&world)
        .collect();
    for entity in platforms {
        world.despawn(entity);
    }

    let mut ticks = 0;
    while *world.resource::<GameStage>() == GameStage::Playing {
        schedule.run(&mut world);
        ticks += 1;
        assert!(ticks < 100, "player never fell off screen");
    }

    world.insert_resource(InputState {
        confirm: true,
        confirm_pressed: true,
        ..Default::default()
    });
    schedule.run(&mut world);

    assert_eq!(*world.resource::<GameStage>(), GameStage::Playing);
    assert_eq!(world.resource::<Score>().0, 0.0);
    assert_eq!(platform_count(&mut world), 1);

    let mut players = world.query_filtered::<&Body, With<Player>>();
    let player_body = players.single(&world).unwrap();
    assert_eq!(player_body.0.center(), PLAYER_SPAWN);
}
