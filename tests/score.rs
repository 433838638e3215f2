mod common;

use bevy_ecs::system::RunSystemOnce;

use bounce::systems::components::{BgScroll, GameStage, Score, Scroll};
use bounce::systems::score::score_system;

use common::playing_world;

#[test]
fn test_score_grows_with_scroll_and_difficulty() {
    let mut world = playing_world(2.0, 1);
    world.resource_mut::<Scroll>().0 = 5.0;

    world.run_system_once(score_system).unwrap();

    assert_eq!(world.resource::<Score>().0, 10.0);
}

#[test]
fn test_score_unchanged_without_scroll() {
    let mut world = playing_world(2.0, 1);
    world.resource_mut::<Score>().0 = 123.0;
    world.resource_mut::<Scroll>().0 = 0.0;

    world.run_system_once(score_system).unwrap();

    assert_eq!(world.resource::<Score>().0, 123.0);
}

#[test]
fn test_score_never_decreases() {
    let mut world = playing_world(1.5, 1);

    let mut previous = 0.0;
    for i in 0..100 {
        world.resource_mut::<Scroll>().0 = (i % 4) as f32;
        world.run_system_once(score_system).unwrap();

        let score = world.resource::<Score>().0;
        assert!(score >= previous);
        previous = score;
    }
}

#[test]
fn test_background_offset_accumulates_and_wraps() {
    let mut world = playing_world(1.0, 1);
    world.resource_mut::<Scroll>().0 = 10.0;

    for _ in 0..59 {
        world.run_system_once(score_system).unwrap();
    }
    assert_eq!(world.resource::<BgScroll>().0, 590.0);

    // The next step reaches the screen height and wraps to zero.
    world.run_system_once(score_system).unwrap();
    assert_eq!(world.resource::<BgScroll>().0, 0.0);
}

#[test]
fn test_score_frozen_during_game_over() {
    let mut world = playing_world(1.0, 1);
    *world.resource_mut::<GameStage>() = GameStage::GameOver;
    world.resource_mut::<Scroll>().0 = 5.0;

    world.run_system_once(score_system).unwrap();

    assert_eq!(world.resource::<Score>().0, 0.0);
    assert_eq!(world.resource::<BgScroll>().0, 0.0);
}

#[test]
fn test_points_truncate_fractional_score() {
    let mut world = playing_world(0.5, 1);
    world.resource_mut::<Scroll>().0 = 5.0;

    world.run_system_once(score_system).unwrap();

    assert_eq!(world.resource::<Score>().0, 2.5);
    assert_eq!(world.resource::<Score>().points(), 2);
}
