#![allow(dead_code)]

use bevy_ecs::entity::Entity;
use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use bounce::constants::PLAYER_SIZE;
use bounce::events::{AudioEvent, GameEvent};
use bounce::geometry::Rect;
use bounce::input::InputState;
use bounce::systems::components::{
    BgScroll, Body, DeltaTime, Difficulty, GameRng, GameStage, HighScore, Platform, Player, Score, Scroll,
};

/// A world with every simulation resource registered, in the Playing stage,
/// with a deterministic RNG.
pub fn playing_world(difficulty: f32, seed: u64) -> World {
    let mut world = World::default();

    EventRegistry::register_event::<GameEvent>(&mut world);
    EventRegistry::register_event::<AudioEvent>(&mut world);

    world.insert_resource(Score::default());
    world.insert_resource(HighScore::default());
    world.insert_resource(Difficulty(difficulty));
    world.insert_resource(Scroll::default());
    world.insert_resource(BgScroll::default());
    world.insert_resource(DeltaTime(1.0 / 60.0));
    world.insert_resource(GameRng(SmallRng::seed_from_u64(seed)));
    world.insert_resource(GameStage::default());
    world.insert_resource(InputState::default());

    world
}

pub fn spawn_player_at(world: &mut World, center: Vec2) -> Entity {
    world
        .spawn((Player::default(), Body(Rect::from_center(center, PLAYER_SIZE))))
        .id()
}

pub fn spawn_static_platform(world: &mut World, rect: Rect) -> Entity {
    world.spawn((Platform::fixed(), Body(rect))).id()
}

pub fn drain_audio_events(world: &mut World) -> Vec<AudioEvent> {
    world.resource_mut::<Events<AudioEvent>>().drain().collect()
}

pub fn drain_game_events(world: &mut World) -> Vec<GameEvent> {
    world.resource_mut::<Events<GameEvent>>().drain().collect()
}
