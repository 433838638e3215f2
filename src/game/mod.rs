//! This module contains the main game state and the fixed tick schedule.

use bevy_ecs::event::EventRegistry;
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule};
use bevy_ecs::world::World;
use glam::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use sdl2::render::{Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::audio::Audio;
use crate::config::Config;
use crate::constants::{PLAYER_SIZE, PLAYER_SPAWN};
use crate::error::GameResult;
use crate::events::{AudioEvent, GameEvent};
use crate::geometry::Rect;
use crate::highscore::HighScoreStore;
use crate::input::InputState;
use crate::systems::audio::{audio_system, AudioResource};
use crate::systems::components::{
    BgScroll, Body, DeltaTime, Difficulty, GameRng, GameStage, HighScore, Player, Score, Scroll,
};
use crate::systems::enemy::enemy_system;
use crate::systems::platform::platform_system;
use crate::systems::player::player_system;
use crate::systems::render::{render_system, BackgroundTexture};
use crate::systems::score::score_system;
use crate::systems::spawn::{seed_platform, spawn_system};
use crate::systems::stage::stage_system;
use crate::systems::terminal::terminal_system;

/// The `Game` struct owns the ECS world and the tick schedule.
///
/// One call to [`Game::tick`] advances the simulation by exactly one fixed
/// timestep; the caller owns the frame clock and pause behavior.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Game {
    pub fn new(
        canvas: &'static mut Canvas<Window>,
        texture_creator: &'static TextureCreator<WindowContext>,
        audio: Audio,
        config: &Config,
    ) -> GameResult<Game> {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        EventRegistry::register_event::<GameEvent>(&mut world);
        EventRegistry::register_event::<AudioEvent>(&mut world);

        let mut rng = SmallRng::from_os_rng();
        let background = BackgroundTexture::build(canvas, texture_creator, &mut rng)?;

        let store = HighScoreStore::new(&config.high_score_file);
        let high_score = store.load();
        tracing::info!(high_score, difficulty = config.difficulty, "Starting run");

        world.insert_non_send_resource(canvas);
        world.insert_non_send_resource(background);
        world.insert_non_send_resource(AudioResource(audio));

        world.insert_resource(store);
        world.insert_resource(HighScore(high_score));
        world.insert_resource(Score::default());
        world.insert_resource(Difficulty(config.difficulty));
        world.insert_resource(Scroll::default());
        world.insert_resource(BgScroll::default());
        world.insert_resource(DeltaTime::default());
        world.insert_resource(GameRng(rng));
        world.insert_resource(GameStage::default());
        world.insert_resource(InputState::default());

        world.spawn((
            Player::default(),
            Body(Rect::from_center(Vec2::new(PLAYER_SPAWN.x, PLAYER_SPAWN.y), PLAYER_SIZE)),
        ));
        world.spawn(seed_platform());

        schedule.add_systems(
            (
                player_system,
                spawn_system,
                platform_system,
                enemy_system,
                score_system,
                terminal_system,
                stage_system,
                audio_system,
                render_system,
            )
                .chain(),
        );

        Ok(Game { world, schedule })
    }

    /// Captures this tick's input snapshot before the schedule runs.
    pub fn set_input(&mut self, input: InputState) {
        self.world.insert_resource(input);
    }

    /// Ticks the game state. `dt` is the wall-clock time since the previous
    /// tick and drives only delta-time animation.
    pub fn tick(&mut self, dt: f32) {
        self.world.insert_resource(DeltaTime(dt));
        self.schedule.run(&mut self.world);
    }

    /// Persists the high score if the current run has beaten it. Called on
    /// the quit path so an improved score survives an abrupt exit.
    pub fn persist_high_score(&mut self) {
        let score = self.world.resource::<Score>().points();
        let high_score = self.world.resource::<HighScore>().0;
        if score > high_score {
            let store = self.world.resource::<HighScoreStore>();
            if let Err(e) = store.save(score) {
                tracing::error!("Failed to persist high score on exit: {e}");
            }
            self.world.resource_mut::<HighScore>().0 = score;
        }
    }
}
