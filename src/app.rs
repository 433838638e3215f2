use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use sdl2::event::{Event, WindowEvent};
use sdl2::render::TextureCreator;
use sdl2::video::WindowContext;
use sdl2::{AudioSubsystem, EventPump, Sdl};
use tracing::event;

use crate::audio::Audio;
use crate::config::Config;
use crate::constants::{LOOP_TIME, SCREEN_SIZE};
use crate::game::Game;
use crate::input::{Bindings, InputState};

pub struct App {
    game: Game,
    event_pump: EventPump,
    bindings: Bindings,
    previous_input: InputState,
    paused: bool,
    last_tick: Instant,
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let audio_subsystem = sdl_context.audio().map_err(|e| anyhow!(e))?;

        let window = video_subsystem
            .window("Bounce", SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)
            .position_centered()
            .build()?;

        let mut canvas = window.into_canvas().build()?;
        canvas.set_logical_size(SCREEN_SIZE.x as u32, SCREEN_SIZE.y as u32)?;

        // The canvas and texture creator live in the world as non-send
        // resources for the rest of the process, hence the leaks.
        let texture_creator: &'static TextureCreator<WindowContext> = Box::leak(Box::new(canvas.texture_creator()));
        let canvas = Box::leak(Box::new(canvas));

        let mut audio = Audio::new()?;
        audio.set_mute(config.muted);

        let game = Game::new(canvas, texture_creator, audio, &config)?;

        let event_pump = sdl_context.event_pump().map_err(|e| anyhow!(e))?;

        Ok(Self {
            game,
            event_pump,
            bindings: Bindings::default(),
            previous_input: InputState::default(),
            paused: false,
            last_tick: Instant::now(),
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Runs one frame. Returns `false` when the process should exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Window { win_event, .. } => match win_event {
                    WindowEvent::Hidden => event!(tracing::Level::DEBUG, "Window hidden"),
                    WindowEvent::Shown => event!(tracing::Level::DEBUG, "Window shown"),
                    _ => {}
                },
                Event::Quit { .. } => {
                    event!(tracing::Level::INFO, "Exit requested. Exiting...");
                    self.game.persist_high_score();
                    return false;
                }
                _ => {}
            }
        }

        let input = self
            .bindings
            .snapshot(&self.event_pump.keyboard_state())
            .with_edges(&self.previous_input);

        if input.quit && !self.previous_input.quit {
            event!(tracing::Level::INFO, "Exit requested. Exiting...");
            self.game.persist_high_score();
            return false;
        }

        if input.pause && !self.previous_input.pause {
            self.paused = !self.paused;
            event!(tracing::Level::INFO, "{}", if self.paused { "Paused" } else { "Unpaused" });
        }

        self.previous_input = input;

        let dt = self.last_tick.elapsed().as_secs_f32();
        self.last_tick = Instant::now();

        // Pausing suspends the simulation entirely; only the control signals
        // above keep being handled.
        if !self.paused {
            self.game.set_input(input);
            self.game.tick(dt);
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - LOOP_TIME
            );
        }

        true
    }
}
