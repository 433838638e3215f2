use std::collections::HashMap;

use bevy_ecs::resource::Resource;
use sdl2::keyboard::{KeyboardState, Scancode};

/// Every player-facing action the game reads. Each maps to exactly one key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Pause,
    Menu,
    Confirm,
    Settings,
    Quit,
    Back,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::Pause,
        Action::Menu,
        Action::Confirm,
        Action::Settings,
        Action::Quit,
        Action::Back,
    ];
}

/// The action-to-key mapping for one run.
///
/// This is an explicit value handed to the loop at construction; nothing in
/// the simulation reaches for a global key table.
#[derive(Debug, Clone)]
pub struct Bindings {
    keys: HashMap<Action, Scancode>,
}

impl Default for Bindings {
    fn default() -> Self {
        let keys = HashMap::from([
            (Action::MoveLeft, Scancode::A),
            (Action::MoveRight, Scancode::D),
            (Action::Pause, Scancode::P),
            (Action::Menu, Scancode::M),
            (Action::Confirm, Scancode::Return),
            (Action::Settings, Scancode::S),
            (Action::Quit, Scancode::Q),
            (Action::Back, Scancode::B),
        ]);
        Self { keys }
    }
}

impl Bindings {
    pub fn key_for(&self, action: Action) -> Scancode {
        self.keys[&action]
    }

    /// Rebinds `action` to `key`. Rejected if the key is already assigned to
    /// another action, so every action keeps a distinct key.
    pub fn rebind(&mut self, action: Action, key: Scancode) -> bool {
        if self.keys.iter().any(|(a, k)| *k == key && *a != action) {
            tracing::warn!(?action, ?key, "Rejected rebind, key already in use");
            return false;
        }
        self.keys.insert(action, key);
        true
    }

    /// Reads the pressed-state of every bound action from a keyboard snapshot.
    pub fn snapshot(&self, keyboard: &KeyboardState) -> InputState {
        let held = |action| keyboard.is_scancode_pressed(self.key_for(action));
        InputState {
            left: held(Action::MoveLeft),
            right: held(Action::MoveRight),
            pause: held(Action::Pause),
            menu: held(Action::Menu),
            confirm: held(Action::Confirm),
            settings: held(Action::Settings),
            quit: held(Action::Quit),
            back: held(Action::Back),
            confirm_pressed: false,
        }
    }
}

/// Boolean pressed-state per action, captured once per tick.
///
/// `confirm_pressed` is the rising edge of `confirm`, used to restart a run;
/// the loop fills it in by comparing against the previous tick's snapshot.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub pause: bool,
    pub menu: bool,
    pub confirm: bool,
    pub settings: bool,
    pub quit: bool,
    pub back: bool,
    pub confirm_pressed: bool,
}

impl InputState {
    /// Derives rising-edge flags from the previous tick's snapshot.
    pub fn with_edges(mut self, previous: &InputState) -> Self {
        self.confirm_pressed = self.confirm && !previous.confirm;
        self
    }
}
