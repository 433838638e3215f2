//! ECS-side audio playback.
//!
//! SDL2_mixer handles are not `Send`, so the [`Audio`] wrapper lives in the
//! world as a non-send resource and cue events are drained on the main thread.

use bevy_ecs::event::EventReader;
use bevy_ecs::system::NonSendMut;

use crate::audio::Audio;
use crate::events::AudioEvent;

/// Non-send resource wrapper for the SDL2 audio system.
pub struct AudioResource(pub Audio);

/// Plays any cues emitted by the simulation this tick.
pub fn audio_system(mut audio: NonSendMut<AudioResource>, mut events: EventReader<AudioEvent>) {
    for event in events.read() {
        audio.0.play(*event);
    }
}
