//! This module handles audio playback for the game.
//!
//! Both cues are short square-wave sweeps synthesized at startup, so no sound
//! assets need to ship with the binary.

use sdl2::mixer::{self, Channel, Chunk, DEFAULT_FORMAT};

use crate::error::{AudioError, GameResult};
use crate::events::AudioEvent;

const FREQUENCY: i32 = 44_100;
const CHANNELS: i32 = 4;
const CHANNEL_VOLUME: i32 = 32;
const AMPLITUDE: f32 = 6000.0;

/// The audio system for the game.
///
/// Responsible for opening the audio device, synthesizing the sound cues,
/// and playing them on demand.
pub struct Audio {
    jump: Chunk,
    death: Chunk,
    muted: bool,
}

impl Audio {
    pub fn new() -> GameResult<Self> {
        let chunk_size = 256; // Small buffer keeps cue latency below one tick

        mixer::open_audio(FREQUENCY, DEFAULT_FORMAT, 1, chunk_size)
            .map_err(|e| AudioError::DeviceInit(e.to_string()))?;
        mixer::allocate_channels(CHANNELS);

        for i in 0..CHANNELS {
            Channel(i).set_volume(CHANNEL_VOLUME);
        }

        Ok(Audio {
            jump: synth_sweep(300.0, 700.0, 0.15)?,
            death: synth_sweep(400.0, 80.0, 0.4)?,
            muted: false,
        })
    }

    pub fn play(&self, event: AudioEvent) {
        if self.muted {
            return;
        }

        let chunk = match event {
            AudioEvent::Jump => &self.jump,
            AudioEvent::Death => &self.death,
        };

        match Channel::all().play(chunk, 0) {
            Ok(channel) => tracing::trace!(?event, ?channel, "Playing sound cue"),
            Err(e) => tracing::warn!(?event, "Could not play sound cue: {e}"),
        }
    }

    /// Instantly mute or unmute all channels.
    pub fn set_mute(&mut self, mute: bool) {
        let volume = if mute { 0 } else { CHANNEL_VOLUME };
        for i in 0..CHANNELS {
            Channel(i).set_volume(volume);
        }
        self.muted = mute;
    }

    /// Returns `true` if the audio is muted.
    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

/// Builds a mono square wave sweeping linearly from `start_hz` to `end_hz`,
/// with a linear fade-out over the whole duration.
fn synth_sweep(start_hz: f32, end_hz: f32, seconds: f32) -> Result<Chunk, AudioError> {
    let sample_count = (FREQUENCY as f32 * seconds) as usize;
    let mut bytes = Vec::with_capacity(sample_count * 2);

    let mut phase = 0.0f32;
    for i in 0..sample_count {
        let t = i as f32 / sample_count as f32;
        let hz = start_hz + (end_hz - start_hz) * t;
        phase = (phase + hz / FREQUENCY as f32).fract();

        let wave = if phase < 0.5 { 1.0 } else { -1.0 };
        let sample = (wave * AMPLITUDE * (1.0 - t)) as i16;
        bytes.extend_from_slice(&sample.to_le_bytes());
    }

    Chunk::from_raw_buffer(bytes.into_boxed_slice()).map_err(AudioError::CueBuild)
}
