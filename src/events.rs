use bevy_ecs::event::Event;

/// Why the current run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    /// The player's top edge dropped below the bottom of the screen.
    FellOffScreen,
    /// The player's bounding box overlapped a live enemy.
    EnemyContact,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PlayerDied(DeathCause),
}

/// Fire-and-forget sound cues. Emitted by simulation systems, consumed by the
/// audio system; never awaited.
#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AudioEvent {
    /// The player landed on a platform and bounced.
    Jump,
    /// The run ended.
    Death,
}
