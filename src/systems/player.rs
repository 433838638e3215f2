//! Player movement, platform landing, and scroll computation.
//!
//! The per-tick order is load-bearing: horizontal input, then gravity, then
//! screen-wrap, then the landing test, then the scroll decision. The scroll
//! decision reads the post-landing velocity sign, so it must come last.

use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::system::{Query, Res, ResMut};
use glam::Vec2;
use smallvec::SmallVec;

use crate::constants::{GRAVITY, JUMP_IMPULSE, MAX_PLATFORMS, PLAYER_SPEED, SCREEN_SIZE, SCROLL_THRESHOLD};
use crate::events::AudioEvent;
use crate::geometry::Rect;
use crate::input::InputState;
use crate::systems::components::{Body, Difficulty, Enemy, GameStage, Platform, Player, Scroll};

/// The result of advancing the player one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// Upward camera displacement for this tick; zero or positive.
    pub scroll: f32,
    /// Whether the player landed on a platform and bounced.
    pub landed: bool,
}

/// Advances the player one tick against the given platforms.
///
/// Landing requires downward motion and the player's pre-move bottom edge to
/// sit above the platform's vertical center, so a player jumping up through a
/// platform passes clean through it.
pub fn step_player(
    player: &mut Player,
    body: &mut Rect,
    platforms: &[Rect],
    input: &InputState,
    difficulty: f32,
) -> StepOutcome {
    let mut dx = 0.0;
    if input.left {
        dx = -PLAYER_SPEED * difficulty;
        player.facing_right = false;
    }
    if input.right {
        // Right overrides when both directions are held.
        dx = PLAYER_SPEED * difficulty;
        player.facing_right = true;
    }

    player.vel_y += GRAVITY;
    let mut dy = player.vel_y;

    body.pos.x += dx;
    body.wrap_horizontal(SCREEN_SIZE.x);

    let mut landed = false;
    for platform in platforms {
        if platform.overlaps(&body.translated(Vec2::new(0.0, dy)))
            && player.vel_y > 0.0
            && body.bottom() < platform.center().y
        {
            body.set_bottom(platform.top());
            dy = 0.0;
            player.vel_y = JUMP_IMPULSE;
            landed = true;
        }
    }

    let scroll = if body.top() <= SCROLL_THRESHOLD && player.vel_y < 0.0 {
        -dy
    } else {
        0.0
    };

    body.pos.y += dy + scroll;

    StepOutcome { scroll, landed }
}

#[allow(clippy::type_complexity)]
pub fn player_system(
    stage: Res<GameStage>,
    input: Res<InputState>,
    difficulty: Res<Difficulty>,
    mut scroll: ResMut<Scroll>,
    mut audio_events: EventWriter<AudioEvent>,
    mut players: Query<(&mut Player, &mut Body), (Without<Platform>, Without<Enemy>)>,
    platforms: Query<&Body, (With<Platform>, Without<Player>)>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    let Ok((mut player, mut body)) = players.single_mut() else {
        return;
    };

    let platform_rects: SmallVec<[Rect; MAX_PLATFORMS]> = platforms.iter().map(|b| b.0).collect();

    let outcome = step_player(&mut player, &mut body.0, &platform_rects, &input, difficulty.0);

    if outcome.landed {
        audio_events.write(AudioEvent::Jump);
    }

    scroll.0 = outcome.scroll;
}
