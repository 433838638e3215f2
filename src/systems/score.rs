//! Score accumulation and the background scroll accumulator.

use bevy_ecs::system::{Res, ResMut};

use crate::constants::SCREEN_SIZE;
use crate::systems::components::{BgScroll, Difficulty, GameStage, Score, Scroll};

pub fn score_system(
    stage: Res<GameStage>,
    scroll: Res<Scroll>,
    difficulty: Res<Difficulty>,
    mut score: ResMut<Score>,
    mut bg_scroll: ResMut<BgScroll>,
) {
    if *stage != GameStage::Playing {
        return;
    }

    bg_scroll.0 += scroll.0 * difficulty.0;
    if bg_scroll.0 >= SCREEN_SIZE.y {
        bg_scroll.0 = 0.0;
    }

    if scroll.0 > 0.0 {
        score.0 += scroll.0 * difficulty.0;
    }
}
