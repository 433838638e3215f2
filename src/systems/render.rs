//! Builds the per-tick draw list: tiled background, platforms, enemies,
//! player, score HUD, and the high-score reference line.
//!
//! Everything is drawn with solid primitives and the `sdl2_gfx` built-in
//! font, so no image or font assets are required.

use bevy_ecs::system::{NonSendMut, Query, Res};
use rand::rngs::SmallRng;
use rand::Rng;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::rect::Rect as SdlRect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};

use crate::constants::{SCREEN_SIZE, SCROLL_THRESHOLD};
use crate::error::{GameError, GameResult};
use crate::geometry::Rect;
use crate::systems::components::{BgScroll, Body, Enemy, GameStage, HighScore, Platform, Player, Score};

const SKY_TOP: Color = Color::RGB(10, 12, 40);
const SKY_BOTTOM: Color = Color::RGB(44, 22, 64);
const PLATFORM_COLOR: Color = Color::RGB(146, 94, 47);
const PLATFORM_WEAKENED_COLOR: Color = Color::RGB(94, 72, 50);
const PLAYER_COLOR: Color = Color::RGB(244, 200, 120);
const ENEMY_COLOR: Color = Color::RGB(70, 50, 120);
const ENEMY_WING_COLOR: Color = Color::RGB(120, 100, 180);
const STAR_COUNT: usize = 90;

/// Non-send resource for the pre-rendered background tile.
pub struct BackgroundTexture(pub Texture);

impl BackgroundTexture {
    /// Renders one screen-sized background tile: a vertical gradient with a
    /// random scattering of stars. Built once at startup.
    pub fn build(
        canvas: &mut Canvas<Window>,
        texture_creator: &TextureCreator<WindowContext>,
        rng: &mut SmallRng,
    ) -> GameResult<Self> {
        let width = SCREEN_SIZE.x as u32;
        let height = SCREEN_SIZE.y as u32;

        let mut texture = texture_creator
            .create_texture_target(None, width, height)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut stars = Vec::with_capacity(STAR_COUNT);
        for _ in 0..STAR_COUNT {
            let x = rng.random_range(0..width as i32);
            let y = rng.random_range(0..height as i32);
            let shade = rng.random_range(120..=255u32) as u8;
            stars.push((x, y, shade));
        }

        canvas
            .with_texture_canvas(&mut texture, |tile| {
                for row in 0..height {
                    let t = row as f32 / height as f32;
                    tile.set_draw_color(lerp_color(SKY_TOP, SKY_BOTTOM, t));
                    let _ = tile.fill_rect(SdlRect::new(0, row as i32, width, 1));
                }
                for (x, y, shade) in &stars {
                    tile.set_draw_color(Color::RGB(*shade, *shade, *shade));
                    let _ = tile.fill_rect(SdlRect::new(*x, *y, 2, 2));
                }
            })
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        Ok(Self(texture))
    }
}

fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
    Color::RGB(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

fn to_sdl(rect: &Rect) -> SdlRect {
    SdlRect::new(
        rect.left() as i32,
        rect.top() as i32,
        rect.size.x.max(0.0) as u32,
        rect.size.y.max(0.0) as u32,
    )
}

fn draw_text(canvas: &Canvas<Window>, x: i32, y: i32, text: &str, color: Color) {
    if let Err(e) = canvas.string(x as i16, y as i16, text, color) {
        tracing::error!("Failed to render text: {e}");
    }
}

/// Centers a string of the 8x8 built-in font at the given y.
fn draw_text_centered(canvas: &Canvas<Window>, y: i32, text: &str, color: Color) {
    let x = (SCREEN_SIZE.x as i32 - text.len() as i32 * 8) / 2;
    draw_text(canvas, x, y, text, color);
}

#[allow(clippy::type_complexity)]
pub fn render_system(
    mut canvas: NonSendMut<&'static mut Canvas<Window>>,
    background: NonSendMut<BackgroundTexture>,
    bg_scroll: Res<BgScroll>,
    score: Res<Score>,
    high_score: Res<HighScore>,
    stage: Res<GameStage>,
    players: Query<(&Player, &Body)>,
    platforms: Query<(&Platform, &Body)>,
    enemies: Query<(&Enemy, &Body)>,
) {
    let width = SCREEN_SIZE.x as u32;
    let height = SCREEN_SIZE.y as u32;
    let offset = bg_scroll.0 as i32;

    canvas.set_draw_color(Color::BLACK);
    canvas.clear();

    // Two tiled copies of the background cover the screen at any offset.
    for y in [offset, offset - height as i32] {
        if let Err(e) = canvas.copy(&background.0, None, SdlRect::new(0, y, width, height)) {
            tracing::error!("Failed to draw background: {e}");
        }
    }

    for (platform, body) in platforms.iter() {
        canvas.set_draw_color(if platform.stepped_on {
            PLATFORM_WEAKENED_COLOR
        } else {
            PLATFORM_COLOR
        });
        let _ = canvas.fill_rect(to_sdl(&body.0));
    }

    for (enemy, body) in enemies.iter() {
        canvas.set_draw_color(ENEMY_COLOR);
        let _ = canvas.fill_rect(to_sdl(&body.0));

        // Wings flap with the animation frame: up on even frames, down on odd.
        let wing_up = enemy.animator.frame() % 2 == 0;
        let wing_y = if wing_up { body.0.top() } else { body.0.center().y };
        canvas.set_draw_color(ENEMY_WING_COLOR);
        let wing = Rect::new(body.0.left() + 8.0, wing_y, body.0.size.x - 16.0, body.0.size.y / 4.0);
        let _ = canvas.fill_rect(to_sdl(&wing));
    }

    for (player, body) in players.iter() {
        canvas.set_draw_color(PLAYER_COLOR);
        let _ = canvas.fill_rect(to_sdl(&body.0));

        // Eye accent marks the facing direction.
        let eye_x = if player.facing_right {
            body.0.right() - 12.0
        } else {
            body.0.left() + 4.0
        };
        canvas.set_draw_color(Color::BLACK);
        let _ = canvas.fill_rect(SdlRect::new(eye_x as i32, (body.0.top() + 10.0) as i32, 8, 8));
    }

    draw_text(&canvas, 10, 10, &format!("SCORE: {}", score.points()), Color::WHITE);

    // Reference line marking where the stored high score was reached.
    let line_y = score.0 - high_score.0 as f32 + SCROLL_THRESHOLD;
    if line_y >= 0.0 && line_y < SCREEN_SIZE.y {
        canvas.set_draw_color(Color::WHITE);
        let _ = canvas.fill_rect(SdlRect::new(0, line_y as i32, width, 3));
        draw_text(&canvas, width as i32 - 130, line_y as i32 + 5, "HIGH SCORE", Color::WHITE);
    }

    if *stage == GameStage::GameOver {
        let mid = height as i32 / 2;
        draw_text_centered(&canvas, mid - 50, "GAME OVER!", Color::WHITE);
        draw_text_centered(&canvas, mid, &format!("SCORE: {}", score.points()), Color::WHITE);
        draw_text_centered(&canvas, mid + 50, "PRESS ENTER TO PLAY AGAIN", Color::WHITE);
    }

    canvas.present();
}
