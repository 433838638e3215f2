//! Axis-aligned rectangles used for all entity bounds and collision tests.
//!
//! Collision is bounding-rectangle overlap rather than per-pixel sprite
//! masks, which slightly widens near-miss collisions on animated sprites.

use glam::Vec2;

/// An axis-aligned bounding box with its origin at the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Creates a rect of the given size centered on `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size / 2.0,
            size,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x;
    }

    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x;
    }

    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y - self.size.y;
    }

    /// Returns this rect displaced by `delta`, leaving `self` untouched.
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Strict overlap test; rects that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Wraps a rect that has fully left one horizontal screen edge to the
    /// opposite edge. Exiting right re-enters left and vice versa. Returns
    /// `true` if a teleport happened.
    pub fn wrap_horizontal(&mut self, screen_width: f32) -> bool {
        if self.right() < 0.0 {
            self.set_left(screen_width);
            true
        } else if self.left() > screen_width {
            self.set_right(0.0);
            true
        } else {
            false
        }
    }
}
