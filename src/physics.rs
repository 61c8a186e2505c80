/// Shared movement base for the player and enemies: a box with velocity that
/// falls under constant gravity and rests on the ground plane.

use crate::geometry::Rect;

/// World-space y of the ground surface.
pub const GROUND_Y: f32 = 560.0;

/// Downward speed cap.  Kept below the landing window of the platform test
/// (tolerance + speed) so a fast fall cannot tunnel through a platform.
pub const MAX_FALL_SPEED: f32 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,
    pub grounded: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Body {
            x,
            y,
            w,
            h,
            vx: 0.0,
            vy: 0.0,
            grounded: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// One physics step: gravity, integration, ground clamp.
    /// `grounded` is recomputed from scratch; platform landing may set it
    /// again afterwards.
    pub fn step(&mut self, gravity: f32, ground_y: f32) {
        self.vy = (self.vy + gravity).min(MAX_FALL_SPEED);
        self.x += self.vx;
        self.y += self.vy;
        self.grounded = false;
        self.clamp_to_ground(ground_y);
    }

    /// Returns true when the body was pushed back onto the ground.
    pub fn clamp_to_ground(&mut self, ground_y: f32) -> bool {
        if self.bottom() >= ground_y {
            self.y = ground_y - self.h;
            self.vy = 0.0;
            self.grounded = true;
            return true;
        }
        false
    }

    /// Rest the body on a surface whose top edge is at `top`.
    pub fn land_on(&mut self, top: f32) {
        self.y = top - self.h;
        self.vy = 0.0;
        self.grounded = true;
    }
}
