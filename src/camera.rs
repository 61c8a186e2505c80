use crate::geometry::clamp;

/// How far right of the camera's left edge the player is kept.
pub const CAMERA_LEAD: f32 = 120.0;
pub const CAMERA_SMOOTHING: f32 = 0.08;

/// Horizontal follow camera.  `x` is the world x of the view's left edge.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new() -> Self {
        Camera { x: 0.0 }
    }

    /// Ease toward the player and clamp to `[0, level_length]`.
    pub fn follow(&mut self, player_x: f32, level_length: f32) {
        self.x += (player_x - self.x - CAMERA_LEAD) * CAMERA_SMOOTHING;
        self.x = clamp(self.x, 0.0, level_length);
    }

    pub fn reset(&mut self) {
        self.x = 0.0;
    }
}
