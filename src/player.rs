/// The controllable character: input → velocity, jumping, physics step.

use crate::geometry::lerp;
use crate::input::InputSnapshot;
use crate::physics::Body;
use crate::powers::PlayerPowers;

pub const PLAYER_W: f32 = 32.0;
pub const PLAYER_H: f32 = 40.0;
pub const SPAWN_X: f32 = 70.0;
pub const SPAWN_Y: f32 = 520.0;

pub const RUN_SPEED: f32 = 4.0;
pub const SPEED_BOOST_MULTIPLIER: f32 = 1.6;
pub const JUMP_VELOCITY: f32 = -21.0;
/// Fraction of the gap to the input velocity closed per frame on ice.
pub const ICE_GRIP: f32 = 0.12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub body: Body,
    pub powers: PlayerPowers,
    /// Set once the mid-air jump has been spent; cleared on landing.
    pub double_jump_used: bool,
    /// Frames of post-hit invulnerability left.
    pub mercy_frames: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Player {
            body: Body::new(SPAWN_X, SPAWN_Y, PLAYER_W, PLAYER_H),
            powers: PlayerPowers::new(),
            double_jump_used: false,
            mercy_frames: 0,
        }
    }

    /// Put the player back at the level start, keeping powers.
    pub fn respawn(&mut self) {
        self.body = Body::new(SPAWN_X, SPAWN_Y, PLAYER_W, PLAYER_H);
        self.double_jump_used = false;
    }

    pub fn run_speed(&self) -> f32 {
        if self.powers.speed_boost() {
            RUN_SPEED * SPEED_BOOST_MULTIPLIER
        } else {
            RUN_SPEED
        }
    }

    /// Set horizontal velocity from input.  On a slippery surface the
    /// velocity only drifts toward the target instead of snapping to it.
    pub fn apply_input(&mut self, input: &InputSnapshot, slippery: bool) {
        let target = input.horizontal() * self.run_speed();
        if slippery && self.body.grounded {
            self.body.vx = lerp(self.body.vx, target, ICE_GRIP);
        } else {
            self.body.vx = target;
        }
    }

    /// No-op unless grounded or a double jump is still available.
    pub fn jump(&mut self) -> Option<JumpKind> {
        if self.body.grounded {
            self.body.vy = JUMP_VELOCITY;
            self.body.grounded = false;
            return Some(JumpKind::Ground);
        }
        if self.powers.double_jump() && !self.double_jump_used {
            self.body.vy = JUMP_VELOCITY;
            self.double_jump_used = true;
            return Some(JumpKind::Double);
        }
        None
    }

    /// Gravity, integration and ground clamp, then the left world edge.
    pub fn step(&mut self, gravity: f32, ground_y: f32) {
        self.body.step(gravity, ground_y);
        if self.body.x < 0.0 {
            self.body.x = 0.0;
        }
        if self.body.grounded {
            self.double_jump_used = false;
        }
    }

    /// Called after a platform landing so the double jump re-arms.
    pub fn landed(&mut self) {
        self.double_jump_used = false;
    }

    pub fn is_vulnerable(&self) -> bool {
        self.mercy_frames == 0 && !self.powers.invincible()
    }
}
