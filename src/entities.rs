/// Pickups, game status and the master game state.

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::events::FrameEvent;
use crate::geometry::{distance, rects_intersect, Rect};
use crate::level::{LevelDescriptor, LevelManager};
use crate::particles::ParticleSystem;
use crate::platform::Platform;
use crate::player::Player;
use crate::powers::PowerKind;

pub const COIN_RADIUS: f32 = 8.0;
pub const COIN_PICKUP_DISTANCE: f32 = 26.0;
pub const POWER_UP_SIZE: f32 = 28.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    LevelComplete,
    /// The last configured level was completed.
    Victory,
    GameOver,
}

// ── Pickups ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub x: f32,
    pub y: f32,
    pub r: f32,
    /// Bob animation phase.
    pub anim: f32,
    /// Once set, never cleared.
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Coin {
            x,
            y,
            r: COIN_RADIUS,
            anim: 0.0,
            collected: false,
        }
    }

    pub fn update(&mut self) {
        self.anim += 0.1;
    }

    /// Vertical draw offset from the bob animation.
    pub fn bob(&self) -> f32 {
        self.anim.sin() * 4.0
    }

    /// Collect the coin if `player` is close enough.  True only on the
    /// frame it is collected.
    pub fn check_pickup(&mut self, player: &Rect) -> bool {
        if self.collected {
            return false;
        }
        let d = distance(self.x, self.y, player.center_x(), player.center_y());
        if d < COIN_PICKUP_DISTANCE {
            self.collected = true;
            return true;
        }
        false
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub kind: PowerKind,
    pub bounce: f32,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerKind) -> Self {
        PowerUp {
            x,
            y,
            w: POWER_UP_SIZE,
            h: POWER_UP_SIZE,
            kind,
            bounce: 0.0,
            collected: false,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }

    pub fn update(&mut self) {
        self.bounce += 0.12;
    }

    pub fn bob(&self) -> f32 {
        self.bounce.sin() * 5.0
    }

    /// Returns the power granted on the frame of collection.
    pub fn check_pickup(&mut self, player: &Rect) -> Option<PowerKind> {
        if self.collected || !rects_intersect(player, &self.rect()) {
            return None;
        }
        self.collected = true;
        Some(self.kind)
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// Everything the frame step reads and writes.  Cloneable so `tick` can hand
/// back a new copy and leave the input state untouched.
#[derive(Clone, Debug)]
pub struct GameState {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub power_ups: Vec<PowerUp>,
    pub particles: ParticleSystem,
    pub camera: Camera,
    pub levels: LevelManager,
    pub level: LevelDescriptor,
    pub lives: u32,
    pub score: u32,
    /// Coins collected across the whole run.
    pub coins_collected: u32,
    /// Best score loaded from the save record, updated live.
    pub best_score: u32,
    pub status: GameStatus,
    pub frame: u64,
    /// Events raised by the most recent `tick`.
    pub events: Vec<FrameEvent>,
    pub config: GameConfig,
}

impl GameState {
    pub fn boss(&self) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.is_boss())
    }
}
