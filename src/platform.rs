/// Platforms, world themes and the one-way "land from above" collision test.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::geometry::{rand_range, Rect};
use crate::physics::Body;

pub const PLATFORM_W: f32 = 70.0;
pub const PLATFORM_H: f32 = 14.0;
pub const MAX_PLATFORMS: usize = 40;
/// How far below a platform's top a body's bottom may sit and still land.
pub const LANDING_TOLERANCE: f32 = 12.0;
/// Per-frame velocity gain while standing on a slippery platform.
pub const SLIPPERY_GAIN: f32 = 1.05;
const FALL_RATE: f32 = 0.4;

// ── World themes ────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Grass,
    Desert,
    Ice,
    Lava,
    Dark,
}

/// Palette and surface modifiers for a theme.  Colors are 0xRRGGBB.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTheme {
    pub ground: u32,
    pub platform: u32,
    pub accent: u32,
    pub sky: u32,
    pub slippery: bool,
    /// Carried in the table only; no gameplay rule reads it yet.
    pub damage: bool,
}

impl Theme {
    /// Theme band for a level number.
    pub fn for_level(level: u32) -> Theme {
        if level < 20 {
            Theme::Grass
        } else if level < 40 {
            Theme::Desert
        } else if level < 60 {
            Theme::Ice
        } else if level < 80 {
            Theme::Lava
        } else {
            Theme::Dark
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Grass => "grass",
            Theme::Desert => "desert",
            Theme::Ice => "ice",
            Theme::Lava => "lava",
            Theme::Dark => "dark",
        }
    }

    pub fn palette(self) -> WorldTheme {
        match self {
            Theme::Grass => WorldTheme {
                ground: 0x3cb043,
                platform: 0x2e8b57,
                accent: 0x00ff9d,
                sky: 0x113f67,
                slippery: false,
                damage: false,
            },
            Theme::Desert => WorldTheme {
                ground: 0xd2b48c,
                platform: 0xc19a6b,
                accent: 0xffcc66,
                sky: 0x7a4a28,
                slippery: false,
                damage: false,
            },
            Theme::Ice => WorldTheme {
                ground: 0xaeefff,
                platform: 0x7fdfff,
                accent: 0x00eaff,
                sky: 0x0a2a33,
                slippery: true,
                damage: false,
            },
            Theme::Lava => WorldTheme {
                ground: 0x3b0a0a,
                platform: 0xff4500,
                accent: 0xff004c,
                sky: 0x5c0000,
                slippery: false,
                damage: true,
            },
            Theme::Dark => WorldTheme {
                ground: 0x1a1a1a,
                platform: 0x333333,
                accent: 0xb000ff,
                sky: 0x1a0033,
                slippery: false,
                damage: false,
            },
        }
    }
}

// ── Platforms ───────────────────────────────────────────────────────────────

/// Falling-platform state machine.  Once `Falling`, it never returns to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FallState {
    Idle,
    Falling { timer: u32 },
}

impl FallState {
    pub fn triggered(self) -> FallState {
        match self {
            FallState::Idle => FallState::Falling { timer: 1 },
            falling => falling,
        }
    }

    /// Pure transition over `frames` frames, plus the total downward
    /// displacement they produce.
    pub fn advanced(self, frames: u32) -> (FallState, f32) {
        match self {
            FallState::Idle => (FallState::Idle, 0.0),
            FallState::Falling { timer } => {
                let dy: f32 = (1..=frames)
                    .map(|i| (timer + i) as f32 * FALL_RATE)
                    .sum();
                (FallState::Falling { timer: timer + frames }, dy)
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PlatformKind {
    Static,
    Moving {
        start_x: f32,
        range: f32,
        speed: f32,
        /// +1.0 or -1.0.
        dir: f32,
    },
    Falling(FallState),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub kind: PlatformKind,
}

impl Platform {
    pub fn fixed(x: f32, y: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, PLATFORM_W, PLATFORM_H),
            kind: PlatformKind::Static,
        }
    }

    pub fn moving(x: f32, y: f32, speed: f32, range: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, PLATFORM_W, PLATFORM_H),
            kind: PlatformKind::Moving {
                start_x: x,
                range,
                speed,
                dir: 1.0,
            },
        }
    }

    pub fn falling(x: f32, y: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, PLATFORM_W, PLATFORM_H),
            kind: PlatformKind::Falling(FallState::Idle),
        }
    }

    pub fn top(&self) -> f32 {
        self.rect.y
    }

    /// Advance one frame.  Returns the horizontal displacement so a rider
    /// can be carried along.
    pub fn update(&mut self) -> f32 {
        match &mut self.kind {
            PlatformKind::Static => 0.0,
            PlatformKind::Moving {
                start_x,
                range,
                speed,
                dir,
            } => {
                let dx = *speed * *dir;
                self.rect.x += dx;
                if (self.rect.x - *start_x).abs() > *range {
                    *dir = -*dir;
                }
                dx
            }
            PlatformKind::Falling(state) => {
                let (next, dy) = state.advanced(1);
                *state = next;
                self.rect.y += dy;
                0.0
            }
        }
    }

    /// Start the fall.  No effect on non-falling platforms or when already falling.
    pub fn trigger_fall(&mut self) {
        if let PlatformKind::Falling(state) = &mut self.kind {
            *state = state.triggered();
        }
    }

    pub fn fall_timer(&self) -> u32 {
        match self.kind {
            PlatformKind::Falling(FallState::Falling { timer }) => timer,
            _ => 0,
        }
    }

    pub fn is_falling_kind(&self) -> bool {
        matches!(self.kind, PlatformKind::Falling(_))
    }
}

/// Top-only support test: horizontal overlap, bottom within the landing
/// tolerance of the surface, and the next step reaching it.  Side and
/// underside contact are ignored.
pub fn supports(body: &Body, platform: &Platform) -> bool {
    let p = &platform.rect;
    body.x + body.w > p.x
        && body.x < p.x + p.w
        && body.bottom() <= p.y + LANDING_TOLERANCE
        && body.bottom() + body.vy >= p.y
}

/// Scatter the platform set for a level.
pub fn generate_platforms(
    level: u32,
    level_length: f32,
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Platform> {
    let count = count.min(MAX_PLATFORMS);
    let speed = 1.2 + level as f32 * 0.05;

    (0..count)
        .map(|_| {
            let x = rand_range(rng, 200.0, 200.0 + level_length);
            let y = rand_range(rng, 200.0, 380.0);
            let moving = level > 5 && rng.gen::<f32>() > 0.7;
            let falling = level > 10 && rng.gen::<f32>() > 0.85;
            let range = rand_range(rng, 80.0, 200.0);

            if falling {
                Platform::falling(x, y)
            } else if moving {
                Platform::moving(x, y, speed, range)
            } else {
                Platform::fixed(x, y)
            }
        })
        .collect()
}
