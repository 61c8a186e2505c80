/// Scene building: translates a `GameState` into drawable shapes.
///
/// No pixels are touched here.  A renderer receives the `Scene`, subtracts
/// `camera_x` from every `world` shape, and draws `overlay` shapes as-is.

use crate::enemy::{Enemy, EnemyKind};
use crate::entities::{GameState, GameStatus};
use crate::physics::GROUND_Y;
use crate::powers::PowerKind;

// ── Colour palette (0xRRGGBB) ────────────────────────────────────────────────

pub const C_PLAYER: u32 = 0x00eaff;
pub const C_PLAYER_SHIELD: u32 = 0x7fffff;
pub const C_PLAYER_INVINCIBLE: u32 = 0xff004c;
pub const C_ENEMY: u32 = 0xff004c;
pub const C_BOSS: u32 = 0xff00ff;
pub const C_COIN: u32 = 0xffe600;
pub const C_HUD: u32 = 0xffffff;
pub const C_BAR_BACK: u32 = 0x000000;
pub const C_GAME_OVER: u32 = 0xff004c;
pub const C_LEVEL_COMPLETE: u32 = 0x00ff9d;

const GROUND_DEPTH: f32 = 80.0;
const BOSS_BAR_X: f32 = 80.0;
const BOSS_BAR_W: f32 = 200.0;

pub fn power_color(kind: PowerKind) -> u32 {
    match kind {
        PowerKind::Shield => 0x00eaff,
        PowerKind::Speed => 0xff7b00,
        PowerKind::DoubleJump => 0xb000ff,
        PowerKind::Invincible => 0xff004c,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect { x: f32, y: f32, w: f32, h: f32, color: u32 },
    Circle { x: f32, y: f32, r: f32, color: u32 },
    Text { x: f32, y: f32, text: String, color: u32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub camera_x: f32,
    pub background: u32,
    /// World-space shapes; offset by `camera_x` when drawn.
    pub world: Vec<Shape>,
    /// Screen-space shapes (HUD, boss bar, banners).
    pub overlay: Vec<Shape>,
}

/// Build the drawable scene for one frame.
pub fn build_scene(state: &GameState) -> Scene {
    let palette = state.level.theme.palette();
    let mut world = Vec::new();
    let mut overlay = Vec::new();

    world.push(Shape::Rect {
        x: 0.0,
        y: GROUND_Y,
        w: state.level.length + 800.0,
        h: GROUND_DEPTH,
        color: palette.ground,
    });

    for platform in &state.platforms {
        world.push(Shape::Rect {
            x: platform.rect.x,
            y: platform.rect.y,
            w: platform.rect.w,
            h: platform.rect.h,
            color: palette.platform,
        });
    }

    for coin in state.coins.iter().filter(|c| !c.collected) {
        world.push(Shape::Circle {
            x: coin.x,
            y: coin.y + coin.bob(),
            r: coin.r,
            color: C_COIN,
        });
    }

    for power_up in state.power_ups.iter().filter(|p| !p.collected) {
        world.push(Shape::Rect {
            x: power_up.x,
            y: power_up.y + power_up.bob(),
            w: power_up.w,
            h: power_up.h,
            color: power_color(power_up.kind),
        });
    }

    for enemy in &state.enemies {
        world.push(enemy_shape(enemy));
        if let EnemyKind::Boss(_) = enemy.kind {
            push_boss_bar(&mut overlay, enemy);
        }
    }

    // Blink while recovering from a hit.
    let player = &state.player;
    if player.mercy_frames / 4 % 2 == 0 {
        let color = if player.powers.invincible() {
            C_PLAYER_INVINCIBLE
        } else if player.powers.shield() {
            C_PLAYER_SHIELD
        } else {
            C_PLAYER
        };
        world.push(Shape::Rect {
            x: player.body.x,
            y: player.body.y,
            w: player.body.w,
            h: player.body.h,
            color,
        });
    }

    for p in &state.particles.particles {
        world.push(Shape::Rect {
            x: p.x,
            y: p.y,
            w: p.size,
            h: p.size,
            color: p.color,
        });
    }

    push_hud(&mut overlay, state);
    push_banner(&mut overlay, state);

    Scene {
        camera_x: state.camera.x,
        background: palette.sky,
        world,
        overlay,
    }
}

fn enemy_shape(enemy: &Enemy) -> Shape {
    let color = if enemy.is_boss() { C_BOSS } else { C_ENEMY };
    Shape::Rect {
        x: enemy.body.x,
        y: enemy.body.y,
        w: enemy.body.w,
        h: enemy.body.h,
        color,
    }
}

fn push_boss_bar(overlay: &mut Vec<Shape>, boss: &Enemy) {
    let fraction = if boss.max_health == 0 {
        0.0
    } else {
        boss.health as f32 / boss.max_health as f32
    };
    overlay.push(Shape::Rect {
        x: BOSS_BAR_X,
        y: 10.0,
        w: BOSS_BAR_W,
        h: 10.0,
        color: C_BAR_BACK,
    });
    overlay.push(Shape::Rect {
        x: BOSS_BAR_X,
        y: 10.0,
        w: BOSS_BAR_W * fraction,
        h: 10.0,
        color: C_BOSS,
    });
}

fn push_hud(overlay: &mut Vec<Shape>, state: &GameState) {
    let lines = [
        format!("Level: {}", state.level.number),
        format!("Score: {}", state.score),
        format!("Lives: {}", state.lives),
        format!("Coins: {}", state.coins_collected),
    ];
    for (i, text) in lines.into_iter().enumerate() {
        overlay.push(Shape::Text {
            x: 10.0,
            y: 20.0 + i as f32 * 20.0,
            text,
            color: C_HUD,
        });
    }

    for (i, kind) in state.player.powers.active_kinds().into_iter().enumerate() {
        let seconds = state.player.powers.remaining(kind) / 60 + 1;
        overlay.push(Shape::Text {
            x: 10.0,
            y: 100.0 + i as f32 * 20.0,
            text: format!("{} {}s", kind.name(), seconds),
            color: power_color(kind),
        });
    }
}

fn push_banner(overlay: &mut Vec<Shape>, state: &GameState) {
    let (text, color) = match state.status {
        GameStatus::Playing => return,
        GameStatus::GameOver => ("GAME OVER".to_string(), C_GAME_OVER),
        GameStatus::LevelComplete => ("LEVEL COMPLETE!".to_string(), C_LEVEL_COMPLETE),
        GameStatus::Victory => ("ALL LEVELS CLEARED!".to_string(), C_LEVEL_COMPLETE),
    };
    overlay.push(Shape::Text {
        x: 60.0,
        y: 320.0,
        text,
        color,
    });
}
