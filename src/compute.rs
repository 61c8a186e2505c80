/// The frame step and level transitions.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (plus input and an RNG handle where needed) and returns a new
/// `GameState`.  All randomness comes through the injected RNG, so tests can
/// drive the simulation with a seeded generator.

use rand::Rng;
use tracing::{debug, info};

use crate::camera::Camera;
use crate::config::GameConfig;
use crate::enemy::create_enemy_pack;
use crate::entities::{GameState, GameStatus};
use crate::error::GameError;
use crate::events::FrameEvent;
use crate::geometry::rects_intersect;
use crate::input::InputSnapshot;
use crate::level::{generate_coins, generate_power_ups, LevelManager};
use crate::particles::ParticleSystem;
use crate::physics::GROUND_Y;
use crate::platform::{generate_platforms, supports, LANDING_TOLERANCE, SLIPPERY_GAIN};
use crate::player::{JumpKind, Player};
use crate::powers::PowerKind;

pub const STOMP_BOUNCE: f32 = -10.0;
pub const HURT_MERCY_FRAMES: u32 = 90;
pub const SHIELD_MERCY_FRAMES: u32 = 60;
pub const COIN_SCORE: u32 = 10;
pub const POWER_UP_SCORE: u32 = 50;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Start a new run at `start_level`.
pub fn init_state(
    config: GameConfig,
    start_level: u32,
    best_score: u32,
    rng: &mut impl Rng,
) -> Result<GameState, GameError> {
    let mut levels = LevelManager::new(config.max_levels);
    let level = levels.describe(start_level)?;
    levels.current = start_level;

    let state = GameState {
        player: Player::new(),
        enemies: Vec::new(),
        platforms: Vec::new(),
        coins: Vec::new(),
        power_ups: Vec::new(),
        particles: ParticleSystem::new(),
        camera: Camera::new(),
        levels,
        level,
        lives: config.start_lives,
        score: 0,
        coins_collected: 0,
        best_score,
        status: GameStatus::Playing,
        frame: 0,
        events: Vec::new(),
        config,
    };
    load_level(&state, start_level, rng)
}

/// Rebuild every per-level list for `level`.  Score, coins and lives carry
/// over; entity state does not.  Out-of-range levels are refused.
pub fn load_level(
    state: &GameState,
    level: u32,
    rng: &mut impl Rng,
) -> Result<GameState, GameError> {
    let descriptor = state.levels.describe(level)?;
    let mut levels = state.levels.clone();
    levels.current = level;

    let platforms = generate_platforms(
        level,
        descriptor.length,
        descriptor.platform_count,
        rng,
    );
    let enemies = create_enemy_pack(&descriptor, rng);
    let coins = generate_coins(&descriptor, rng);
    let power_ups = generate_power_ups(&descriptor, rng);

    info!(
        level,
        theme = descriptor.theme.name(),
        enemies = enemies.len(),
        platforms = platforms.len(),
        boss = descriptor.has_boss,
        "level loaded"
    );

    Ok(GameState {
        player: Player::new(),
        enemies,
        platforms,
        coins,
        power_ups,
        particles: ParticleSystem::new(),
        camera: Camera::new(),
        levels,
        level: descriptor,
        status: GameStatus::Playing,
        events: Vec::new(),
        ..state.clone()
    })
}

/// Move to the next level.  On the last level this fails closed and the
/// caller keeps its current state.
pub fn advance_level(state: &GameState, rng: &mut impl Rng) -> Result<GameState, GameError> {
    let mut levels = state.levels.clone();
    let next = levels.next_level()?;
    load_level(state, next, rng)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame.  Outside `Playing` the state is
/// returned unchanged apart from an empty event buffer.
pub fn tick(state: &GameState, input: &InputSnapshot, rng: &mut impl Rng) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    if next.status != GameStatus::Playing {
        return next;
    }
    next.frame += 1;
    next.score += 1;

    let theme = next.level.theme.palette();

    // ── 1. Input ─────────────────────────────────────────────────────────────
    next.player.apply_input(input, theme.slippery);
    if input.jump_pressed {
        if let Some(kind) = next.player.jump() {
            next.particles
                .spawn_jump(next.player.body.x, next.player.body.y, rng);
            next.events.push(FrameEvent::Jumped {
                double: kind == JumpKind::Double,
            });
        }
    }
    let was_airborne = !next.player.body.grounded;
    let prev_bottom = next.player.body.bottom();

    // ── 2. Player physics & timers ───────────────────────────────────────────
    next.player.step(next.level.gravity, GROUND_Y);
    for kind in next.player.powers.tick() {
        next.events.push(FrameEvent::PowerExpired(kind));
    }
    next.player.mercy_frames = next.player.mercy_frames.saturating_sub(1);

    // ── 3. Platforms ─────────────────────────────────────────────────────────
    resolve_platforms(&mut next, theme.slippery);
    if was_airborne && next.player.body.grounded {
        next.particles
            .spawn_land(next.player.body.center_x(), next.player.body.bottom(), rng);
        next.events.push(FrameEvent::Landed);
    }

    // ── 4. Enemies ───────────────────────────────────────────────────────────
    let player_x = next.player.body.x;
    for enemy in &mut next.enemies {
        enemy.update(player_x);
    }
    resolve_enemy_contacts(&mut next, prev_bottom, rng);
    if next.status == GameStatus::GameOver {
        next.best_score = next.best_score.max(next.score);
        return next;
    }

    // ── 5. Pickups ───────────────────────────────────────────────────────────
    collect_pickups(&mut next, rng);

    // ── 6. Cosmetics & camera ────────────────────────────────────────────────
    next.particles.update();
    next.camera.follow(next.player.body.x, next.level.length);

    next.best_score = next.best_score.max(next.score);

    // ── 7. Level completion ──────────────────────────────────────────────────
    if next.player.body.x > next.level.length {
        next.status = if next.levels.is_last() {
            GameStatus::Victory
        } else {
            GameStatus::LevelComplete
        };
        info!(level = next.level.number, score = next.score, "level complete");
        next.events.push(FrameEvent::LevelComplete(next.level.number));
    }

    next
}

/// Move platforms, carry a rider, and land the player on any platform that
/// supports it from above.
fn resolve_platforms(state: &mut GameState, slippery: bool) {
    let player = &mut state.player;
    for platform in &mut state.platforms {
        let dx = platform.update();
        if !supports(&player.body, platform) {
            continue;
        }
        player.body.land_on(platform.top());
        player.body.x += dx;
        player.landed();

        if platform.is_falling_kind() && platform.fall_timer() == 0 {
            platform.trigger_fall();
            state.events.push(FrameEvent::PlatformFall);
        }
        if slippery {
            player.body.vx *= SLIPPERY_GAIN;
        }
    }
}

/// Stomps, contact damage, shield and invincibility.
fn resolve_enemy_contacts(state: &mut GameState, prev_bottom: f32, rng: &mut impl Rng) {
    let mut hurt = false;
    let player_rect = state.player.body.rect();

    for enemy in &mut state.enemies {
        if !rects_intersect(&player_rect, &enemy.body.rect()) {
            continue;
        }

        let falling = state.player.body.vy > 0.0;
        if falling && prev_bottom <= enemy.body.y + LANDING_TOLERANCE {
            state.player.body.vy = STOMP_BOUNCE;
            state
                .particles
                .spawn_hit(enemy.body.center_x(), enemy.body.y, rng);
            if enemy.take_damage() {
                state.score += enemy.score_value();
                state.events.push(FrameEvent::EnemyDefeated {
                    boss: enemy.is_boss(),
                    x: enemy.body.x,
                    y: enemy.body.y,
                });
            } else {
                state.events.push(FrameEvent::EnemyStomped {
                    x: enemy.body.x,
                    y: enemy.body.y,
                });
            }
            continue;
        }

        if state.player.powers.invincible() {
            // Bosses shrug off contact; everything else is knocked out.
            if !enemy.is_boss() && enemy.take_damage() {
                state.score += enemy.score_value();
                state
                    .particles
                    .spawn_hit(enemy.body.center_x(), enemy.body.y, rng);
                state.events.push(FrameEvent::EnemyDefeated {
                    boss: false,
                    x: enemy.body.x,
                    y: enemy.body.y,
                });
            }
            continue;
        }

        if state.player.mercy_frames > 0 {
            continue;
        }

        if state.player.powers.shield() {
            state.player.powers.deactivate(PowerKind::Shield);
            state.player.mercy_frames = SHIELD_MERCY_FRAMES;
            state.events.push(FrameEvent::ShieldAbsorbedHit);
            continue;
        }

        hurt = true;
        break;
    }

    state.enemies.retain(|e| e.health > 0);

    if hurt {
        lose_life(state, rng);
    }
}

fn lose_life(state: &mut GameState, rng: &mut impl Rng) {
    state.lives = state.lives.saturating_sub(1);
    state
        .particles
        .spawn_hit(state.player.body.center_x(), state.player.body.y, rng);

    if state.lives == 0 {
        info!(level = state.level.number, score = state.score, "game over");
        state.status = GameStatus::GameOver;
        state.events.push(FrameEvent::GameOver);
        return;
    }

    state.player.respawn();
    state.player.mercy_frames = HURT_MERCY_FRAMES;
    state.events.push(FrameEvent::PlayerHurt {
        lives_left: state.lives,
    });
}

fn collect_pickups(state: &mut GameState, rng: &mut impl Rng) {
    let player_rect = state.player.body.rect();

    for coin in &mut state.coins {
        coin.update();
        if coin.check_pickup(&player_rect) {
            state.coins_collected += 1;
            state.score += COIN_SCORE;
            state.particles.spawn_coin(coin.x, coin.y, rng);
            state.events.push(FrameEvent::CoinCollected);
        }
    }

    for power_up in &mut state.power_ups {
        power_up.update();
        if let Some(kind) = power_up.check_pickup(&player_rect) {
            debug!(power = kind.name(), "power-up collected");
            state.player.powers.activate(kind);
            state.score += POWER_UP_SCORE;
            state.events.push(FrameEvent::PowerUpCollected(kind));
        }
    }
}
