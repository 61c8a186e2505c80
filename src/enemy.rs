/// Enemy AI.
///
/// Every enemy carries one [`AiMode`] evaluated each frame before physics.
/// Bosses are the same `Enemy` value tagged with [`EnemyKind::Boss`]; their
/// phase machine rewrites the AI mode and speed from remaining health.

use rand::Rng;
use tracing::debug;

use crate::geometry::rand_range;
use crate::level::LevelDescriptor;
use crate::physics::{Body, GROUND_Y};

pub const ENEMY_SIZE: f32 = 36.0;
pub const BOSS_SIZE: f32 = 90.0;
pub const ENEMY_GRAVITY: f32 = 1.2;
pub const PATROL_HALF_RANGE: f32 = 120.0;
pub const JUMP_TRIGGER_DISTANCE: f32 = 120.0;
pub const ENEMY_JUMP_VELOCITY: f32 = -14.0;
pub const JUMP_COOLDOWN_FRAMES: u32 = 90;
pub const MAX_PACK_SIZE: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiMode {
    Patrol,
    Chase,
    Jumper,
    Aggressive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BossPhase {
    One = 1,
    Two = 2,
    Three = 3,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BossState {
    pub phase: BossPhase,
    /// Frames the boss has been alive.
    pub age: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub enum EnemyKind {
    Basic,
    Boss(BossState),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub body: Body,
    pub speed: f32,
    pub health: u32,
    pub max_health: u32,
    pub ai: AiMode,
    pub patrol_min: f32,
    pub patrol_max: f32,
    pub jump_cooldown: u32,
    pub kind: EnemyKind,
}

/// Phase for a given remaining health.
pub fn boss_phase_for(health: u32) -> BossPhase {
    if health < 4 {
        BossPhase::Three
    } else if health < 8 {
        BossPhase::Two
    } else {
        BossPhase::One
    }
}

impl Enemy {
    /// A basic enemy standing on the ground, patrolling ±120 around `x`.
    pub fn new(x: f32, speed: f32, ai: AiMode) -> Self {
        let mut body = Body::new(x, GROUND_Y - ENEMY_SIZE, ENEMY_SIZE, ENEMY_SIZE);
        body.vx = speed;
        Enemy {
            body,
            speed,
            health: 1,
            max_health: 1,
            ai,
            patrol_min: x - PATROL_HALF_RANGE,
            patrol_max: x + PATROL_HALF_RANGE,
            jump_cooldown: 0,
            kind: EnemyKind::Basic,
        }
    }

    pub fn boss(x: f32, level: u32) -> Self {
        let speed = 2.0 + level as f32 * 0.05;
        let health = 10 + level * 2;
        let mut body = Body::new(x, GROUND_Y - BOSS_SIZE, BOSS_SIZE, BOSS_SIZE);
        body.vx = speed;
        Enemy {
            body,
            speed,
            health,
            max_health: health,
            ai: AiMode::Aggressive,
            patrol_min: x - PATROL_HALF_RANGE,
            patrol_max: x + PATROL_HALF_RANGE,
            jump_cooldown: 0,
            kind: EnemyKind::Boss(BossState {
                phase: BossPhase::One,
                age: 0,
            }),
        }
    }

    pub fn with_health(mut self, health: u32) -> Self {
        self.health = health;
        self.max_health = health;
        self
    }

    pub fn is_boss(&self) -> bool {
        matches!(self.kind, EnemyKind::Boss(_))
    }

    pub fn boss_phase(&self) -> Option<BossPhase> {
        match &self.kind {
            EnemyKind::Boss(state) => Some(state.phase),
            EnemyKind::Basic => None,
        }
    }

    /// One frame: boss phase (if any), AI, then physics.
    pub fn update(&mut self, player_x: f32) {
        self.update_boss_phase();
        self.run_ai(player_x);
        self.body.step(ENEMY_GRAVITY, GROUND_Y);
    }

    /// Re-evaluated every frame; the phase never moves backwards.
    fn update_boss_phase(&mut self) {
        let health = self.health;
        let EnemyKind::Boss(state) = &mut self.kind else {
            return;
        };
        state.age += 1;

        let next = state.phase.max(boss_phase_for(health));
        if next != state.phase {
            debug!(from = ?state.phase, to = ?next, health, "boss phase change");
            state.phase = next;
        }

        match state.phase {
            BossPhase::One => self.ai = AiMode::Chase,
            BossPhase::Two => {
                self.ai = AiMode::Aggressive;
                self.speed = 3.0;
            }
            BossPhase::Three => {
                self.ai = AiMode::Jumper;
                self.speed = 4.0;
            }
        }
    }

    pub fn run_ai(&mut self, player_x: f32) {
        match self.ai {
            AiMode::Patrol => self.patrol(),
            AiMode::Chase => self.chase(player_x),
            AiMode::Jumper => self.jump_at(player_x),
            AiMode::Aggressive => {
                self.chase(player_x);
                self.jump_at(player_x);
            }
        }
    }

    fn patrol(&mut self) {
        if self.body.x < self.patrol_min {
            self.body.vx = self.speed;
        }
        if self.body.x > self.patrol_max {
            self.body.vx = -self.speed;
        }
    }

    fn chase(&mut self, player_x: f32) {
        if player_x > self.body.x {
            self.body.vx = self.speed + 1.0;
        } else {
            self.body.vx = -(self.speed + 1.0);
        }
    }

    fn jump_at(&mut self, player_x: f32) {
        if self.jump_cooldown > 0 {
            self.jump_cooldown -= 1;
            return;
        }
        let distance = (player_x - self.body.x).abs();
        if distance < JUMP_TRIGGER_DISTANCE && self.body.grounded {
            self.body.vy = ENEMY_JUMP_VELOCITY;
            self.jump_cooldown = JUMP_COOLDOWN_FRAMES;
        }
    }

    /// Remove one point of health.  Returns true once the enemy is destroyed;
    /// removing it from play is the caller's job.
    pub fn take_damage(&mut self) -> bool {
        debug_assert!(self.health > 0, "damage applied to a destroyed enemy");
        self.health = self.health.saturating_sub(1);
        self.health == 0
    }

    /// Score awarded when this enemy is destroyed.
    pub fn score_value(&self) -> u32 {
        match self.kind {
            EnemyKind::Basic => 100,
            EnemyKind::Boss(_) => 1000,
        }
    }
}

/// Roll the AI mix for a basic enemy.
fn pick_ai(roll: f64) -> AiMode {
    if roll > 0.95 {
        AiMode::Aggressive
    } else if roll > 0.85 {
        AiMode::Jumper
    } else if roll > 0.7 {
        AiMode::Chase
    } else {
        AiMode::Patrol
    }
}

/// Build the enemy set for a level: a capped pack of basic enemies spread
/// over the level, plus a boss near the end when the level has one.
pub fn create_enemy_pack(level: &LevelDescriptor, rng: &mut impl Rng) -> Vec<Enemy> {
    let count = level.enemy_count.min(MAX_PACK_SIZE);

    let mut enemies: Vec<Enemy> = (0..count)
        .map(|_| {
            let ai = pick_ai(rng.gen::<f64>());
            let x = rand_range(rng, 400.0, 400.0 + level.length);
            Enemy::new(x, level.enemy_speed, ai)
        })
        .collect();

    if level.has_boss {
        enemies.push(Enemy::boss(level.length - 200.0, level.number));
    }
    enemies
}
