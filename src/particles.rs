/// Cosmetic particle bursts.  Nothing in gameplay reads them.

use rand::Rng;

const PARTICLE_GRAVITY: f32 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    /// Frames left; the particle is dropped at 0.
    pub life: u32,
    pub max_life: u32,
    pub color: u32,
    pub size: f32,
}

impl Particle {
    pub fn update(&mut self) {
        self.life = self.life.saturating_sub(1);
        self.x += self.vx;
        self.y += self.vy;
        self.vy += PARTICLE_GRAVITY;
    }

    /// Opacity in [0, 1], fading with remaining life.
    pub fn alpha(&self) -> f32 {
        if self.max_life == 0 {
            return 0.0;
        }
        self.life as f32 / self.max_life as f32
    }
}

/// Burst parameters: count, horizontal spread, upward kick, life, color, size.
struct Burst {
    count: usize,
    spread: f32,
    kick: f32,
    life: u32,
    color: u32,
    size: f32,
}

const JUMP: Burst = Burst { count: 6, spread: 2.0, kick: 3.0, life: 30, color: 0xffffff, size: 3.0 };
const LAND: Burst = Burst { count: 8, spread: 3.0, kick: 2.0, life: 25, color: 0x00eaff, size: 3.0 };
const COIN: Burst = Burst { count: 10, spread: 4.0, kick: 4.0, life: 35, color: 0xffe600, size: 4.0 };
const HIT: Burst = Burst { count: 12, spread: 5.0, kick: 5.0, life: 40, color: 0xff004c, size: 4.0 };

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn spawn(&mut self, burst: &Burst, x: f32, y: f32, jitter_x: f32, rng: &mut impl Rng) {
        for _ in 0..burst.count {
            self.particles.push(Particle {
                x: x + rng.gen::<f32>() * jitter_x,
                y,
                vx: (rng.gen::<f32>() - 0.5) * burst.spread,
                vy: -rng.gen::<f32>() * burst.kick,
                life: burst.life,
                max_life: burst.life,
                color: burst.color,
                size: burst.size,
            });
        }
    }

    pub fn spawn_jump(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(&JUMP, x, y + 30.0, 10.0, rng);
    }

    pub fn spawn_land(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(&LAND, x, y, 0.0, rng);
    }

    pub fn spawn_coin(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(&COIN, x, y, 0.0, rng);
    }

    pub fn spawn_hit(&mut self, x: f32, y: f32, rng: &mut impl Rng) {
        self.spawn(&HIT, x, y, 0.0, rng);
    }

    /// Drop expired particles, then move the rest.
    pub fn update(&mut self) {
        self.particles.retain(|p| p.life > 0);
        for p in &mut self.particles {
            p.update();
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
