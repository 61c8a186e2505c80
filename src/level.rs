/// Level descriptors, the level counter, and pickup scatter.
///
/// Shapes are a pure function of the level number; contents are random
/// draws from the injected RNG, so the same level regenerates differently.

use rand::Rng;

use crate::entities::{Coin, PowerUp};
use crate::error::GameError;
use crate::geometry::rand_range;
use crate::platform::Theme;
use crate::powers::PowerKind;

pub const MAX_COINS: usize = 80;
pub const MAX_POWER_UPS: usize = 6;

#[derive(Clone, Debug, PartialEq)]
pub struct LevelDescriptor {
    pub number: u32,
    pub theme: Theme,
    /// World-space x at which the level is complete.
    pub length: f32,
    pub gravity: f32,
    pub enemy_speed: f32,
    pub enemy_multiplier: f32,
    pub platform_density: f32,
    pub coin_density: f32,
    pub enemy_count: usize,
    pub platform_count: usize,
    pub coin_count: usize,
    pub power_up_count: usize,
    pub has_boss: bool,
}

pub fn describe_level(level: u32) -> LevelDescriptor {
    let n = level as f32;
    LevelDescriptor {
        number: level,
        theme: Theme::for_level(level),
        length: 2000.0 + n * 300.0,
        gravity: 1.2 + n * 0.01,
        enemy_speed: 2.0 + n * 0.08,
        enemy_multiplier: 1.0 + n * 0.05,
        platform_density: (0.3 + n * 0.01).min(0.7),
        coin_density: (0.4 + n * 0.01).min(0.8),
        enemy_count: (5 + level as usize).min(20),
        platform_count: (5 + 2 * level as usize).min(40),
        coin_count: (20 + 2 * level as usize).min(MAX_COINS),
        power_up_count: (2 + level as usize / 5).min(MAX_POWER_UPS),
        has_boss: level % 10 == 0,
    }
}

/// Tracks the current level within `1..=max_levels`.
#[derive(Clone, Debug, PartialEq)]
pub struct LevelManager {
    pub max_levels: u32,
    pub current: u32,
}

impl LevelManager {
    pub fn new(max_levels: u32) -> Self {
        LevelManager {
            max_levels,
            current: 1,
        }
    }

    pub fn check(&self, level: u32) -> Result<(), GameError> {
        if level == 0 || level > self.max_levels {
            return Err(GameError::LevelOutOfRange {
                requested: level,
                max: self.max_levels,
            });
        }
        Ok(())
    }

    /// Descriptor for a level inside the configured range.
    pub fn describe(&self, level: u32) -> Result<LevelDescriptor, GameError> {
        self.check(level)?;
        Ok(describe_level(level))
    }

    /// Step to the next level.  At the last level this fails and the
    /// counter stays where it is.
    pub fn next_level(&mut self) -> Result<u32, GameError> {
        self.check(self.current + 1)?;
        self.current += 1;
        Ok(self.current)
    }

    pub fn reset(&mut self) {
        self.current = 1;
    }

    pub fn is_last(&self) -> bool {
        self.current >= self.max_levels
    }
}

pub fn generate_coins(level: &LevelDescriptor, rng: &mut impl Rng) -> Vec<Coin> {
    (0..level.coin_count.min(MAX_COINS))
        .map(|_| {
            Coin::new(
                rand_range(rng, 200.0, 200.0 + level.length),
                rand_range(rng, 300.0, 420.0),
            )
        })
        .collect()
}

pub fn generate_power_ups(level: &LevelDescriptor, rng: &mut impl Rng) -> Vec<PowerUp> {
    (0..level.power_up_count.min(MAX_POWER_UPS))
        .map(|_| {
            let x = rand_range(rng, 400.0, 400.0 + level.length);
            let kind = PowerKind::ALL[rng.gen_range(0..PowerKind::ALL.len())];
            PowerUp::new(x, 520.0, kind)
        })
        .collect()
}
