/// Player-side power-up status: four flags, each with its own frame countdown.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerKind {
    Shield,
    Speed,
    DoubleJump,
    Invincible,
}

impl PowerKind {
    pub const ALL: [PowerKind; 4] = [
        PowerKind::Shield,
        PowerKind::Speed,
        PowerKind::DoubleJump,
        PowerKind::Invincible,
    ];

    /// Frames a fresh activation lasts.
    pub fn duration(self) -> u32 {
        match self {
            PowerKind::Shield => 600,
            PowerKind::Speed => 600,
            PowerKind::DoubleJump => 800,
            PowerKind::Invincible => 300,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PowerKind::Shield => "shield",
            PowerKind::Speed => "speed",
            PowerKind::DoubleJump => "doubleJump",
            PowerKind::Invincible => "invincible",
        }
    }

    fn slot(self) -> usize {
        match self {
            PowerKind::Shield => 0,
            PowerKind::Speed => 1,
            PowerKind::DoubleJump => 2,
            PowerKind::Invincible => 3,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerPowers {
    active: [bool; 4],
    timers: [u32; 4],
}

impl PlayerPowers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn a power on and restart its timer.  Re-activating an active power
    /// does not add to the remaining time.
    pub fn activate(&mut self, kind: PowerKind) {
        let i = kind.slot();
        self.active[i] = true;
        self.timers[i] = kind.duration();
    }

    pub fn deactivate(&mut self, kind: PowerKind) {
        let i = kind.slot();
        self.active[i] = false;
        self.timers[i] = 0;
    }

    pub fn is_active(&self, kind: PowerKind) -> bool {
        self.active[kind.slot()]
    }

    pub fn remaining(&self, kind: PowerKind) -> u32 {
        self.timers[kind.slot()]
    }

    pub fn shield(&self) -> bool {
        self.is_active(PowerKind::Shield)
    }

    pub fn speed_boost(&self) -> bool {
        self.is_active(PowerKind::Speed)
    }

    pub fn double_jump(&self) -> bool {
        self.is_active(PowerKind::DoubleJump)
    }

    pub fn invincible(&self) -> bool {
        self.is_active(PowerKind::Invincible)
    }

    /// Powers currently on, in slot order.
    pub fn active_kinds(&self) -> Vec<PowerKind> {
        PowerKind::ALL
            .iter()
            .copied()
            .filter(|k| self.is_active(*k))
            .collect()
    }

    /// Advance one frame.  Returns the powers that expired on this frame.
    pub fn tick(&mut self) -> Vec<PowerKind> {
        let mut expired = Vec::new();
        for kind in PowerKind::ALL {
            let i = kind.slot();
            if self.timers[i] > 0 {
                self.timers[i] -= 1;
                if self.timers[i] == 0 {
                    self.active[i] = false;
                    expired.push(kind);
                }
            }
        }
        expired
    }

    /// Pure transition: the state after `frames` more frames.
    pub fn advanced(&self, frames: u32) -> PlayerPowers {
        let mut next = self.clone();
        for i in 0..next.timers.len() {
            if next.timers[i] > 0 {
                next.timers[i] = next.timers[i].saturating_sub(frames);
                if next.timers[i] == 0 {
                    next.active[i] = false;
                }
            }
        }
        next
    }
}
