/// Things that happened during one frame.  The front end drains them for
/// sound cues and logging; the simulation never reads them back.

use crate::powers::PowerKind;

#[derive(Clone, Debug, PartialEq)]
pub enum FrameEvent {
    Jumped { double: bool },
    Landed,
    CoinCollected,
    PowerUpCollected(PowerKind),
    PowerExpired(PowerKind),
    EnemyStomped { x: f32, y: f32 },
    EnemyDefeated { boss: bool, x: f32, y: f32 },
    ShieldAbsorbedHit,
    PlayerHurt { lives_left: u32 },
    PlatformFall,
    LevelComplete(u32),
    GameOver,
}

impl FrameEvent {
    /// Name of the sound cue to fire for this event, if any.
    pub fn sound(&self) -> Option<&'static str> {
        match self {
            FrameEvent::Jumped { .. } => Some("jump"),
            FrameEvent::CoinCollected => Some("coin"),
            FrameEvent::PowerUpCollected(_) => Some("powerup"),
            FrameEvent::EnemyStomped { .. } | FrameEvent::EnemyDefeated { .. } => Some("stomp"),
            FrameEvent::ShieldAbsorbedHit | FrameEvent::PlayerHurt { .. } => Some("hurt"),
            FrameEvent::LevelComplete(_) => Some("level_complete"),
            FrameEvent::GameOver => Some("game_over"),
            FrameEvent::Landed | FrameEvent::PowerExpired(_) | FrameEvent::PlatformFall => None,
        }
    }
}
