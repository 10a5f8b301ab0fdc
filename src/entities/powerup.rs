//! Entities domain: timed power-ups.

use crate::content::PowerUpDurations;
use crate::entities::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUpKind {
    /// Absorbs the next hit while it lasts.
    Shield,
    SpeedBoost,
    /// Lets the player walk through enemies.
    GhostMode,
}

impl PowerUpKind {
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::Shield,
        PowerUpKind::SpeedBoost,
        PowerUpKind::GhostMode,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub duration: f32,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, duration: f32) -> Self {
        Self { kind, duration }
    }

    /// Power-up with the configured duration for its kind.
    pub fn configured(kind: PowerUpKind, durations: &PowerUpDurations) -> Self {
        let duration = match kind {
            PowerUpKind::Shield => durations.shield,
            PowerUpKind::SpeedBoost => durations.speed_boost,
            PowerUpKind::GhostMode => durations.ghost_mode,
        };
        Self::new(kind, duration)
    }

    /// Arm the matching player buff. Re-applying overwrites the timer.
    pub fn apply(&self, player: &mut Player) {
        match self.kind {
            PowerUpKind::Shield => player.activate_shield(self.duration),
            PowerUpKind::SpeedBoost => player.activate_speed_boost(self.duration),
            PowerUpKind::GhostMode => player.activate_ghost_mode(self.duration),
        }
    }
}
