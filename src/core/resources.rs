//! Core domain: run state shared across screens.

use bevy::prelude::*;

use crate::entities::Player;

/// The three preset player looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlayerSkin {
    #[default]
    Red,
    Green,
    Blue,
}

impl PlayerSkin {
    pub const ALL: [PlayerSkin; 3] = [PlayerSkin::Red, PlayerSkin::Green, PlayerSkin::Blue];

    pub fn name(self) -> &'static str {
        match self {
            PlayerSkin::Red => "RED",
            PlayerSkin::Green => "GREEN",
            PlayerSkin::Blue => "BLUE",
        }
    }

    pub fn color(self) -> Color {
        match self {
            PlayerSkin::Red => Color::srgb(0.85, 0.25, 0.25),
            PlayerSkin::Green => Color::srgb(0.3, 0.7, 0.35),
            PlayerSkin::Blue => Color::srgb(0.25, 0.5, 0.85),
        }
    }
}

/// Where levels come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Numbered level files, up to the configured count.
    #[default]
    Campaign,
    /// Generated levels, level `n` seeded with `seed + n`.
    Endless { seed: u64 },
}

impl RunMode {
    pub fn label(self) -> &'static str {
        match self {
            RunMode::Campaign => "Campaign",
            RunMode::Endless { .. } => "Endless",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelOutcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Aggregate run state.
///
/// The player entity owns lives and inventory; `health` and
/// `keys_collected` here are a projection refreshed with
/// [`GameState::sync_from_player`] and advanced by simulation events.
#[derive(Resource, Debug, Clone)]
pub struct GameState {
    current_level: u32,
    level_completed: bool,
    character: PlayerSkin,
    keys_collected: u32,
    health: i32,
    outcome: LevelOutcome,
    mode: RunMode,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            current_level: 1,
            level_completed: false,
            character: PlayerSkin::default(),
            keys_collected: 0,
            health: 0,
            outcome: LevelOutcome::InProgress,
            mode: RunMode::default(),
        }
    }
}

impl GameState {
    pub fn collect_key(&mut self) {
        self.keys_collected += 1;
    }

    /// Health at or below zero loses the level.
    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
        if self.health <= 0 {
            self.level_lost();
        }
    }

    pub fn level_won(&mut self) {
        self.level_completed = true;
        if self.outcome == LevelOutcome::InProgress {
            self.outcome = LevelOutcome::Won;
        }
    }

    pub fn level_lost(&mut self) {
        self.outcome = LevelOutcome::Lost;
    }

    /// Reset per-level flags for level `level`.
    pub fn start_level(&mut self, level: u32) {
        self.current_level = level;
        self.level_completed = false;
        self.keys_collected = 0;
        self.outcome = LevelOutcome::InProgress;
    }

    /// Move on to the next level and return its number.
    pub fn advance_level(&mut self) -> u32 {
        let next = self.current_level + 1;
        self.start_level(next);
        next
    }

    /// Back to level one, keeping the chosen skin and mode.
    pub fn reset_run(&mut self) {
        self.start_level(1);
        self.health = 0;
    }

    pub fn sync_from_player(&mut self, player: &Player) {
        self.health = player.lives() as i32;
        self.keys_collected = player.inventory().key_count();
    }

    /// Campaign runs end once the level number passes the last level file.
    pub fn is_campaign_finished(&self, max_campaign_levels: u32) -> bool {
        matches!(self.mode, RunMode::Campaign) && self.current_level > max_campaign_levels
    }

    pub fn select_character(&mut self, skin: PlayerSkin) {
        self.character = skin;
    }

    pub fn set_mode(&mut self, mode: RunMode) {
        self.mode = mode;
    }

    pub fn current_level(&self) -> u32 {
        self.current_level
    }

    pub fn is_level_completed(&self) -> bool {
        self.level_completed
    }

    pub fn character(&self) -> PlayerSkin {
        self.character
    }

    pub fn keys_collected(&self) -> u32 {
        self.keys_collected
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn outcome(&self) -> LevelOutcome {
        self.outcome
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }
}
