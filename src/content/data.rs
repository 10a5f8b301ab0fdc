//! Data definitions for the gameplay configuration file.
//!
//! These structs mirror the structure of `assets/config/gameplay.ron`. Every
//! section has a `Default` carrying the stock tuning, and `#[serde(default)]`
//! lets a config file override only the values it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect, Resource)]
#[serde(default)]
pub struct GameplayConfig {
    pub schema_version: u32,
    pub player: PlayerTuning,
    pub hazards: HazardTuning,
    pub power_ups: PowerUpDurations,
    pub scoring: ScoringConfig,
    pub levels: LevelConfig,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            schema_version: CONFIG_SCHEMA_VERSION,
            player: PlayerTuning::default(),
            hazards: HazardTuning::default(),
            power_ups: PowerUpDurations::default(),
            scoring: ScoringConfig::default(),
            levels: LevelConfig::default(),
        }
    }
}

// ============================================================================
// Player
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PlayerTuning {
    pub starting_lives: u32,
    pub max_lives: u32,
    /// Base walking speed in tiles per second.
    pub movement_speed: f32,
    pub run_multiplier: f32,
    pub speed_boost_multiplier: f32,
    pub max_stamina: f32,
    /// Stamina regained per second while not running.
    pub stamina_regen: f32,
    /// Stamina spent per second while running.
    pub stamina_drain: f32,
    pub damage_flash_duration: f32,
    pub invulnerability_duration: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            starting_lives: 3,
            max_lives: 5,
            movement_speed: 3.0,
            run_multiplier: 1.8,
            speed_boost_multiplier: 1.5,
            max_stamina: 100.0,
            stamina_regen: 10.0,
            stamina_drain: 20.0,
            damage_flash_duration: 0.25,
            invulnerability_duration: 1.0,
        }
    }
}

// ============================================================================
// Hazards and enemies
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct HazardTuning {
    /// Seconds between two grid steps of a patrolling enemy.
    pub patrol_step_interval: f32,
    /// Dormant time of a laser grid between two bursts.
    pub laser_cooldown: f32,
    /// Length of one laser burst.
    pub laser_fire_duration: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            patrol_step_interval: 0.4,
            laser_cooldown: 2.0,
            laser_fire_duration: 0.4,
        }
    }
}

// ============================================================================
// Power-ups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct PowerUpDurations {
    pub shield: f32,
    pub speed_boost: f32,
    pub ghost_mode: f32,
}

impl Default for PowerUpDurations {
    fn default() -> Self {
        Self {
            shield: 3.0,
            speed_boost: 5.0,
            ghost_mode: 4.0,
        }
    }
}

// ============================================================================
// Scoring
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct ScoringConfig {
    pub score_per_key: u32,
    pub score_per_level: u32,
    pub xp_per_level: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            score_per_key: 100,
            score_per_level: 500,
            xp_per_level: 100,
        }
    }
}

// ============================================================================
// Levels
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Reflect)]
#[serde(default)]
pub struct LevelConfig {
    /// Folder holding `level<n>.properties` / `level<n>.json` campaign maps.
    pub maps_folder: String,
    pub max_campaign_levels: u32,
    pub min_endless_grid_size: i32,
    pub max_endless_grid_size: i32,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            maps_folder: "assets/maps".to_string(),
            max_campaign_levels: 5,
            min_endless_grid_size: 5,
            max_endless_grid_size: 10,
        }
    }
}
