//! Content domain: gameplay configuration loaded from RON at startup.

mod data;
mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use data::{
    GameplayConfig, HazardTuning, LevelConfig, PlayerTuning, PowerUpDurations, ScoringConfig,
};
pub use loader::{load_gameplay_config, load_gameplay_config_or_default, parse_gameplay_config};
pub use validation::validate_config;

use bevy::prelude::*;
use std::path::Path;

pub const GAMEPLAY_CONFIG_PATH: &str = "assets/config/gameplay.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = load_gameplay_config_or_default(Path::new(GAMEPLAY_CONFIG_PATH));
        app.register_type::<GameplayConfig>()
            .insert_resource(config);
    }
}
