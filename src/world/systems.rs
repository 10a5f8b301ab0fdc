//! World domain: level load and unload systems.

use bevy::prelude::*;
use std::path::Path;

use crate::content::GameplayConfig;
use crate::core::{GameState, RunMode, Screen};
use crate::world::assets::{AssetProvider, DiskAssets};
use crate::world::generator::{generate_level, scatter_power_ups};
use crate::world::loader::{LoadedMaze, MazeLoadError, build_maze, campaign_level_path, load_level};

/// Bevy's default asset folder, where the disk provider looks for textures.
const ASSET_ROOT: &str = "assets";

/// Load or generate the level `game_state` points at.
pub fn prepare_level<P: AssetProvider + ?Sized>(
    config: &GameplayConfig,
    game_state: &GameState,
    provider: &mut P,
) -> Result<LoadedMaze, MazeLoadError> {
    let level = game_state.current_level();

    match game_state.mode() {
        RunMode::Campaign => {
            let path = campaign_level_path(Path::new(&config.levels.maps_folder), level);
            info!("[LEVEL] Loading campaign level {} from {}", level, path.display());
            load_level(&path, &config.hazards, provider)
        }
        RunMode::Endless { seed } => {
            let level_seed = seed.wrapping_add(level as u64);
            info!("[LEVEL] Generating endless level {} (seed {})", level, level_seed);
            let description = generate_level(level_seed, &config.levels);
            let mut loaded = build_maze(&description, &config.hazards, provider)?;
            scatter_power_ups(&mut loaded, level_seed, &config.power_ups, provider);
            Ok(loaded)
        }
    }
}

pub(crate) fn load_current_level(
    mut commands: Commands,
    config: Res<GameplayConfig>,
    game_state: Res<GameState>,
    asset_server: Res<AssetServer>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let mut provider = DiskAssets::new(&asset_server, ASSET_ROOT);

    match prepare_level(&config, &game_state, &mut provider) {
        Ok(loaded) => {
            commands.insert_resource(loaded);
        }
        Err(e) => {
            error!("[LEVEL] {}", e);
            next_screen.set(Screen::CharacterSelect);
        }
    }
}

pub(crate) fn unload_level(mut commands: Commands) {
    commands.remove_resource::<LoadedMaze>();
    info!("[LEVEL] Level unloaded");
}
