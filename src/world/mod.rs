//! World domain: the maze grid, level formats, loading and validation.

mod assets;
mod generator;
mod level;
mod loader;
mod maze;
mod position;
mod systems;
mod validation;


pub use assets::{Appearance, NoAssets};
pub use generator::{generate_level, scatter_power_ups};
pub use level::LevelDescription;
pub use loader::{LoadedMaze, MazeLoadError, build_maze, campaign_level_path, load_level};
pub use maze::Maze;
pub use position::{Direction, GridPosition};
pub use systems::prepare_level;
pub use validation::reachable_cells;

use bevy::prelude::*;

use crate::core::{LevelSetup, Screen};
use crate::world::systems::{load_current_level, unload_level};

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(Screen::Playing),
            load_current_level.in_set(LevelSetup::Load),
        )
        .add_systems(OnExit(Screen::Playing), unload_level);
    }
}
