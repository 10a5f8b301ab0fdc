//! World domain: turning a level description into a validated maze.

use bevy::prelude::*;
use std::path::{Path, PathBuf};

use crate::content::HazardTuning;
use crate::entities::{Enemy, FireDirection, GameObject, LaserGrid, ObjectKind};
use crate::world::assets::{AssetProvider, TileTextures};
use crate::world::level::{
    CODE_ENEMY, CODE_ENTRY, CODE_EXIT, CODE_HEART, CODE_KEY, CODE_LASER, CODE_TRAP, CODE_WALL,
    LevelDescription, MAX_LEVEL_SIDE,
};
use crate::world::maze::Maze;
use crate::world::validation::validate_reachability;
use crate::world::GridPosition;

/// Why a level could not be loaded. No partial maze is ever returned.
#[derive(Debug)]
pub enum MazeLoadError {
    NotFound {
        path: PathBuf,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Malformed {
        file: String,
        message: String,
    },
    TooLarge {
        width: i32,
        height: i32,
    },
    MissingEntry,
    MissingExit,
    DuplicateEntry {
        first: GridPosition,
        second: GridPosition,
    },
    DuplicateExit {
        first: GridPosition,
        second: GridPosition,
    },
    ExitUnreachable {
        entry: GridPosition,
        exit: GridPosition,
    },
}

impl std::fmt::Display for MazeLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeLoadError::NotFound { path } => {
                write!(f, "Map file not found: {}", path.display())
            }
            MazeLoadError::Io { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            MazeLoadError::Malformed { file, message } => {
                write!(f, "Malformed level {}: {}", file, message)
            }
            MazeLoadError::TooLarge { width, height } => write!(
                f,
                "Level is {}x{}, sides are limited to {} cells",
                width, height, MAX_LEVEL_SIDE
            ),
            MazeLoadError::MissingEntry => write!(f, "Level has no entry"),
            MazeLoadError::MissingExit => write!(f, "Level has no exit"),
            MazeLoadError::DuplicateEntry { first, second } => {
                write!(f, "Level has two entries, at {} and {}", first, second)
            }
            MazeLoadError::DuplicateExit { first, second } => {
                write!(f, "Level has two exits, at {} and {}", first, second)
            }
            MazeLoadError::ExitUnreachable { entry, exit } => {
                write!(f, "Exit {} unreachable from entry {}", exit, entry)
            }
        }
    }
}

impl std::error::Error for MazeLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MazeLoadError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A validated maze plus the cells of its entry and exit.
#[derive(Resource, Debug, Clone)]
pub struct LoadedMaze {
    maze: Maze,
    entry: GridPosition,
    exit: GridPosition,
}

impl LoadedMaze {
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Mutable grid access for ticking and consuming occupants. The entry
    /// and exit cells are not to be replaced.
    pub fn maze_mut(&mut self) -> &mut Maze {
        &mut self.maze
    }

    pub fn entry_position(&self) -> GridPosition {
        self.entry
    }

    pub fn exit_position(&self) -> GridPosition {
        self.exit
    }

    /// The entry occupant. Present for the lifetime of the level.
    pub fn entry(&self) -> Option<&GameObject> {
        self.maze.get_at(self.entry)
    }

    pub fn exit(&self) -> Option<&GameObject> {
        self.maze.get_at(self.exit)
    }
}

/// Populate and validate a maze from `description`.
///
/// Unknown type codes are skipped. Textures are resolved once through
/// `provider`; the per-load texture set is released when this returns,
/// whether or not the level was valid.
pub fn build_maze<P: AssetProvider + ?Sized>(
    description: &LevelDescription,
    hazards: &HazardTuning,
    provider: &mut P,
) -> Result<LoadedMaze, MazeLoadError> {
    let (width, height) = description.dimensions();
    if width > MAX_LEVEL_SIDE || height > MAX_LEVEL_SIDE {
        return Err(MazeLoadError::TooLarge { width, height });
    }
    let mut maze = Maze::new(width, height);
    let textures = TileTextures::acquire(provider);

    let mut entry: Option<GridPosition> = None;
    let mut exit: Option<GridPosition> = None;

    for (cell, code) in description.iter() {
        let (kind, appearance) = match code {
            CODE_WALL => (ObjectKind::Wall, &textures.wall),
            CODE_ENTRY => {
                if let Some(first) = entry {
                    return Err(MazeLoadError::DuplicateEntry {
                        first,
                        second: cell,
                    });
                }
                entry = Some(cell);
                (ObjectKind::Entry, &textures.entry)
            }
            CODE_EXIT => {
                if let Some(first) = exit {
                    return Err(MazeLoadError::DuplicateExit {
                        first,
                        second: cell,
                    });
                }
                exit = Some(cell);
                (ObjectKind::Exit, &textures.exit)
            }
            CODE_TRAP => (ObjectKind::Trap, &textures.trap),
            CODE_ENEMY => (
                ObjectKind::Enemy(Enemy::patrol(hazards.patrol_step_interval)),
                &textures.patrol_enemy,
            ),
            CODE_KEY => (ObjectKind::Key, &textures.key),
            CODE_HEART => (ObjectKind::HeartPickup, &textures.heart),
            CODE_LASER => (
                ObjectKind::LaserGrid(LaserGrid::with_timing(
                    FireDirection::for_cell(cell),
                    hazards.laser_cooldown,
                    hazards.laser_fire_duration,
                )),
                &textures.laser,
            ),
            unknown => {
                debug!("[LEVEL] Skipping unknown type code {} at {}", unknown, cell);
                continue;
            }
        };
        maze.set(cell.x, cell.y, GameObject::new(cell, kind, appearance.clone()));
    }

    let entry = entry.ok_or(MazeLoadError::MissingEntry)?;
    let exit = exit.ok_or(MazeLoadError::MissingExit)?;
    validate_reachability(&maze, entry, exit)?;

    info!(
        "[LEVEL] Loaded {}x{} maze, entry {} exit {}",
        width, height, entry, exit
    );
    Ok(LoadedMaze { maze, entry, exit })
}

/// Read a level file and build it.
pub fn load_level<P: AssetProvider + ?Sized>(
    path: &Path,
    hazards: &HazardTuning,
    provider: &mut P,
) -> Result<LoadedMaze, MazeLoadError> {
    let description = LevelDescription::from_path(path)?;
    build_maze(&description, hazards, provider)
}

/// Campaign file for a level: `level<n>.properties`, falling back to
/// `level<n>.json` when only that exists.
pub fn campaign_level_path(maps_folder: &Path, level: u32) -> PathBuf {
    let properties = maps_folder.join(format!("level{}.properties", level));
    if properties.exists() {
        return properties;
    }
    let json = maps_folder.join(format!("level{}.json", level));
    if json.exists() { json } else { properties }
}
