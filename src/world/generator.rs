//! World domain: seeded level generation for endless mode.

use bevy::prelude::*;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

use crate::content::{LevelConfig, PowerUpDurations};
use crate::entities::{GameObject, ObjectKind, PowerUp, PowerUpKind};
use crate::world::assets::{AssetProvider, power_up_texture, resolve_texture};
use crate::world::level::{
    CODE_ENEMY, CODE_ENTRY, CODE_EXIT, CODE_HEART, CODE_KEY, CODE_LASER, CODE_TRAP, CODE_WALL,
    LevelDescription,
};
use crate::world::loader::LoadedMaze;
use crate::world::validation::reachable_cells;
use crate::world::GridPosition;

const WALL_DENSITY: f64 = 0.35;
const CELLS_PER_TRAP: i32 = 20;
const CELLS_PER_ENEMY: i32 = 30;
const MIN_AREA_FOR_LASER: i32 = 49;

/// Random corridor from the bottom-left to the top-right corner, stepping
/// only right or up, so it always connects the two.
fn carve_corridor(rng: &mut ChaCha8Rng, width: i32, height: i32) -> Vec<GridPosition> {
    let mut cell = GridPosition::new(0, 0);
    let mut path = vec![cell];

    while cell.x < width - 1 || cell.y < height - 1 {
        let go_right = if cell.x == width - 1 {
            false
        } else if cell.y == height - 1 {
            true
        } else {
            rng.random_bool(0.5)
        };
        cell = if go_right {
            GridPosition::new(cell.x + 1, cell.y)
        } else {
            GridPosition::new(cell.x, cell.y + 1)
        };
        path.push(cell);
    }

    path
}

/// Build a solvable level from `seed`. The same seed and config always give
/// the same description.
pub fn generate_level(seed: u64, config: &LevelConfig) -> LevelDescription {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let min = config.min_endless_grid_size.max(2);
    let max = config.max_endless_grid_size.max(min);
    let width = rng.random_range(min..=max);
    let height = rng.random_range(min..=max);
    let area = width * height;

    let corridor = carve_corridor(&mut rng, width, height);
    let on_corridor: HashSet<GridPosition> = corridor.iter().copied().collect();

    let mut description = LevelDescription::new();
    let mut open_cells = Vec::new();

    for x in 0..width {
        for y in 0..height {
            let cell = GridPosition::new(x, y);
            if on_corridor.contains(&cell) {
                continue;
            }
            if rng.random_bool(WALL_DENSITY) {
                description.insert(cell, CODE_WALL);
            } else {
                open_cells.push(cell);
            }
        }
    }

    let entry = GridPosition::new(0, 0);
    let exit = GridPosition::new(width - 1, height - 1);
    description.insert(entry, CODE_ENTRY);
    description.insert(exit, CODE_EXIT);

    // The key sits on the corridor so the exit can always be unlocked.
    let inner = &corridor[1..corridor.len() - 1];
    if let Some(key_cell) = inner.choose(&mut rng) {
        description.insert(*key_cell, CODE_KEY);
    }

    open_cells.shuffle(&mut rng);
    let mut placements = vec![CODE_HEART];
    placements.extend(std::iter::repeat_n(CODE_TRAP, (area / CELLS_PER_TRAP) as usize));
    placements.extend(std::iter::repeat_n(
        CODE_ENEMY,
        (area / CELLS_PER_ENEMY).max(1) as usize,
    ));
    if area >= MIN_AREA_FOR_LASER {
        placements.push(CODE_LASER);
    }

    for (cell, code) in open_cells.into_iter().zip(placements) {
        description.insert(cell, code);
    }

    debug!(
        "[LEVEL] Generated {}x{} level from seed {} ({} cells)",
        width,
        height,
        seed,
        description.len()
    );
    description
}

/// Drop one of each power-up on empty cells reachable from the entry.
/// Returns where they went; fewer than three if the maze is too full.
pub fn scatter_power_ups<P: AssetProvider + ?Sized>(
    level: &mut LoadedMaze,
    seed: u64,
    durations: &PowerUpDurations,
    provider: &mut P,
) -> Vec<GridPosition> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let reachable = reachable_cells(level.maze(), level.entry_position());
    let mut candidates: Vec<GridPosition> = level
        .maze()
        .empty_cells()
        .into_iter()
        .filter(|cell| reachable.contains(cell))
        .collect();
    candidates.shuffle(&mut rng);

    let mut placed = Vec::new();
    for (cell, kind) in candidates.into_iter().zip(PowerUpKind::ALL) {
        let power_up = PowerUp::configured(kind, durations);
        let appearance = resolve_texture(provider, power_up_texture(kind));
        level.maze_mut().set(
            cell.x,
            cell.y,
            GameObject::new(cell, ObjectKind::PowerUp(power_up), appearance),
        );
        placed.push(cell);
    }

    placed
}
