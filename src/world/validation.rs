//! World domain: solvability check for loaded mazes.

use bevy::prelude::*;
use std::collections::HashSet;

use crate::world::loader::MazeLoadError;
use crate::world::maze::Maze;
use crate::world::{Direction, GridPosition};

/// Depth-first search from `entry` over non-wall, in-bounds cells.
///
/// Iterative with an explicit stack, so large mazes cannot overflow the
/// call stack.
pub fn validate_reachability(
    maze: &Maze,
    entry: GridPosition,
    exit: GridPosition,
) -> Result<(), MazeLoadError> {
    let mut visited: HashSet<GridPosition> = HashSet::new();
    let mut stack = vec![entry];

    while let Some(cell) = stack.pop() {
        if !visited.insert(cell) {
            continue;
        }

        if cell == exit {
            debug!("[LEVEL] Exit reachable after visiting {} cells", visited.len());
            return Ok(());
        }

        for direction in Direction::CARDINALS {
            let next = cell.offset(direction);
            if !visited.contains(&next) && !maze.is_blocked(next) {
                stack.push(next);
            }
        }
    }

    Err(MazeLoadError::ExitUnreachable { entry, exit })
}

/// Every cell reachable from `start`, for callers that need the whole region.
pub fn reachable_cells(maze: &Maze, start: GridPosition) -> HashSet<GridPosition> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        if maze.is_blocked(cell) || !visited.insert(cell) {
            continue;
        }
        for direction in Direction::CARDINALS {
            stack.push(cell.offset(direction));
        }
    }

    visited
}
