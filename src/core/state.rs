//! Core domain: screen states and system ordering.

use bevy::prelude::*;

/// Which screen the game is on. The simulation only runs while `Playing`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum Screen {
    #[default]
    CharacterSelect,
    Playing,
    LevelComplete,
    GameOver,
}

/// Ordering for the systems that run when a level starts.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum LevelSetup {
    /// Read or generate the maze and insert it as a resource.
    Load,
    /// Place the player and anything that depends on the loaded maze.
    Populate,
}

/// Per-frame ordering while playing.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum GameplaySet {
    Input,
    Simulate,
    /// Systems reacting to what the simulation produced.
    Respond,
    Present,
}
