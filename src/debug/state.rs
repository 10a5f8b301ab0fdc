//! Debug domain: toggles for dev tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the player status overlay is visible
    pub show_info: bool,
    /// Whether the player keeps a shield up at all times
    pub invincible: bool,
}
