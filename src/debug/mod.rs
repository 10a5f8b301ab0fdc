//! Debug domain: dev-only hotkeys and level dumps.
//!
//! Features:
//! - ASCII dump of every loaded maze
//! - Player status overlay (F1)
//! - Invincibility, full heal and level skip (Ctrl+I / Ctrl+H / Ctrl+N)
//! - Properties dump of the current endless level (Ctrl+P)

mod state;
mod systems;
mod ui;

use bevy::prelude::*;

use crate::core::{GameplaySet, LevelSetup, Screen};
use crate::debug::state::DebugState;
use crate::debug::systems::{
    apply_invincibility, handle_debug_hotkeys, log_level_layout, update_debug_info_overlay,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                OnEnter(Screen::Playing),
                log_level_layout.after(LevelSetup::Load),
            )
            .add_systems(
                Update,
                (handle_debug_hotkeys, apply_invincibility)
                    .chain()
                    .before(GameplaySet::Simulate),
            )
            .add_systems(Update, update_debug_info_overlay);
    }
}
