//! Core domain: screens, run state and the transitions between them.

mod resources;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use resources::{GameState, LevelOutcome, PlayerSkin, RunMode};
pub use state::{GameplaySet, LevelSetup, Screen};

use bevy::prelude::*;

use crate::core::systems::{
    despawn_player, handle_character_select_input, handle_exit_reached, handle_game_over_input,
    handle_level_complete_input, handle_pickups, handle_player_damaged, place_player,
    setup_camera,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<Screen>()
            .init_resource::<GameState>()
            .configure_sets(
                OnEnter(Screen::Playing),
                (LevelSetup::Load, LevelSetup::Populate).chain(),
            )
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Simulate,
                    GameplaySet::Respond,
                    GameplaySet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(Screen::CharacterSelect), despawn_player)
            .add_systems(
                OnEnter(Screen::Playing),
                place_player.in_set(LevelSetup::Populate),
            )
            .add_systems(
                Update,
                handle_character_select_input.run_if(in_state(Screen::CharacterSelect)),
            )
            .add_systems(
                Update,
                (handle_pickups, handle_player_damaged, handle_exit_reached)
                    .chain()
                    .in_set(GameplaySet::Respond)
                    .run_if(in_state(Screen::Playing)),
            )
            .add_systems(
                Update,
                handle_level_complete_input.run_if(in_state(Screen::LevelComplete)),
            )
            .add_systems(
                Update,
                handle_game_over_input.run_if(in_state(Screen::GameOver)),
            );
    }
}
