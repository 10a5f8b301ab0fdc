//! View domain: sprites, HUD and screen panels over the simulation state.
//!
//! Nothing here feeds back into the game; it only reads the loaded maze,
//! the player and the run state.

mod hud;
mod sprites;

use bevy::prelude::*;

use crate::core::{GameplaySet, LevelSetup, Screen};
use crate::view::hud::{
    despawn_hud, despawn_overlays, spawn_character_select_overlay, spawn_game_over_overlay,
    spawn_hud, spawn_level_complete_overlay, update_character_select_overlay, update_hud,
};
use crate::view::sprites::{
    attach_player_sprite, camera_follow_player, despawn_level_sprites, spawn_level_sprites,
    sync_level_sprites, sync_player_sprite,
};

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(Screen::Playing),
            (spawn_level_sprites, spawn_hud).in_set(LevelSetup::Populate),
        )
        .add_systems(
            OnExit(Screen::Playing),
            (despawn_level_sprites, despawn_hud),
        )
        .add_systems(Update, attach_player_sprite)
        .add_systems(
            Update,
            (
                sync_level_sprites,
                sync_player_sprite,
                camera_follow_player,
                update_hud,
            )
                .in_set(GameplaySet::Present)
                .run_if(in_state(Screen::Playing)),
        )
        .add_systems(
            OnEnter(Screen::CharacterSelect),
            spawn_character_select_overlay,
        )
        .add_systems(
            Update,
            update_character_select_overlay.run_if(in_state(Screen::CharacterSelect)),
        )
        .add_systems(OnExit(Screen::CharacterSelect), despawn_overlays)
        .add_systems(OnEnter(Screen::LevelComplete), spawn_level_complete_overlay)
        .add_systems(OnExit(Screen::LevelComplete), despawn_overlays)
        .add_systems(OnEnter(Screen::GameOver), spawn_game_over_overlay)
        .add_systems(OnExit(Screen::GameOver), despawn_overlays);
    }
}
