//! Debug domain: hotkeys, level dumps and the status overlay.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameplayConfig;
use crate::core::{GameState, RunMode, Screen};
use crate::debug::state::DebugState;
use crate::debug::ui::{DebugInfoOverlay, spawn_debug_info_overlay};
use crate::entities::Player;
use crate::simulation::ExitReachedEvent;
use crate::world::{GridPosition, LoadedMaze, generate_level};

/// Log the freshly loaded maze as ASCII, top row first.
pub(crate) fn log_level_layout(level: Option<Res<LoadedMaze>>) {
    let Some(level) = level else {
        return;
    };
    info!(
        "[DEBUG] Level layout ({}x{}):\n{}",
        level.maze().width(),
        level.maze().height(),
        level.maze().render_ascii()
    );
}

/// F1 toggles the status overlay. Ctrl+I toggles invincibility, Ctrl+H
/// heals fully, Ctrl+N finishes the level, Ctrl+P dumps an endless level as
/// properties text.
pub(crate) fn handle_debug_hotkeys(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    config: Res<GameplayConfig>,
    game_state: Res<GameState>,
    screen: Res<State<Screen>>,
    mut player_query: Query<&mut Player>,
    mut exit_events: MessageWriter<ExitReachedEvent>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
        if debug_state.show_info {
            spawn_debug_info_overlay(&mut commands);
        }
        info!("[DEBUG] Info overlay: {}", debug_state.show_info);
    }

    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyI) {
        debug_state.invincible = !debug_state.invincible;
        info!("[DEBUG] Invincibility: {}", debug_state.invincible);
    }

    if keyboard.just_pressed(KeyCode::KeyH) {
        for mut player in &mut player_query {
            let max = player.max_lives();
            player.set_lives(max);
        }
        info!("[DEBUG] Full heal");
    }

    if keyboard.just_pressed(KeyCode::KeyN) && *screen.get() == Screen::Playing {
        exit_events.write(ExitReachedEvent);
        info!("[DEBUG] Skipping level {}", game_state.current_level());
    }

    if keyboard.just_pressed(KeyCode::KeyP) {
        match game_state.mode() {
            RunMode::Endless { seed } => {
                let level_seed = seed.wrapping_add(game_state.current_level() as u64);
                let description = generate_level(level_seed, &config.levels);
                info!(
                    "[DEBUG] Level {} (seed {}):\n{}",
                    game_state.current_level(),
                    level_seed,
                    description.to_properties()
                );
            }
            RunMode::Campaign => {
                info!("[DEBUG] Campaign levels are already on disk");
            }
        }
    }
}

/// Keep a shield up while invincible.
pub(crate) fn apply_invincibility(
    debug_state: Res<DebugState>,
    mut player_query: Query<&mut Player>,
) {
    if !debug_state.invincible {
        return;
    }

    for mut player in &mut player_query {
        if !player.has_shield() {
            player.activate_shield(1.0);
        }
    }
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    debug_state: Res<DebugState>,
    game_state: Res<GameState>,
    player_query: Query<&Player>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if let (Some(player), Ok(mut text)) =
        (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = player.position();
        **text = format!(
            "Pos: ({:.2}, {:.2}) cell {}\nLives: {}/{}\nStamina: {:.0}\n\
             Invulnerable: {:.2}s\nLevel: {} ({})\nInvincible: {}",
            pos.x,
            pos.y,
            GridPosition::from_tile(pos),
            player.lives(),
            player.max_lives(),
            player.stamina(),
            player.invulnerability_timer(),
            game_state.current_level(),
            game_state.mode().label(),
            debug_state.invincible
        );
    }
}
