//! Core domain: run flow systems and screen transitions.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::content::GameplayConfig;
use crate::core::resources::{GameState, LevelOutcome, PlayerSkin, RunMode};
use crate::core::state::Screen;
use crate::entities::{DamageOutcome, Player};
use crate::simulation::{ExitReachedEvent, ItemPickedUpEvent, PickupKind, PlayerDamagedEvent};
use crate::world::LoadedMaze;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Skin on 1/2/3, mode on Tab, start on Enter.
pub(crate) fn handle_character_select_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let picked = if keyboard.any_just_pressed([KeyCode::Digit1, KeyCode::Numpad1]) {
        Some(PlayerSkin::Red)
    } else if keyboard.any_just_pressed([KeyCode::Digit2, KeyCode::Numpad2]) {
        Some(PlayerSkin::Green)
    } else if keyboard.any_just_pressed([KeyCode::Digit3, KeyCode::Numpad3]) {
        Some(PlayerSkin::Blue)
    } else {
        None
    };

    if let Some(skin) = picked {
        game_state.select_character(skin);
        info!("Character selected: {}", skin.name());
    }

    if keyboard.just_pressed(KeyCode::Tab) {
        let mode = match game_state.mode() {
            RunMode::Campaign => RunMode::Endless {
                seed: rand::rng().random(),
            },
            RunMode::Endless { .. } => RunMode::Campaign,
        };
        game_state.set_mode(mode);
        info!("Mode selected: {:?}", mode);
    }

    if keyboard.just_pressed(KeyCode::Enter) {
        game_state.reset_run();
        info!(
            "Starting {} run as {}",
            game_state.mode().label(),
            game_state.character().name()
        );
        next_screen.set(Screen::Playing);
    }
}

/// A fresh run starts from a fresh player.
pub(crate) fn despawn_player(mut commands: Commands, query: Query<Entity, With<Player>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Put the player on the entry of the freshly loaded level, spawning it on
/// the first level of a run.
pub(crate) fn place_player(
    mut commands: Commands,
    level: Option<Res<LoadedMaze>>,
    config: Res<GameplayConfig>,
    mut game_state: ResMut<GameState>,
    mut player_query: Query<&mut Player>,
) {
    let Some(level) = level else {
        return;
    };
    let entry = level.entry_position().as_vec2();
    let current = game_state.current_level();
    game_state.start_level(current);

    if let Some(mut player) = player_query.iter_mut().next() {
        player.enter_level(entry);
        game_state.sync_from_player(&player);
    } else {
        let player = Player::new(entry, config.player.clone());
        game_state.sync_from_player(&player);
        commands.spawn(player);
    }

    info!(
        "Level {} started with {} lives",
        game_state.current_level(),
        game_state.health()
    );
}

pub(crate) fn handle_pickups(
    mut events: MessageReader<ItemPickedUpEvent>,
    mut game_state: ResMut<GameState>,
    player_query: Query<&Player>,
) {
    for event in events.read() {
        match event.item {
            PickupKind::Key => game_state.collect_key(),
            PickupKind::Heart { restored: true } => {
                if let Some(player) = player_query.iter().next() {
                    game_state.sync_from_player(player);
                }
            }
            PickupKind::Heart { restored: false } | PickupKind::PowerUp(_) => {}
        }
    }
}

pub(crate) fn handle_player_damaged(
    mut events: MessageReader<PlayerDamagedEvent>,
    mut game_state: ResMut<GameState>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    for event in events.read() {
        if let DamageOutcome::LifeLost { .. } = event.outcome {
            game_state.take_damage(1);
        }
    }

    if game_state.outcome() == LevelOutcome::Lost {
        info!("Game over on level {}", game_state.current_level());
        next_screen.set(Screen::GameOver);
    }
}

/// Award the level bonus and move to the level-complete screen.
pub(crate) fn handle_exit_reached(
    mut events: MessageReader<ExitReachedEvent>,
    config: Res<GameplayConfig>,
    mut game_state: ResMut<GameState>,
    mut player_query: Query<&mut Player>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if events.read().count() == 0 || game_state.outcome() == LevelOutcome::Lost {
        return;
    }

    game_state.level_won();
    if let Some(mut player) = player_query.iter_mut().next() {
        player.add_score(config.scoring.score_per_level);
        player.add_experience(config.scoring.xp_per_level);
        info!(
            "Level {} complete! Score: {}, XP: {}",
            game_state.current_level(),
            player.score(),
            player.experience()
        );
    }
    next_screen.set(Screen::LevelComplete);
}

/// Enter continues to the next level, or back to selection once the
/// campaign has run out of levels.
pub(crate) fn handle_level_complete_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<GameplayConfig>,
    mut game_state: ResMut<GameState>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if !keyboard.just_pressed(KeyCode::Enter) {
        return;
    }

    let next = game_state.advance_level();
    if game_state.is_campaign_finished(config.levels.max_campaign_levels) {
        info!("Campaign complete after {} levels", next - 1);
        next_screen.set(Screen::CharacterSelect);
    } else {
        next_screen.set(Screen::Playing);
    }
}

pub(crate) fn handle_game_over_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    if keyboard.just_pressed(KeyCode::Enter) {
        next_screen.set(Screen::CharacterSelect);
    }
}
