//! Core domain: tests for the run state projection and progression.

use bevy::prelude::*;

use super::{GameState, LevelOutcome, PlayerSkin, RunMode};
use crate::content::PlayerTuning;
use crate::entities::Player;

fn started() -> GameState {
    let mut state = GameState::default();
    let player = Player::new(Vec2::ZERO, PlayerTuning::default());
    state.start_level(1);
    state.sync_from_player(&player);
    state
}

// -----------------------------------------------------------------------------
// Damage and outcome
// -----------------------------------------------------------------------------

#[test]
fn test_sync_copies_lives_and_keys() {
    let mut player = Player::new(Vec2::ZERO, PlayerTuning::default());
    player.collect_key(100);
    let mut state = GameState::default();

    state.sync_from_player(&player);

    assert_eq!(state.health(), 3);
    assert_eq!(state.keys_collected(), 1);
}

#[test]
fn test_damage_to_zero_loses_the_level() {
    let mut state = started();

    state.take_damage(1);
    state.take_damage(1);
    assert_eq!(state.outcome(), LevelOutcome::InProgress);

    state.take_damage(1);
    assert_eq!(state.health(), 0);
    assert_eq!(state.outcome(), LevelOutcome::Lost);
}

#[test]
fn test_overkill_also_loses() {
    let mut state = started();

    state.take_damage(10);

    assert!(state.health() < 0);
    assert_eq!(state.outcome(), LevelOutcome::Lost);
}

#[test]
fn test_level_won_sets_completed() {
    let mut state = started();
    state.collect_key();

    state.level_won();

    assert!(state.is_level_completed());
    assert_eq!(state.outcome(), LevelOutcome::Won);
    assert_eq!(state.keys_collected(), 1);
}

#[test]
fn test_lost_level_stays_lost() {
    let mut state = started();
    state.take_damage(3);

    state.level_won();

    assert_eq!(state.outcome(), LevelOutcome::Lost);
}

// -----------------------------------------------------------------------------
// Progression
// -----------------------------------------------------------------------------

#[test]
fn test_advance_level_resets_per_level_flags() {
    let mut state = started();
    state.collect_key();
    state.level_won();

    let next = state.advance_level();

    assert_eq!(next, 2);
    assert_eq!(state.current_level(), 2);
    assert!(!state.is_level_completed());
    assert_eq!(state.keys_collected(), 0);
    assert_eq!(state.outcome(), LevelOutcome::InProgress);
}

#[test]
fn test_campaign_finishes_after_the_last_level() {
    let mut state = started();
    for _ in 0..4 {
        state.advance_level();
    }
    assert!(!state.is_campaign_finished(5));

    state.advance_level();
    assert!(state.is_campaign_finished(5));
}

#[test]
fn test_endless_runs_never_finish() {
    let mut state = started();
    state.set_mode(RunMode::Endless { seed: 42 });
    for _ in 0..20 {
        state.advance_level();
    }

    assert!(!state.is_campaign_finished(5));
}

#[test]
fn test_reset_run_keeps_skin_and_mode() {
    let mut state = started();
    state.select_character(PlayerSkin::Blue);
    state.set_mode(RunMode::Endless { seed: 9 });
    state.advance_level();

    state.reset_run();

    assert_eq!(state.current_level(), 1);
    assert_eq!(state.character(), PlayerSkin::Blue);
    assert_eq!(state.mode(), RunMode::Endless { seed: 9 });
}

#[test]
fn test_player_progress_survives_level_changes() {
    let mut player = Player::new(Vec2::ZERO, PlayerTuning::default());
    player.take_damage();
    player.add_score(500);

    player.enter_level(Vec2::new(1.0, 1.0));
    let mut state = GameState::default();
    state.advance_level();
    state.sync_from_player(&player);

    assert_eq!(state.health(), 2);
    assert_eq!(player.score(), 500);
}
