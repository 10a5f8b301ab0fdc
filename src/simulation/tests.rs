//! Simulation domain: tests for movement collision and tick interactions.

use bevy::prelude::*;

use super::{DamageSource, Interaction, PlayerIntent, step};
use crate::content::{HazardTuning, PlayerTuning, ScoringConfig};
use crate::entities::{DamageOutcome, GameObject, ObjectKind, Player, PowerUp, PowerUpKind};
use crate::world::{
    Appearance, Direction, GridPosition, LevelDescription, LoadedMaze, NoAssets, build_maze,
};

fn level(text: &str) -> LoadedMaze {
    let description = LevelDescription::parse_properties(text, "test.properties").unwrap();
    build_maze(&description, &HazardTuning::default(), &mut NoAssets).unwrap()
}

fn player_at(x: i32, y: i32) -> Player {
    Player::new(GridPosition::new(x, y).as_vec2(), PlayerTuning::default())
}

fn idle() -> PlayerIntent {
    PlayerIntent::default()
}

fn tick(
    level: &mut LoadedMaze,
    player: &mut Player,
    intent: PlayerIntent,
    dt: f32,
) -> Vec<Interaction> {
    step(level, player, &intent, dt, &ScoringConfig::default())
}

fn damage_sources(interactions: &[Interaction]) -> Vec<DamageSource> {
    interactions
        .iter()
        .filter_map(|i| match i {
            Interaction::Damaged { source, .. } => Some(*source),
            _ => None,
        })
        .collect()
}

// -----------------------------------------------------------------------------
// Movement
// -----------------------------------------------------------------------------

#[test]
fn test_player_moves_through_open_cells() {
    let mut maze = level("0,0=1\n3,0=2\n");
    let mut player = player_at(0, 0);

    tick(&mut maze, &mut player, PlayerIntent::new(Direction::Right, false), 0.1);

    assert!((player.position().x - 0.3).abs() < 1e-5);
}

#[test]
fn test_walls_stop_the_player() {
    let mut maze = level("0,0=1\n1,0=0\n0,1=2\n");
    let mut player = player_at(0, 0);

    tick(&mut maze, &mut player, PlayerIntent::new(Direction::Right, false), 0.2);

    assert_eq!(GridPosition::from_tile(player.position()), GridPosition::new(0, 0));
    assert!(player.position().x < 0.5);
}

#[test]
fn test_grid_edges_stop_the_player() {
    let mut maze = level("0,0=1\n1,0=2\n");
    let mut player = player_at(0, 0);

    tick(&mut maze, &mut player, PlayerIntent::new(Direction::Left, false), 0.2);
    tick(&mut maze, &mut player, PlayerIntent::new(Direction::Down, false), 0.2);

    assert_eq!(GridPosition::from_tile(player.position()), GridPosition::new(0, 0));
}

#[test]
fn test_long_running_frame_does_not_jump_a_wall() {
    let mut maze = level("0,0=1
1,0=0
2,0=2
0,1=5
1,1=5
2,1=5
");
    let mut player = player_at(0, 0);
    player.set_position(Vec2::new(0.4, 0.0));

    let intent = PlayerIntent::new(Direction::Right, true);
    let interactions = tick(&mut maze, &mut player, intent, 0.25);

    assert_eq!(GridPosition::from_tile(player.position()), GridPosition::new(0, 0));
    assert!(!interactions.contains(&Interaction::ExitReached));
    assert!(!interactions.contains(&Interaction::ExitLocked));
}

#[test]
fn test_boosted_running_frame_stops_before_a_wall() {
    let mut maze = level("0,0=1
3,0=0
4,0=2
0,1=5
");
    let mut player = player_at(0, 0);
    player.activate_speed_boost(5.0);

    let intent = PlayerIntent::new(Direction::Right, true);
    tick(&mut maze, &mut player, intent, 0.25);
    tick(&mut maze, &mut player, intent, 0.25);

    assert_eq!(GridPosition::from_tile(player.position()), GridPosition::new(2, 0));
}

#[test]
fn test_long_frame_in_open_cells_covers_the_full_distance() {
    let mut maze = level("0,0=1
4,0=2
");
    let mut player = player_at(0, 0);

    let intent = PlayerIntent::new(Direction::Right, true);
    tick(&mut maze, &mut player, intent, 0.25);

    assert!((player.position().x - 1.35).abs() < 1e-4);
}

#[test]
fn test_ghost_mode_does_not_pass_walls() {
    let mut maze = level("0,0=1\n1,0=0\n0,1=2\n");
    let mut player = player_at(0, 0);
    player.activate_ghost_mode(4.0);

    tick(&mut maze, &mut player, PlayerIntent::new(Direction::Right, false), 0.2);

    assert_eq!(GridPosition::from_tile(player.position()), GridPosition::new(0, 0));
    assert!(player.position().x < 0.5);
}

#[test]
fn test_dead_player_is_not_stepped() {
    let mut maze = level("0,0=1\n3,0=2\n");
    let mut player = player_at(0, 0);
    player.set_lives(0);

    let intent = PlayerIntent::new(Direction::Right, true);
    let interactions = tick(&mut maze, &mut player, intent, 0.5);

    assert!(interactions.is_empty());
    assert_eq!(player.position(), Vec2::ZERO);
}

// -----------------------------------------------------------------------------
// Pickups and exit
// -----------------------------------------------------------------------------

#[test]
fn test_key_is_collected_once() {
    let mut maze = level("0,0=1\n1,0=5\n2,0=2\n");
    let mut player = player_at(1, 0);

    let first = tick(&mut maze, &mut player, idle(), 0.016);
    let second = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(first, vec![Interaction::KeyCollected]);
    assert!(second.is_empty());
    assert!(player.has_key());
    assert_eq!(player.score(), 100);
    assert!(!maze.maze().get(1, 0).unwrap().is_active());
}

#[test]
fn test_exit_needs_a_key_when_the_level_has_one() {
    let mut maze = level("0,0=1\n1,0=5\n2,0=2\n");
    let mut player = player_at(2, 0);

    let locked = tick(&mut maze, &mut player, idle(), 0.016);
    assert_eq!(locked, vec![Interaction::ExitLocked]);

    player.set_position(Vec2::new(1.0, 0.0));
    tick(&mut maze, &mut player, idle(), 0.016);
    player.set_position(Vec2::new(2.0, 0.0));
    let open = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(open, vec![Interaction::ExitReached]);
    assert!(!player.has_key());
}

#[test]
fn test_exit_is_open_in_keyless_levels() {
    let mut maze = level("0,0=1\n1,0=2\n");
    let mut player = player_at(0, 0);

    let mut reached = false;
    for _ in 0..30 {
        let intent = PlayerIntent::new(Direction::Right, false);
        let interactions = tick(&mut maze, &mut player, intent, 0.05);
        if interactions.contains(&Interaction::ExitReached) {
            reached = true;
            break;
        }
    }

    assert!(reached);
}

#[test]
fn test_heart_restores_a_life() {
    let mut maze = level("0,0=1\n1,0=6\n2,0=2\n");
    let mut player = player_at(1, 0);
    player.take_damage();

    let interactions = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(interactions, vec![Interaction::HeartCollected { restored: true }]);
    assert_eq!(player.lives(), 3);
}

#[test]
fn test_power_up_pickup_applies_and_is_consumed() {
    let mut maze = level("0,0=1\n2,0=2\n");
    let cell = GridPosition::new(1, 0);
    let shield = ObjectKind::PowerUp(PowerUp::new(PowerUpKind::Shield, 3.0));
    maze.maze_mut()
        .set(1, 0, GameObject::new(cell, shield, Appearance::Placeholder));
    let mut player = player_at(1, 0);

    let first = tick(&mut maze, &mut player, idle(), 0.016);
    let second = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(first, vec![Interaction::PowerUpCollected(PowerUpKind::Shield)]);
    assert!(second.is_empty());
    assert!(player.has_shield());
}

// -----------------------------------------------------------------------------
// Hazards
// -----------------------------------------------------------------------------

#[test]
fn test_trap_hurts_once_per_invulnerability_window() {
    let mut maze = level("0,0=1\n1,0=3\n2,0=2\n");
    let mut player = player_at(1, 0);

    let first = tick(&mut maze, &mut player, idle(), 0.016);
    let second = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(
        first,
        vec![Interaction::Damaged {
            source: DamageSource::Trap,
            outcome: DamageOutcome::LifeLost { lives_remaining: 2 },
        }]
    );
    assert!(second.is_empty());
    assert_eq!(player.lives(), 2);
}

#[test]
fn test_shield_absorbs_a_trap() {
    let mut maze = level("0,0=1\n1,0=3\n2,0=2\n");
    let mut player = player_at(1, 0);
    player.activate_shield(3.0);

    let interactions = tick(&mut maze, &mut player, idle(), 0.016);

    assert_eq!(
        interactions,
        vec![Interaction::Damaged {
            source: DamageSource::Trap,
            outcome: DamageOutcome::Absorbed,
        }]
    );
    assert_eq!(player.lives(), 3);
    assert!(!player.has_shield());
}

#[test]
fn test_firing_laser_hits_its_row() {
    // (2,0) has even parity, so the laser fires along row 0.
    let mut maze = level("0,0=1\n2,0=7\n2,1=2\n");
    let mut player = player_at(0, 0);

    let quiet = tick(&mut maze, &mut player, idle(), 1.0);
    assert!(damage_sources(&quiet).is_empty());

    let firing = tick(&mut maze, &mut player, idle(), 1.0);
    assert_eq!(damage_sources(&firing), vec![DamageSource::Laser]);
}

#[test]
fn test_vertical_laser_misses_other_columns() {
    let mut maze = level("0,0=1\n1,0=7\n2,0=2\n");
    let mut player = player_at(0, 0);

    let interactions = tick(&mut maze, &mut player, idle(), 2.0);

    assert!(damage_sources(&interactions).is_empty());
    assert_eq!(player.lives(), 3);
}

#[test]
fn test_enemy_on_the_player_cell_hurts() {
    let mut maze = level("0,0=1\n1,0=4\n3,0=2\n");
    let mut player = player_at(1, 0);

    let interactions = tick(&mut maze, &mut player, idle(), 0.01);

    assert_eq!(damage_sources(&interactions), vec![DamageSource::Enemy]);
}

#[test]
fn test_enemy_stepping_onto_the_player_hurts_the_same_tick() {
    let mut maze = level("0,0=1\n2,0=4\n3,0=2\n");
    let mut player = player_at(1, 0);

    let interactions = tick(&mut maze, &mut player, idle(), 0.4);

    assert_eq!(damage_sources(&interactions), vec![DamageSource::Enemy]);
}

#[test]
fn test_ghost_mode_passes_enemies() {
    let mut maze = level("0,0=1\n1,0=4\n3,0=2\n");
    let mut player = player_at(1, 0);
    player.activate_ghost_mode(4.0);

    let interactions = tick(&mut maze, &mut player, idle(), 0.01);

    assert!(damage_sources(&interactions).is_empty());
    assert_eq!(player.lives(), 3);
}
