//! Simulation domain: the per-tick step and what it reports.

use crate::content::ScoringConfig;
use crate::entities::{DamageOutcome, ObjectKind, ObjectTag, Player, PowerUpKind};
use crate::simulation::input::PlayerIntent;
use crate::world::{GridPosition, LoadedMaze};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Trap,
    Laser,
    Enemy,
}

/// Something that happened to the player during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    KeyCollected,
    /// `restored` is false when the player was already at full lives.
    HeartCollected { restored: bool },
    PowerUpCollected(PowerUpKind),
    /// Only hits that did something are reported; hits ignored during
    /// invulnerability are not.
    Damaged {
        source: DamageSource,
        outcome: DamageOutcome,
    },
    /// On the exit without the key the level requires.
    ExitLocked,
    ExitReached,
}

/// Advance the level and the player by `dt` seconds.
///
/// Order: occupants tick, the player moves (stopping short of walls and the
/// grid edge, however long the frame), player timers tick, then everything
/// on the player's cell is resolved. A dead player is left alone.
pub fn step(
    level: &mut LoadedMaze,
    player: &mut Player,
    intent: &PlayerIntent,
    dt: f32,
    scoring: &ScoringConfig,
) -> Vec<Interaction> {
    let mut interactions = Vec::new();
    if !player.is_alive() {
        return interactions;
    }

    level.maze_mut().update_objects(dt);

    player.set_running(intent.running);
    sweep_move(level, player, intent, dt);

    player.update(dt);

    let cell = GridPosition::from_tile(player.position());
    collect_pickups(level, player, cell, scoring, &mut interactions);
    apply_hazards(level, player, cell, &mut interactions);
    check_exit(level, player, cell, &mut interactions);

    interactions
}

/// Longest distance, in tiles, covered by one movement sub-step. Under one
/// tile, so no sub-step can land beyond a wall.
const MAX_SUBSTEP_DISTANCE: f32 = 0.5;

/// Move in sub-steps and stop at the first one that ends in a blocked cell,
/// keeping the player on the last open position.
fn sweep_move(level: &LoadedMaze, player: &mut Player, intent: &PlayerIntent, dt: f32) {
    let substeps = (player.top_speed() * dt / MAX_SUBSTEP_DISTANCE).ceil().max(1.0) as u32;
    let sub_dt = dt / substeps as f32;

    for _ in 0..substeps {
        let before = player.position();
        player.move_in(intent.direction, sub_dt);
        if level.maze().is_blocked(GridPosition::from_tile(player.position())) {
            player.set_position(before);
            break;
        }
    }
}

fn collect_pickups(
    level: &mut LoadedMaze,
    player: &mut Player,
    cell: GridPosition,
    scoring: &ScoringConfig,
    interactions: &mut Vec<Interaction>,
) {
    let Some(object) = level.maze_mut().get_at_mut(cell) else {
        return;
    };
    if !object.is_active() {
        return;
    }

    match object.kind().tag() {
        ObjectTag::Key => {
            object.deactivate();
            player.collect_key(scoring.score_per_key);
            interactions.push(Interaction::KeyCollected);
        }
        ObjectTag::HeartPickup => {
            object.deactivate();
            let restored = player.heal();
            interactions.push(Interaction::HeartCollected { restored });
        }
        ObjectTag::PowerUp => {
            if let Some(kind) = object.apply_power_up(player) {
                interactions.push(Interaction::PowerUpCollected(kind));
            }
        }
        _ => {}
    }
}

fn record_hit(interactions: &mut Vec<Interaction>, source: DamageSource, outcome: DamageOutcome) {
    if outcome != DamageOutcome::Ignored {
        interactions.push(Interaction::Damaged { source, outcome });
    }
}

/// Traps on the player's cell, firing lasers whose line covers it, and
/// enemies standing on it. Ghost mode lets the player pass enemies.
fn apply_hazards(
    level: &LoadedMaze,
    player: &mut Player,
    cell: GridPosition,
    interactions: &mut Vec<Interaction>,
) {
    let on_trap = level
        .maze()
        .get_at(cell)
        .is_some_and(|o| o.is_active() && matches!(o.kind(), ObjectKind::Trap));
    if on_trap {
        record_hit(interactions, DamageSource::Trap, player.take_damage());
    }

    for object in level.maze().objects().filter(|o| o.is_active()) {
        match object.kind() {
            ObjectKind::LaserGrid(laser)
                if laser.is_firing() && laser.covers(object.cell(), cell) =>
            {
                record_hit(interactions, DamageSource::Laser, player.take_damage());
            }
            ObjectKind::Enemy(enemy) if !player.has_ghost_mode() && object.cell() == cell => {
                record_hit(interactions, DamageSource::Enemy, enemy.on_hit_player(player));
            }
            _ => {}
        }
    }
}

fn check_exit(
    level: &LoadedMaze,
    player: &mut Player,
    cell: GridPosition,
    interactions: &mut Vec<Interaction>,
) {
    if cell != level.exit_position() || !player.is_alive() {
        return;
    }

    let needs_key = level.maze().count(ObjectTag::Key) > 0;
    if !needs_key {
        interactions.push(Interaction::ExitReached);
    } else if player.has_key() {
        player.use_key();
        interactions.push(Interaction::ExitReached);
    } else {
        interactions.push(Interaction::ExitLocked);
    }
}
