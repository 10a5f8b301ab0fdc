//! Entities domain: enemy variants and their per-tick behaviour.

use bevy::prelude::*;

use crate::entities::player::{DamageOutcome, Player};
use crate::world::{Direction, GridPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnemyState {
    #[default]
    Patrol,
    Attack,
    Evade,
    Retreat,
}

/// Grid-stepped walk along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PatrolRoute {
    direction: Direction,
    step_timer: f32,
    step_interval: f32,
}

impl PatrolRoute {
    pub fn new(direction: Direction, step_interval: f32) -> Self {
        Self {
            direction,
            step_timer: 0.0,
            step_interval,
        }
    }

    #[cfg(test)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Take at most one step once the interval has elapsed. A blocked cell
    /// ahead turns the patrol around; if both sides are blocked it waits.
    fn update(&mut self, dt: f32, position: &mut Vec2, blocked: impl Fn(GridPosition) -> bool) {
        self.step_timer += dt;
        if self.step_timer < self.step_interval {
            return;
        }
        self.step_timer = 0.0;

        let here = GridPosition::from_tile(*position);
        if blocked(here.offset(self.direction)) {
            self.direction = self.direction.opposite();
            if blocked(here.offset(self.direction)) {
                return;
            }
        }
        *position += self.direction.vector();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EnemyBehavior {
    Patrol(PatrolRoute),
    /// Meant to chase the player with pathfinding; not implemented, the
    /// update is a no-op.
    Kamikaze,
    /// Meant to keep its distance from the player; not implemented, the
    /// update is a no-op.
    Evade,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    state: EnemyState,
    behavior: EnemyBehavior,
}

impl Enemy {
    /// Patrol enemies start out walking left.
    pub fn patrol(step_interval: f32) -> Self {
        Self {
            state: EnemyState::Patrol,
            behavior: EnemyBehavior::Patrol(PatrolRoute::new(Direction::Left, step_interval)),
        }
    }

    pub fn kamikaze() -> Self {
        Self {
            state: EnemyState::Patrol,
            behavior: EnemyBehavior::Kamikaze,
        }
    }

    pub fn evade() -> Self {
        Self {
            state: EnemyState::Patrol,
            behavior: EnemyBehavior::Evade,
        }
    }

    pub fn state(&self) -> EnemyState {
        self.state
    }

    #[cfg(test)]
    pub fn behavior(&self) -> &EnemyBehavior {
        &self.behavior
    }

    pub fn update(&mut self, dt: f32, position: &mut Vec2, blocked: impl Fn(GridPosition) -> bool) {
        match &mut self.behavior {
            EnemyBehavior::Patrol(route) => route.update(dt, position, blocked),
            EnemyBehavior::Kamikaze | EnemyBehavior::Evade => {}
        }
    }

    /// Contact with the player costs the player one hit.
    pub fn on_hit_player(&self, player: &mut Player) -> DamageOutcome {
        player.take_damage()
    }
}
