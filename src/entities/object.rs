//! Entities domain: maze occupants as one closed sum type.

use bevy::prelude::*;

use crate::entities::enemy::Enemy;
use crate::entities::hazards::LaserGrid;
use crate::entities::player::Player;
use crate::entities::powerup::{PowerUp, PowerUpKind};
use crate::world::{Appearance, GridPosition};

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectKind {
    Wall,
    Entry,
    Exit,
    Key,
    HeartPickup,
    Trap,
    PowerUp(PowerUp),
    LaserGrid(LaserGrid),
    Enemy(Enemy),
}

/// Payload-free tag of an [`ObjectKind`], for counting and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectTag {
    Wall,
    Entry,
    Exit,
    Key,
    HeartPickup,
    Trap,
    PowerUp,
    LaserGrid,
    Enemy,
}

impl ObjectKind {
    pub fn tag(&self) -> ObjectTag {
        match self {
            ObjectKind::Wall => ObjectTag::Wall,
            ObjectKind::Entry => ObjectTag::Entry,
            ObjectKind::Exit => ObjectTag::Exit,
            ObjectKind::Key => ObjectTag::Key,
            ObjectKind::HeartPickup => ObjectTag::HeartPickup,
            ObjectKind::Trap => ObjectTag::Trap,
            ObjectKind::PowerUp(_) => ObjectTag::PowerUp,
            ObjectKind::LaserGrid(_) => ObjectTag::LaserGrid,
            ObjectKind::Enemy(_) => ObjectTag::Enemy,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self, ObjectKind::Wall)
    }

    /// One character per kind, used for ASCII dumps of a maze.
    pub fn symbol(&self) -> char {
        match self {
            ObjectKind::Wall => '#',
            ObjectKind::Entry => 'S',
            ObjectKind::Exit => 'E',
            ObjectKind::Key => 'k',
            ObjectKind::HeartPickup => 'h',
            ObjectKind::Trap => '^',
            ObjectKind::PowerUp(p) => match p.kind {
                PowerUpKind::Shield => 's',
                PowerUpKind::SpeedBoost => 'b',
                PowerUpKind::GhostMode => 'g',
            },
            ObjectKind::LaserGrid(_) => 'L',
            ObjectKind::Enemy(_) => 'X',
        }
    }
}

/// Anything placed in a maze cell.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    position: Vec2,
    appearance: Appearance,
    active: bool,
    kind: ObjectKind,
}

impl GameObject {
    pub fn new(cell: GridPosition, kind: ObjectKind, appearance: Appearance) -> Self {
        Self {
            position: cell.as_vec2(),
            appearance,
            active: true,
            kind,
        }
    }

    /// Advance per-tick behaviour. Only enemies and lasers have any;
    /// `blocked` tells a patrol which cells it may not step into.
    pub fn update(&mut self, dt: f32, blocked: impl Fn(GridPosition) -> bool) {
        if !self.active {
            return;
        }
        match &mut self.kind {
            ObjectKind::LaserGrid(laser) => laser.update(dt),
            ObjectKind::Enemy(enemy) => enemy.update(dt, &mut self.position, blocked),
            ObjectKind::Wall
            | ObjectKind::Entry
            | ObjectKind::Exit
            | ObjectKind::Key
            | ObjectKind::HeartPickup
            | ObjectKind::Trap
            | ObjectKind::PowerUp(_) => {}
        }
    }

    /// Hand a power-up to the player and consume it. Returns the kind applied,
    /// or `None` if this is not an active power-up.
    pub fn apply_power_up(&mut self, player: &mut Player) -> Option<PowerUpKind> {
        if !self.active {
            return None;
        }
        let ObjectKind::PowerUp(power_up) = &self.kind else {
            return None;
        };
        power_up.apply(player);
        let kind = power_up.kind;
        self.deactivate();
        Some(kind)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// The cell this object currently stands on.
    pub fn cell(&self) -> GridPosition {
        GridPosition::from_tile(self.position)
    }

    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    pub fn kind(&self) -> &ObjectKind {
        &self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
