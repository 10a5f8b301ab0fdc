//! Entities domain: the laser grid hazard.

use crate::world::GridPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireDirection {
    /// Beam covers the laser's row.
    Horizontal,
    /// Beam covers the laser's column.
    Vertical,
}

impl FireDirection {
    /// Orientation alternates across the grid like a checkerboard.
    pub fn for_cell(position: GridPosition) -> Self {
        if (position.x + position.y).rem_euclid(2) == 0 {
            FireDirection::Horizontal
        } else {
            FireDirection::Vertical
        }
    }
}

/// Two-phase timer: dormant for `cooldown`, then firing for `fire_duration`.
///
/// The laser never looks at other entities. Whoever runs the simulation asks
/// [`LaserGrid::is_firing`] and [`LaserGrid::covers`] and applies damage.
#[derive(Debug, Clone, PartialEq)]
pub struct LaserGrid {
    direction: FireDirection,
    cooldown: f32,
    fire_duration: f32,
    timer: f32,
    firing: bool,
}

impl LaserGrid {
    pub fn with_timing(direction: FireDirection, cooldown: f32, fire_duration: f32) -> Self {
        Self {
            direction,
            cooldown,
            fire_duration,
            timer: 0.0,
            firing: false,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.timer += dt;

        if !self.firing && self.timer >= self.cooldown {
            self.firing = true;
            self.timer = 0.0;
        } else if self.firing && self.timer >= self.fire_duration {
            self.firing = false;
            self.timer = 0.0;
        }
    }

    pub fn is_firing(&self) -> bool {
        self.firing
    }

    pub fn direction(&self) -> FireDirection {
        self.direction
    }

    /// Whether `target` lies on the fire line of a laser mounted at `origin`.
    pub fn covers(&self, origin: GridPosition, target: GridPosition) -> bool {
        match self.direction {
            FireDirection::Horizontal => origin.y == target.y,
            FireDirection::Vertical => origin.x == target.x,
        }
    }
}
