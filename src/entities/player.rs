//! Entities domain: the player state machine.
//!
//! The player owns lives, inventory, stamina and every timer that gates
//! damage and power-ups. Movement is continuous in tile units, unlike the
//! grid-stepped enemies.

use bevy::prelude::*;

use crate::content::PlayerTuning;
use crate::world::Direction;

/// Keys and the three power-up flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    key_count: u32,
    shield: bool,
    speed_boost: bool,
    ghost_mode: bool,
}

impl Inventory {
    pub fn key_count(&self) -> u32 {
        self.key_count
    }

    pub fn has_key(&self) -> bool {
        self.key_count > 0
    }

    fn add_key(&mut self) {
        self.key_count += 1;
    }

    fn remove_key(&mut self) {
        self.key_count = self.key_count.saturating_sub(1);
    }
}

/// What a single call to [`Player::take_damage`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// The shield took the hit and is gone.
    Absorbed,
    /// Still invulnerable from a previous hit.
    Ignored,
    LifeLost { lives_remaining: u32 },
}

#[derive(Component, Debug, Clone)]
pub struct Player {
    position: Vec2,
    inventory: Inventory,
    lives: u32,
    max_lives: u32,
    facing: Direction,
    stamina: f32,
    running: bool,
    damage_flash_timer: f32,
    invulnerability_timer: f32,
    shield_timer: f32,
    speed_boost_timer: f32,
    ghost_mode_timer: f32,
    score: u32,
    experience: u32,
    tuning: PlayerTuning,
}

impl Player {
    pub fn new(position: Vec2, tuning: PlayerTuning) -> Self {
        Self {
            position,
            inventory: Inventory::default(),
            lives: tuning.starting_lives.min(tuning.max_lives),
            max_lives: tuning.max_lives,
            facing: Direction::Right,
            stamina: tuning.max_stamina,
            running: false,
            damage_flash_timer: 0.0,
            invulnerability_timer: 0.0,
            shield_timer: 0.0,
            speed_boost_timer: 0.0,
            ghost_mode_timer: 0.0,
            score: 0,
            experience: 0,
            tuning,
        }
    }

    /// Advance every timer by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.damage_flash_timer = (self.damage_flash_timer - dt).max(0.0);
        self.invulnerability_timer = (self.invulnerability_timer - dt).max(0.0);

        self.shield_timer = (self.shield_timer - dt).max(0.0);
        self.speed_boost_timer = (self.speed_boost_timer - dt).max(0.0);
        self.ghost_mode_timer = (self.ghost_mode_timer - dt).max(0.0);

        if self.shield_timer <= 0.0 {
            self.inventory.shield = false;
        }
        if self.speed_boost_timer <= 0.0 {
            self.inventory.speed_boost = false;
        }
        if self.ghost_mode_timer <= 0.0 {
            self.inventory.ghost_mode = false;
        }

        if !self.running && self.stamina < self.tuning.max_stamina {
            self.stamina =
                (self.stamina + self.tuning.stamina_regen * dt).min(self.tuning.max_stamina);
        }
    }

    /// Continuous movement in `direction` for `dt` seconds.
    pub fn move_in(&mut self, direction: Direction, dt: f32) {
        if direction.is_none() {
            return;
        }

        self.facing = direction;

        let mut speed_multiplier = 1.0;
        if self.inventory.speed_boost {
            speed_multiplier *= self.tuning.speed_boost_multiplier;
        }

        if self.running && self.stamina > 0.0 {
            speed_multiplier *= self.tuning.run_multiplier;
            self.stamina = (self.stamina - self.tuning.stamina_drain * dt).max(0.0);
        } else if self.stamina <= 0.0 {
            self.running = false;
        }

        let speed = self.tuning.movement_speed * speed_multiplier;
        self.position += direction.vector().normalize_or_zero() * speed * dt;
    }

    /// Upper bound on the current movement speed in tiles per second.
    pub fn top_speed(&self) -> f32 {
        let mut speed = self.tuning.movement_speed * self.tuning.run_multiplier.max(1.0);
        if self.inventory.speed_boost {
            speed *= self.tuning.speed_boost_multiplier.max(1.0);
        }
        speed
    }

    /// Shield first, then invulnerability, then a life.
    pub fn take_damage(&mut self) -> DamageOutcome {
        if self.inventory.shield {
            self.inventory.shield = false;
            self.shield_timer = 0.0;
            return DamageOutcome::Absorbed;
        }

        if self.invulnerability_timer > 0.0 {
            return DamageOutcome::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        self.damage_flash_timer = self.tuning.damage_flash_duration;
        self.invulnerability_timer = self.tuning.invulnerability_duration;
        DamageOutcome::LifeLost {
            lives_remaining: self.lives,
        }
    }

    /// Restore one life, up to the maximum. Returns whether a life was added.
    pub fn heal(&mut self) -> bool {
        if self.lives < self.max_lives {
            self.lives += 1;
            true
        } else {
            false
        }
    }

    pub fn collect_key(&mut self, score: u32) {
        self.inventory.add_key();
        self.add_score(score);
    }

    pub fn has_key(&self) -> bool {
        self.inventory.has_key()
    }

    pub fn use_key(&mut self) {
        self.inventory.remove_key();
    }

    pub fn activate_shield(&mut self, duration: f32) {
        self.inventory.shield = true;
        self.shield_timer = duration;
    }

    pub fn activate_speed_boost(&mut self, duration: f32) {
        self.inventory.speed_boost = true;
        self.speed_boost_timer = duration;
    }

    pub fn activate_ghost_mode(&mut self, duration: f32) {
        self.inventory.ghost_mode = true;
        self.ghost_mode_timer = duration;
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn add_experience(&mut self, xp: u32) {
        self.experience = self.experience.saturating_add(xp);
    }

    /// Place the player on a fresh level. Lives, score and experience carry
    /// over; keys, power-ups and timers do not.
    pub fn enter_level(&mut self, entry: Vec2) {
        self.position = entry;
        self.inventory = Inventory::default();
        self.facing = Direction::Right;
        self.stamina = self.tuning.max_stamina;
        self.running = false;
        self.damage_flash_timer = 0.0;
        self.invulnerability_timer = 0.0;
        self.shield_timer = 0.0;
        self.speed_boost_timer = 0.0;
        self.ghost_mode_timer = 0.0;
    }

    // ============ ACCESSORS ============

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    pub fn is_running(&self) -> bool {
        self.running && self.stamina > 0.0
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn max_lives(&self) -> u32 {
        self.max_lives
    }

    pub fn set_lives(&mut self, lives: u32) {
        self.lives = lives.min(self.max_lives);
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn facing(&self) -> Direction {
        self.facing
    }

    pub fn stamina(&self) -> f32 {
        self.stamina
    }

    pub fn set_stamina(&mut self, stamina: f32) {
        self.stamina = stamina.clamp(0.0, self.tuning.max_stamina);
    }

    pub fn is_flashing(&self) -> bool {
        self.damage_flash_timer > 0.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invulnerability_timer > 0.0
    }

    pub fn invulnerability_timer(&self) -> f32 {
        self.invulnerability_timer
    }

    pub fn has_shield(&self) -> bool {
        self.inventory.shield
    }

    pub fn shield_timer(&self) -> f32 {
        self.shield_timer
    }

    pub fn has_speed_boost(&self) -> bool {
        self.inventory.speed_boost
    }

    pub fn speed_boost_timer(&self) -> f32 {
        self.speed_boost_timer
    }

    pub fn has_ghost_mode(&self) -> bool {
        self.inventory.ghost_mode
    }

    pub fn ghost_mode_timer(&self) -> f32 {
        self.ghost_mode_timer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn experience(&self) -> u32 {
        self.experience
    }
}
