//! Entities domain: the player, enemies, hazards and pickups.
//!
//! Everything here is plain data with per-tick update rules. No entity
//! touches another one from inside its own update; cross-entity effects are
//! explicit calls made by the simulation step.

mod enemy;
mod hazards;
mod object;
mod player;
mod powerup;


pub use enemy::{Enemy, EnemyBehavior, EnemyState};
pub use hazards::{FireDirection, LaserGrid};
pub use object::{GameObject, ObjectKind, ObjectTag};
pub use player::{DamageOutcome, Player};
pub use powerup::{PowerUp, PowerUpKind};
