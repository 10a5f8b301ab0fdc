//! Simulation domain: messages for whoever reacts to the player's tick.

use bevy::ecs::message::Message;

use crate::entities::{DamageOutcome, PowerUpKind};
use crate::simulation::interaction::DamageSource;

/// Fired when a hit was absorbed by the shield or cost a life.
#[derive(Debug)]
pub struct PlayerDamagedEvent {
    pub source: DamageSource,
    pub outcome: DamageOutcome,
}

impl Message for PlayerDamagedEvent {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickupKind {
    Key,
    Heart { restored: bool },
    PowerUp(PowerUpKind),
}

#[derive(Debug)]
pub struct ItemPickedUpEvent {
    pub item: PickupKind,
}

impl Message for ItemPickedUpEvent {}

/// Fired once the player stands on the exit and may leave.
#[derive(Debug)]
pub struct ExitReachedEvent;

impl Message for ExitReachedEvent {}
