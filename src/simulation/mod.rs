//! Simulation domain: per-frame stepping of the loaded level and the player.

mod events;
mod input;
mod interaction;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{ExitReachedEvent, ItemPickedUpEvent, PickupKind, PlayerDamagedEvent};
pub use input::PlayerIntent;
pub use interaction::{DamageSource, Interaction, step};

use bevy::prelude::*;

use crate::core::{GameplaySet, Screen};
use crate::simulation::input::read_keyboard_intent;
use crate::simulation::systems::run_simulation_step;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerIntent>()
            .add_message::<PlayerDamagedEvent>()
            .add_message::<ItemPickedUpEvent>()
            .add_message::<ExitReachedEvent>()
            .add_systems(
                Update,
                (
                    read_keyboard_intent.in_set(GameplaySet::Input),
                    run_simulation_step.in_set(GameplaySet::Simulate),
                )
                    .run_if(in_state(Screen::Playing)),
            );
    }
}
