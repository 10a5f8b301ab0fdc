//! Simulation domain: the Bevy system driving one step per frame.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::GameplayConfig;
use crate::entities::Player;
use crate::simulation::events::{
    ExitReachedEvent, ItemPickedUpEvent, PickupKind, PlayerDamagedEvent,
};
use crate::simulation::input::PlayerIntent;
use crate::simulation::interaction::{Interaction, step};
use crate::world::LoadedMaze;

pub(crate) fn run_simulation_step(
    time: Res<Time>,
    intent: Res<PlayerIntent>,
    config: Res<GameplayConfig>,
    level: Option<ResMut<LoadedMaze>>,
    mut player_query: Query<&mut Player>,
    mut damage_events: MessageWriter<PlayerDamagedEvent>,
    mut pickup_events: MessageWriter<ItemPickedUpEvent>,
    mut exit_events: MessageWriter<ExitReachedEvent>,
) {
    let Some(mut level) = level else {
        return;
    };
    let Some(mut player) = player_query.iter_mut().next() else {
        return;
    };

    let interactions = step(
        &mut level,
        &mut player,
        &intent,
        time.delta_secs(),
        &config.scoring,
    );

    for interaction in interactions {
        match interaction {
            Interaction::KeyCollected => {
                info!("[PICKUP] Key collected");
                pickup_events.write(ItemPickedUpEvent {
                    item: PickupKind::Key,
                });
            }
            Interaction::HeartCollected { restored } => {
                info!("[PICKUP] Heart collected (life restored: {})", restored);
                pickup_events.write(ItemPickedUpEvent {
                    item: PickupKind::Heart { restored },
                });
            }
            Interaction::PowerUpCollected(kind) => {
                info!("[PICKUP] Power-up {:?} activated", kind);
                pickup_events.write(ItemPickedUpEvent {
                    item: PickupKind::PowerUp(kind),
                });
            }
            Interaction::Damaged { source, outcome } => {
                info!("[DAMAGE] {:?} hit the player: {:?}", source, outcome);
                damage_events.write(PlayerDamagedEvent { source, outcome });
            }
            Interaction::ExitLocked => {
                debug!("[EXIT] Exit is locked, a key is required");
            }
            Interaction::ExitReached => {
                info!("[EXIT] Exit reached");
                exit_events.write(ExitReachedEvent);
            }
        }
    }
}
