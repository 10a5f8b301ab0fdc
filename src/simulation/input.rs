//! Simulation domain: keyboard to movement intent.

use bevy::prelude::*;

use crate::world::Direction;

/// What the player wants to do this frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerIntent {
    pub direction: Direction,
    pub running: bool,
}

impl PlayerIntent {
    pub fn new(direction: Direction, running: bool) -> Self {
        Self { direction, running }
    }
}

/// One direction per frame; when several keys are held, up wins over down
/// wins over left wins over right.
pub(crate) fn read_keyboard_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    let direction = if keyboard.any_pressed([KeyCode::ArrowUp, KeyCode::KeyW]) {
        Direction::Up
    } else if keyboard.any_pressed([KeyCode::ArrowDown, KeyCode::KeyS]) {
        Direction::Down
    } else if keyboard.any_pressed([KeyCode::ArrowLeft, KeyCode::KeyA]) {
        Direction::Left
    } else if keyboard.any_pressed([KeyCode::ArrowRight, KeyCode::KeyD]) {
        Direction::Right
    } else {
        Direction::None
    };

    *intent = PlayerIntent {
        direction,
        running: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
    };
}
