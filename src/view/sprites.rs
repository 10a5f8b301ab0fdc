//! View domain: sprites mirroring the maze and the player.

use bevy::prelude::*;

use crate::core::GameState;
use crate::entities::{EnemyState, GameObject, ObjectKind, Player};
use crate::world::{Appearance, Direction, GridPosition, LoadedMaze};

pub const TILE_SIZE: f32 = 32.0;
pub const PLACEHOLDER_COLOR: Color = Color::srgb(0.5, 0.5, 0.5);

const CAMERA_LERP: f32 = 5.0;

/// Sprite drawing the occupant loaded into `slot`.
#[derive(Component, Debug)]
pub struct LevelSprite {
    pub slot: GridPosition,
}

fn layer(kind: &ObjectKind) -> f32 {
    match kind {
        ObjectKind::Wall | ObjectKind::Entry | ObjectKind::Exit | ObjectKind::Trap => 0.0,
        ObjectKind::Key | ObjectKind::HeartPickup | ObjectKind::PowerUp(_) => 1.0,
        ObjectKind::LaserGrid(_) => 1.5,
        ObjectKind::Enemy(_) => 2.0,
    }
}

fn tile_translation(position: Vec2, z: f32) -> Vec3 {
    (position * TILE_SIZE).extend(z)
}

fn sprite_for(object: &GameObject) -> Sprite {
    let size = Some(Vec2::splat(TILE_SIZE));
    match object.appearance() {
        Appearance::Texture(image) => Sprite {
            image: image.clone(),
            custom_size: size,
            ..default()
        },
        Appearance::Placeholder => Sprite {
            color: PLACEHOLDER_COLOR,
            custom_size: size,
            ..default()
        },
    }
}

pub(crate) fn spawn_level_sprites(mut commands: Commands, level: Option<Res<LoadedMaze>>) {
    let Some(level) = level else {
        return;
    };

    let mut count = 0;
    for x in 0..level.maze().width() {
        for y in 0..level.maze().height() {
            let Some(object) = level.maze().get(x, y) else {
                continue;
            };
            commands.spawn((
                LevelSprite {
                    slot: GridPosition::new(x, y),
                },
                sprite_for(object),
                Transform::from_translation(tile_translation(
                    object.position(),
                    layer(object.kind()),
                )),
            ));
            count += 1;
        }
    }
    debug!("Spawned {} level sprites", count);
}

pub(crate) fn despawn_level_sprites(
    mut commands: Commands,
    query: Query<Entity, With<LevelSprite>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Follow walking occupants, hide consumed ones and light up firing lasers.
pub(crate) fn sync_level_sprites(
    level: Option<Res<LoadedMaze>>,
    mut query: Query<(&LevelSprite, &mut Transform, &mut Visibility, &mut Sprite)>,
) {
    let Some(level) = level else {
        return;
    };

    for (level_sprite, mut transform, mut visibility, mut sprite) in &mut query {
        let Some(object) = level.maze().get_at(level_sprite.slot) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        *visibility = if object.is_active() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        transform.translation = tile_translation(object.position(), transform.translation.z);

        match object.kind() {
            ObjectKind::LaserGrid(laser) => {
                sprite.color = if laser.is_firing() {
                    Color::srgb(1.0, 0.2, 0.2)
                } else {
                    Color::srgba(1.0, 1.0, 1.0, 0.35)
                };
            }
            ObjectKind::Enemy(enemy) if enemy.state() != EnemyState::Patrol => {
                sprite.color = Color::srgb(1.0, 0.6, 0.2);
            }
            _ => {}
        }
    }
}

/// Give a newly spawned player its skin-coloured sprite.
pub(crate) fn attach_player_sprite(
    mut commands: Commands,
    game_state: Res<GameState>,
    query: Query<(Entity, &Player), Added<Player>>,
) {
    for (entity, player) in query.iter() {
        commands.entity(entity).insert((
            Sprite {
                color: game_state.character().color(),
                custom_size: Some(Vec2::splat(TILE_SIZE * 0.8)),
                ..default()
            },
            Transform::from_translation(tile_translation(player.position(), 3.0)),
        ));
    }
}

/// White while the damage flash runs, translucent in ghost mode, mirrored
/// when facing left.
pub(crate) fn sync_player_sprite(
    game_state: Res<GameState>,
    mut query: Query<(&Player, &mut Transform, &mut Sprite)>,
) {
    for (player, mut transform, mut sprite) in &mut query {
        transform.translation = tile_translation(player.position(), 3.0);
        sprite.flip_x = player.facing() == Direction::Left;

        let base = game_state.character().color();
        sprite.color = if player.is_flashing() {
            Color::WHITE
        } else if player.has_ghost_mode() {
            base.with_alpha(0.45)
        } else {
            base
        };
    }
}

pub(crate) fn camera_follow_player(
    time: Res<Time>,
    player_query: Query<&Player>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    let target = player.position() * TILE_SIZE;
    let t = (CAMERA_LERP * time.delta_secs()).min(1.0);

    for mut transform in &mut camera_query {
        let current = transform.translation.truncate();
        transform.translation = current.lerp(target, t).extend(transform.translation.z);
    }
}
