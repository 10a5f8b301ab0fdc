//! View domain: HUD line and the text screens between levels.

use bevy::prelude::*;

use crate::core::{GameState, PlayerSkin};
use crate::entities::Player;

/// Marker for the in-level status line.
#[derive(Component, Debug)]
pub struct HudText;

/// Marker for a full-screen text panel; despawned when its screen exits.
#[derive(Component, Debug)]
pub struct ScreenOverlay;

/// Body text of the character select panel, rewritten when the choice changes.
#[derive(Component, Debug)]
pub struct SelectionText;

pub(crate) fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.9, 0.9, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(16.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
    ));
}

pub(crate) fn despawn_hud(mut commands: Commands, query: Query<Entity, With<HudText>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn update_hud(
    game_state: Res<GameState>,
    player_query: Query<&Player>,
    mut text_query: Query<&mut Text, With<HudText>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };

    let mut buffs = Vec::new();
    if player.has_shield() {
        buffs.push(format!("Shield {:.1}s", player.shield_timer()));
    }
    if player.has_speed_boost() {
        buffs.push(format!("Speed {:.1}s", player.speed_boost_timer()));
    }
    if player.has_ghost_mode() {
        buffs.push(format!("Ghost {:.1}s", player.ghost_mode_timer()));
    }

    for mut text in &mut text_query {
        **text = format!(
            "Level {}  Lives {}/{}  Keys {}  Score {}  XP {}  Stamina {:.0}{}{}",
            game_state.current_level(),
            player.lives(),
            player.max_lives(),
            player.inventory().key_count(),
            player.score(),
            player.experience(),
            player.stamina(),
            if buffs.is_empty() { "" } else { "  " },
            buffs.join("  "),
        );
    }
}

fn spawn_overlay(commands: &mut Commands, title: &str, title_color: Color, body: &str) {
    commands
        .spawn((
            ScreenOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.95)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color),
            ));
            parent.spawn((
                Text::new(body),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                TextLayout::new_with_justify(Justify::Center),
            ));
        });
}

fn selection_body(game_state: &GameState) -> String {
    let skins: Vec<String> = PlayerSkin::ALL
        .iter()
        .enumerate()
        .map(|(i, skin)| {
            let marker = if *skin == game_state.character() { ">" } else { " " };
            format!("{} [{}] {}", marker, i + 1, skin.name())
        })
        .collect();

    format!(
        "{}\n\nMode: {} (Tab to switch)\n\nPress Enter to start",
        skins.join("\n"),
        game_state.mode().label()
    )
}

pub(crate) fn spawn_character_select_overlay(mut commands: Commands, game_state: Res<GameState>) {
    commands
        .spawn((
            ScreenOverlay,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.05, 0.05, 0.1, 0.98)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("MAZE RUNNER"),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.75, 0.3)),
            ));
            parent.spawn((
                SelectionText,
                Text::new(selection_body(&game_state)),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
            ));
        });
}

pub(crate) fn update_character_select_overlay(
    game_state: Res<GameState>,
    mut text_query: Query<&mut Text, With<SelectionText>>,
) {
    if !game_state.is_changed() {
        return;
    }
    for mut text in &mut text_query {
        **text = selection_body(&game_state);
    }
}

pub(crate) fn spawn_level_complete_overlay(
    mut commands: Commands,
    game_state: Res<GameState>,
    player_query: Query<&Player>,
) {
    let score = player_query.iter().next().map_or(0, |p| p.score());
    let body = format!(
        "Level {} cleared\nScore: {}\n\nPress Enter to continue",
        game_state.current_level(),
        score
    );
    spawn_overlay(&mut commands, "LEVEL COMPLETE", Color::srgb(0.4, 0.9, 0.4), &body);
}

pub(crate) fn spawn_game_over_overlay(
    mut commands: Commands,
    game_state: Res<GameState>,
    player_query: Query<&Player>,
) {
    let score = player_query.iter().next().map_or(0, |p| p.score());
    let body = format!(
        "Fell on level {}\nScore: {}\n\nPress Enter to return",
        game_state.current_level(),
        score
    );
    spawn_overlay(&mut commands, "GAME OVER", Color::srgb(0.9, 0.3, 0.3), &body);
}

pub(crate) fn despawn_overlays(mut commands: Commands, query: Query<Entity, With<ScreenOverlay>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
