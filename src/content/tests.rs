//! Content domain: tests for config parsing, defaults, and validation.

use std::path::Path;

use super::{
    GAMEPLAY_CONFIG_PATH, GameplayConfig, load_gameplay_config, load_gameplay_config_or_default,
    parse_gameplay_config, validate_config,
};

// -----------------------------------------------------------------------------
// Defaults
// -----------------------------------------------------------------------------

#[test]
fn test_default_config_is_valid() {
    let config = GameplayConfig::default();
    assert!(validate_config(&config).is_empty());
}

#[test]
fn test_default_tuning_values() {
    let config = GameplayConfig::default();
    assert_eq!(config.player.starting_lives, 3);
    assert_eq!(config.player.max_lives, 5);
    assert_eq!(config.hazards.patrol_step_interval, 0.4);
    assert_eq!(config.hazards.laser_cooldown, 2.0);
    assert_eq!(config.hazards.laser_fire_duration, 0.4);
    assert_eq!(config.power_ups.shield, 3.0);
    assert_eq!(config.scoring.score_per_key, 100);
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_partial_config_keeps_defaults() {
    let text = r#"(
        player: (starting_lives: 4),
        hazards: (laser_cooldown: 1.5),
    )"#;
    let config = parse_gameplay_config(text, "inline").expect("config should parse");

    assert_eq!(config.player.starting_lives, 4);
    assert_eq!(config.player.max_lives, 5);
    assert_eq!(config.hazards.laser_cooldown, 1.5);
    assert_eq!(config.hazards.laser_fire_duration, 0.4);
    assert_eq!(config.levels.max_campaign_levels, 5);
}

#[test]
fn test_bundled_config_matches_defaults() {
    let config = load_gameplay_config(Path::new(GAMEPLAY_CONFIG_PATH))
        .expect("bundled config should load");
    assert_eq!(config, GameplayConfig::default());
}

#[test]
fn test_default_config_round_trips_through_ron() {
    let config = GameplayConfig::default();
    let text = ron::to_string(&config).expect("config should serialize");
    let parsed = parse_gameplay_config(&text, "inline").expect("config should parse");
    assert_eq!(parsed, config);
}

#[test]
fn test_parse_error_names_the_file() {
    let err = parse_gameplay_config("(player: (starting_lives: \"three\"))", "broken.ron")
        .expect_err("string lives should not parse");
    assert_eq!(err.file, "broken.ron");
    assert!(err.to_string().starts_with("Failed to load broken.ron"));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = load_gameplay_config_or_default(Path::new("does/not/exist/gameplay.ron"));
    assert_eq!(config, GameplayConfig::default());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_starting_lives_above_max_is_rejected() {
    let mut config = GameplayConfig::default();
    config.player.starting_lives = 6;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "player.starting_lives");
}

#[test]
fn test_non_positive_timings_are_rejected() {
    let mut config = GameplayConfig::default();
    config.hazards.patrol_step_interval = 0.0;
    config.hazards.laser_fire_duration = -1.0;

    let fields: Vec<_> = validate_config(&config).iter().map(|e| e.field).collect();
    assert!(fields.contains(&"hazards.patrol_step_interval"));
    assert!(fields.contains(&"hazards.laser_fire_duration"));
}

#[test]
fn test_inverted_endless_sizes_are_rejected() {
    let mut config = GameplayConfig::default();
    config.levels.min_endless_grid_size = 8;
    config.levels.max_endless_grid_size = 6;

    let errors = validate_config(&config);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "levels.max_endless_grid_size");
}
