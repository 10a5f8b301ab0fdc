//! Validation of gameplay config values that serde alone cannot check.

use super::data::GameplayConfig;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid config value '{}': {}", self.field, self.message)
    }
}

/// Helper macro for checking a value is strictly positive
macro_rules! check_positive {
    ($errors:expr, $value:expr, $field:expr) => {
        if !($value > 0.0) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be greater than zero, got {}", $value),
            });
        }
    };
}

/// Validate all values in the config.
/// Returns a list of validation errors, empty if the config is usable.
pub fn validate_config(config: &GameplayConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let player = &config.player;
    if player.max_lives == 0 {
        errors.push(ValidationError {
            field: "player.max_lives",
            message: "must be at least 1".to_string(),
        });
    }
    if player.starting_lives == 0 || player.starting_lives > player.max_lives {
        errors.push(ValidationError {
            field: "player.starting_lives",
            message: format!(
                "must be between 1 and max_lives ({}), got {}",
                player.max_lives, player.starting_lives
            ),
        });
    }
    check_positive!(errors, player.movement_speed, "player.movement_speed");
    check_positive!(errors, player.run_multiplier, "player.run_multiplier");
    check_positive!(
        errors,
        player.speed_boost_multiplier,
        "player.speed_boost_multiplier"
    );
    check_positive!(errors, player.max_stamina, "player.max_stamina");

    let hazards = &config.hazards;
    check_positive!(
        errors,
        hazards.patrol_step_interval,
        "hazards.patrol_step_interval"
    );
    check_positive!(errors, hazards.laser_cooldown, "hazards.laser_cooldown");
    check_positive!(
        errors,
        hazards.laser_fire_duration,
        "hazards.laser_fire_duration"
    );

    let levels = &config.levels;
    if levels.max_campaign_levels == 0 {
        errors.push(ValidationError {
            field: "levels.max_campaign_levels",
            message: "must be at least 1".to_string(),
        });
    }
    // The generator needs room for an entry, an exit and a corridor.
    if levels.min_endless_grid_size < 3 {
        errors.push(ValidationError {
            field: "levels.min_endless_grid_size",
            message: format!("must be at least 3, got {}", levels.min_endless_grid_size),
        });
    }
    if levels.max_endless_grid_size < levels.min_endless_grid_size {
        errors.push(ValidationError {
            field: "levels.max_endless_grid_size",
            message: format!(
                "must not be smaller than min_endless_grid_size ({}), got {}",
                levels.min_endless_grid_size, levels.max_endless_grid_size
            ),
        });
    }

    errors
}
