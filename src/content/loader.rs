//! Loader for the RON gameplay configuration at startup.

use bevy::prelude::*;
use ron::Options;
use std::fs;
use std::path::Path;

use super::data::GameplayConfig;
use super::validation::validate_config;

/// Error type for content loading failures.
#[derive(Debug)]
pub struct ContentLoadError {
    pub file: String,
    pub message: String,
}

impl std::fmt::Display for ContentLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to load {}: {}", self.file, self.message)
    }
}

impl std::error::Error for ContentLoadError {}

/// Create RON options with extensions enabled for more flexible parsing.
fn ron_options() -> Options {
    Options::default().with_default_extension(ron::extensions::Extensions::IMPLICIT_SOME)
}

/// Parse a gameplay config from RON text.
pub fn parse_gameplay_config(
    contents: &str,
    file: &str,
) -> Result<GameplayConfig, ContentLoadError> {
    ron_options()
        .from_str(contents)
        .map_err(|e| ContentLoadError {
            file: file.to_string(),
            message: format!("Parse error: {}", e),
        })
}

/// Load and parse a gameplay config file.
pub fn load_gameplay_config(path: &Path) -> Result<GameplayConfig, ContentLoadError> {
    let file_name = path.display().to_string();
    let contents = fs::read_to_string(path).map_err(|e| ContentLoadError {
        file: file_name.clone(),
        message: format!("IO error: {}", e),
    })?;

    parse_gameplay_config(&contents, &file_name)
}

/// Load the config, falling back to the built-in defaults when the file is
/// missing, unreadable or fails validation.
pub fn load_gameplay_config_or_default(path: &Path) -> GameplayConfig {
    if !path.exists() {
        warn!("Gameplay config not found at {:?}, using defaults", path);
        return GameplayConfig::default();
    }

    let config = match load_gameplay_config(path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return GameplayConfig::default();
        }
    };

    let errors = validate_config(&config);
    if !errors.is_empty() {
        for e in &errors {
            error!("{}", e);
        }
        warn!(
            "Gameplay config at {:?} has {} invalid value(s), using defaults",
            path,
            errors.len()
        );
        return GameplayConfig::default();
    }

    info!(
        "Loaded gameplay config v{} from {:?}",
        config.schema_version, path
    );
    config
}
