//! Configuration management for REST completions.
//!
//! This module provides configuration loading, validation, and access through a singleton pattern.
//! Configuration is read from the language server's initialization options or
//! `workspace/didChangeConfiguration` payloads under the "rest-completion" key
//! and merged with defaults.

pub mod schema;

pub use schema::{CompletionConfig, ConfigError};

use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::RwLock;

/// Settings key holding the completion configuration.
pub const SETTINGS_KEY: &str = "rest-completion";

/// Global configuration instance.
///
/// This is lazily initialized on first access and can be updated when settings change.
static CONFIG: Lazy<RwLock<CompletionConfig>> =
    Lazy::new(|| RwLock::new(CompletionConfig::default()));

/// Loads configuration from a settings JSON value.
///
/// Reads the "rest-completion" settings, merges them with defaults,
/// validates the result, and updates the global configuration. Settings that
/// fail to deserialize are ignored in favour of the defaults.
///
/// # Example
///
/// ```no_run
/// use rest_completion::config::load_config;
/// use serde_json::json;
///
/// let settings = json!({
///     "rest-completion": {
///         "references": false
///     }
/// });
///
/// let config = load_config(Some(settings)).unwrap();
/// assert!(!config.references);
/// ```
pub fn load_config(settings_json: Option<Value>) -> Result<CompletionConfig, ConfigError> {
    let mut config = CompletionConfig::default();

    if let Some(settings) = settings_json {
        if let Some(completion_settings) = settings.get(SETTINGS_KEY) {
            match serde_json::from_value::<CompletionConfig>(completion_settings.clone()) {
                Ok(user_config) => {
                    config = config.merge(&user_config);
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse {} settings: {}. Using defaults.",
                        SETTINGS_KEY,
                        e
                    );
                }
            }
        }
    }

    config.validate()?;

    if let Ok(mut global_config) = CONFIG.write() {
        *global_config = config.clone();
    }

    Ok(config)
}

/// Gets the current global configuration.
///
/// Returns the default configuration if none has been loaded yet.
pub fn get_config() -> CompletionConfig {
    CONFIG
        .read()
        .map(|c| c.clone())
        .unwrap_or_else(|_| CompletionConfig::default())
}

/// Updates the global configuration in place.
///
/// Reverts to defaults if the result does not validate.
pub fn update_config<F>(updater: F)
where
    F: FnOnce(&mut CompletionConfig),
{
    if let Ok(mut config) = CONFIG.write() {
        updater(&mut config);

        if let Err(e) = config.validate() {
            log::warn!("Configuration validation failed after update: {}", e);
            *config = CompletionConfig::default();
        }
    }
}

/// Resets the configuration to defaults.
pub fn reset_config() {
    if let Ok(mut config) = CONFIG.write() {
        *config = CompletionConfig::default();
    }
}
