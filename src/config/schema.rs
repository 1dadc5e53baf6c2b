//! Configuration schema for REST completions.
//!
//! This module defines the configuration structure and validation logic for
//! the user-configurable completion settings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main configuration structure for the completion engine.
///
/// All settings can be configured via Zed's settings under the
/// "rest-completion" key. Missing settings fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionConfig {
    /// Offer method keywords and protocol selectors on request lines.
    #[serde(default = "default_enabled")]
    pub methods: bool,

    /// Offer header fields below a request line.
    #[serde(default = "default_enabled")]
    pub headers: bool,

    /// Offer content types after `Content-Type:`.
    #[serde(default = "default_enabled")]
    pub mime_types: bool,

    /// Offer authorization schemes after `Authorization:`.
    #[serde(default = "default_enabled")]
    pub authorization_schemes: bool,

    /// Offer `@` directives in `#` comments.
    #[serde(default = "default_enabled")]
    pub meta_directives: bool,

    /// Offer region names in comments mentioning `ref`.
    #[serde(default = "default_enabled")]
    pub references: bool,

    /// Characters that make the editor request completions.
    ///
    /// Each entry must be a single character.
    #[serde(default = "default_trigger_characters")]
    pub trigger_characters: Vec<String>,
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("triggerCharacters entry '{0}' must be exactly one character")]
    InvalidTriggerCharacter(String),
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            methods: default_enabled(),
            headers: default_enabled(),
            mime_types: default_enabled(),
            authorization_schemes: default_enabled(),
            meta_directives: default_enabled(),
            references: default_enabled(),
            trigger_characters: default_trigger_characters(),
        }
    }
}

impl CompletionConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(invalid) = self
            .trigger_characters
            .iter()
            .find(|trigger| trigger.chars().count() != 1)
        {
            return Err(ConfigError::InvalidTriggerCharacter(invalid.clone()));
        }

        Ok(())
    }

    /// Merges this configuration with another, using values from `other`.
    pub fn merge(&self, other: &CompletionConfig) -> Self {
        Self {
            methods: other.methods,
            headers: other.headers,
            mime_types: other.mime_types,
            authorization_schemes: other.authorization_schemes,
            meta_directives: other.meta_directives,
            references: other.references,
            trigger_characters: other.trigger_characters.clone(),
        }
    }
}

// Default value functions for serde

fn default_enabled() -> bool {
    true
}

fn default_trigger_characters() -> Vec<String> {
    ["#", "@", ":", " "].iter().map(|c| c.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CompletionConfig::default();
        assert!(config.methods);
        assert!(config.headers);
        assert!(config.mime_types);
        assert!(config.authorization_schemes);
        assert!(config.meta_directives);
        assert!(config.references);
        assert_eq!(config.trigger_characters, vec!["#", "@", ":", " "]);
    }

    #[test]
    fn test_config_validation_valid() {
        assert!(CompletionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_multi_char_trigger() {
        let config = CompletionConfig {
            trigger_characters: vec!["{{".to_string()],
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidTriggerCharacter("{{".to_string()))
        );
        assert!(config
            .validate()
            .unwrap_err()
            .to_string()
            .contains("exactly one character"));
    }

    #[test]
    fn test_merge_config() {
        let base = CompletionConfig::default();
        let custom = CompletionConfig {
            references: false,
            ..Default::default()
        };

        let merged = base.merge(&custom);
        assert!(!merged.references);
        assert!(merged.methods);
    }

    #[test]
    fn test_deserialization_with_defaults() {
        let json = r##"{
            "mimeTypes": false,
            "triggerCharacters": ["#"]
        }"##;

        let config: CompletionConfig = serde_json::from_str(json).unwrap();
        assert!(!config.mime_types);
        assert_eq!(config.trigger_characters, vec!["#"]);
        assert!(config.headers);
        assert!(config.authorization_schemes);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&CompletionConfig::default()).unwrap();
        assert!(json.contains("metaDirectives"));
        assert!(json.contains("authorizationSchemes"));
    }
}
