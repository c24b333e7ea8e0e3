//! Visualizer configuration and its YAML I/O

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use crate::errors::Result;

/// Languages the parse endpoint accepts
pub const SUPPORTED_LANGUAGES: &[&str] = &["python"];

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// What the converted tree carries beyond the grammar's fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    /// Add `start_line`/`start_col`/`end_line`/`end_col` attributes
    pub include_positions: bool,
    /// Add a `text` attribute to nodes without node children
    pub include_leaf_text: bool,
    /// Keep comments as `comments` children
    pub include_comments: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            include_positions: false,
            include_leaf_text: true,
            include_comments: false,
        }
    }
}

/// Request handling settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Language assumed when a parse request names none
    pub default_language: String,
    /// Serve `/api/examples`
    pub examples_enabled: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_language: "python".to_string(),
            examples_enabled: true,
        }
    }
}

impl ApiConfig {
    /// Case-insensitive membership in `SUPPORTED_LANGUAGES`
    pub fn is_supported_language(language: &str) -> bool {
        let lowered = language.to_lowercase();
        SUPPORTED_LANGUAGES.contains(&lowered.as_str())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualizerConfig {
    pub converter: ConverterConfig,
    pub api: ApiConfig,
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    converter: Option<ConverterConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    api: Option<ApiConfig>,
}

impl VisualizerConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from an optional file; no file means defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Ok(Self::from_yaml(path)?),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            converter: file.converter.unwrap_or_default(),
            api: file.api.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Export as YAML (schema v1)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            converter: Some(self.converter.clone()),
            api: Some(self.api.clone()),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }

    /// Cross-field checks serde cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if !ApiConfig::is_supported_language(&self.api.default_language) {
            return Err(ConfigError::Invalid {
                field: "api.default_language".to_string(),
                message: format!(
                    "'{}' is not one of: {}",
                    self.api.default_language,
                    SUPPORTED_LANGUAGES.join(", ")
                ),
            });
        }
        Ok(())
    }
}
