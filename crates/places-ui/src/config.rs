//! Configuration loading for the Places explorer.
//!
//! The configuration lives in `places-config.yaml`. Every field has a default,
//! so an empty file (or no file at all) yields a working setup pointed at a
//! local backend.

use std::path::{Path, PathBuf};

use places_client::ApiConfig;
use serde::Deserialize;

use crate::messages::Locale;
use crate::text::DEFAULT_PREVIEW_CHARS;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PlacesConfig {
    /// Backend location.
    #[serde(default)]
    pub api: ApiConfig,

    /// Presentation settings.
    #[serde(default)]
    pub ui: UiConfig,
}

impl PlacesConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if its contents are not valid.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Language of every rendered label.
    #[serde(default)]
    pub locale: Locale,

    /// Character budget of a description preview in the places list.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Weather icon URL template; `{icon}` is replaced by the icon code.
    #[serde(default = "default_weather_icon_url")]
    pub weather_icon_url: String,

    /// Map search URL template; `{lat}` and `{lon}` are replaced by the
    /// place's raw coordinates.
    #[serde(default = "default_map_search_url")]
    pub map_search_url: String,

    /// Directory whose `*.html` files override the built-in templates.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            preview_chars: default_preview_chars(),
            weather_icon_url: default_weather_icon_url(),
            map_search_url: default_map_search_url(),
            templates_dir: None,
        }
    }
}

const fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_weather_icon_url() -> String {
    "https://openweathermap.org/img/wn/{icon}@2x.png".to_owned()
}

fn default_map_search_url() -> String {
    "https://www.google.com/maps/search/?api=1&query={lat},{lon}".to_owned()
}
