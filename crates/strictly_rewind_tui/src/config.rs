//! TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Deserialize;
use std::path::Path;
use strictly_rewind::{Glyphs, SortOrder};
use tracing::{debug, info, instrument};

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_rewind.toml";

/// Front-end configuration. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TuiConfig {
    /// Glyph drawn for the first player.
    #[serde(default = "default_first_glyph")]
    first_glyph: String,

    /// Glyph drawn for the second player. Set to "0" for the classic look.
    #[serde(default = "default_second_glyph")]
    second_glyph: String,

    /// Move-list order at startup.
    #[serde(default)]
    initial_order: SortOrder,
}

fn default_first_glyph() -> String {
    "X".to_string()
}

fn default_second_glyph() -> String {
    "O".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            first_glyph: default_first_glyph(),
            second_glyph: default_second_glyph(),
            initial_order: SortOrder::default(),
        }
    }
}

impl TuiConfig {
    /// Parses and validates configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the config for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// used if present and built-in defaults otherwise.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Overrides the startup move-list order.
    pub fn with_initial_order(mut self, order: SortOrder) -> Self {
        self.initial_order = order;
        self
    }

    /// Glyph set for rendering.
    pub fn glyphs(&self) -> Glyphs {
        Glyphs::new(self.first_glyph.clone(), self.second_glyph.clone())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.first_glyph.trim().is_empty() || self.second_glyph.trim().is_empty() {
            return Err(ConfigError::new("Glyphs must not be empty".to_string()));
        }
        if self.first_glyph == self.second_glyph {
            return Err(ConfigError::new(format!(
                "Both players use the glyph {:?}",
                self.first_glyph
            )));
        }
        Ok(())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
