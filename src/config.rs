use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub log: LogConfig,
}

/// Terminal view settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// How long to wait for an input event before redrawing
    pub poll_interval_ms: u64,
    /// Draw row and column numbers around the board
    pub show_coordinates: bool,
    pub highlight_last_move: bool,
    pub highlight_winning_line: bool,
    pub x_symbol: char,
    pub o_symbol: char,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            poll_interval_ms: 100,
            show_coordinates: true,
            highlight_last_move: true,
            highlight_winning_line: true,
            x_symbol: 'X',
            o_symbol: 'O',
        }
    }
}

/// Log output. Nothing is logged unless `file` is set, since the terminal
/// belongs to the UI.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LogConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            file: None,
            level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.poll_interval_ms == 0 || self.ui.poll_interval_ms > 1000 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be in [1, 1000]".into(),
            ));
        }
        if self.ui.x_symbol.is_whitespace() || self.ui.o_symbol.is_whitespace() {
            return Err(ConfigError::Validation(
                "ui.x_symbol and ui.o_symbol must be visible characters".into(),
            ));
        }
        if self.ui.x_symbol == self.ui.o_symbol {
            return Err(ConfigError::Validation(
                "ui.x_symbol and ui.o_symbol must differ".into(),
            ));
        }
        if self.log.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Validation(format!(
                "log.level '{}' is not one of trace, debug, info, warn, error",
                self.log.level
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
