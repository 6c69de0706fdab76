use std::path::PathBuf;

use crate::game::Pos;

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell {0} is off the board")]
    OutOfBounds(Pos),

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("game is already won")]
    GameOver,
}

/// Errors from navigating the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HistoryError {
    #[error("move {requested} is out of range (history has {len} entries)")]
    OutOfRange { requested: usize, len: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
