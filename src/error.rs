//! Error types for calcpad.

use std::path::PathBuf;

/// Errors raised around the calculator: configuration, clipboard and I/O.
/// The engine itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CalcpadError {
    /// The configuration file could not be read
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::config::Config`]
    #[error("failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A key binding collides with a key that already has a meaning
    #[error("invalid key binding for {action}: '{key}' is unavailable")]
    KeyBinding { action: &'static str, key: char },

    /// The system clipboard was unavailable or refused the text
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Reading input or writing the display failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The display could not be serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CalcpadError>;
