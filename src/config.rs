//! Configuration for the terminal front-end.
//!
//! Loaded from `config.toml` in the user's config directory unless a path is
//! given explicitly. Every field is optional.

use crate::error::{CalcpadError, Result};
use crate::input::KeyBindings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Print each display as a JSON object instead of two text lines.
    pub json: bool,
    /// Copy the result to the clipboard after every equals.
    pub copy_on_equals: bool,
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Prompt printed before reading a line interactively.
    pub prompt: String,
    pub keys: KeyBindings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            json: false,
            copy_on_equals: false,
            log_filter: "warn".to_string(),
            prompt: "> ".to_string(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Default location: `<config dir>/calcpad/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("calcpad").join("config.toml"))
    }

    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, a missing default file
    /// yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Read and parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CalcpadError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| CalcpadError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.keys.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
