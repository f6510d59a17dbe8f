//! Application configuration loaded from TOML.

use serde::Deserialize;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Config file looked up in the working directory
pub const CONFIG_FILE: &str = "eternal_quest.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct QuestConfig {
    /// Where progress is saved and loaded
    pub save_file: PathBuf,
    /// Load the save file before showing the menu
    pub load_on_start: bool,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            save_file: PathBuf::from("eternal_quest.txt"),
            load_on_start: false,
            log_filter: "eternal_quest=info".to_string(),
        }
    }
}

impl QuestConfig {
    /// Read config from `path`. A missing file gives the defaults; any
    /// other read failure or invalid TOML is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Self::from_toml(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
