//! Global configuration management
//!
//! Provides persistent storage for user preferences.
//! Config is stored at `~/.config/reflist/config.toml` (XDG standard).
//! A missing or unreadable config never fails a command; it falls back to
//! defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Global reflist configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Listing preferences
    #[serde(default)]
    pub list: ListConfig,
}

/// Listing preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Default ordering selector: "date" or "name"
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_sort() -> String {
    "date".to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            sort: default_sort(),
        }
    }
}

impl GlobalConfig {
    /// Path of the config file under the XDG config directory
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reflist").join("config.toml"))
    }

    /// Load the config from the default location, falling back to defaults
    #[must_use]
    pub fn load() -> Self {
        Self::default_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load the config from an explicit path, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = fs::read_to_string(path) else {
            return Self::default();
        };
        toml::from_str(&content).unwrap_or_else(|err| {
            log::warn!("ignoring unparseable config at {}: {err}", path.display());
            Self::default()
        })
    }

    /// Save the config to an explicit path, creating parent directories
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the file
    /// cannot be written.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}
