//! Stored connection settings.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

/// Settings persisted by `airtab config set`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl StoredConfig {
    /// Overwrite the values set in `other`, keeping the rest.
    pub fn merge(&mut self, other: StoredConfig) {
        if other.api_key.is_some() {
            self.api_key = other.api_key;
        }
        if other.base.is_some() {
            self.base = other.base;
        }
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
    }
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    let dirs =
        ProjectDirs::from("", "", "airtab").context("Could not determine config directory")?;

    let config_dir = dirs.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config directory")?;

    Ok(config_dir.join("config.json"))
}

/// Save settings to disk, readable by the owner only.
pub fn save_config(config: &StoredConfig) -> Result<PathBuf> {
    let path = config_path()?;
    write_config(&path, config)?;
    Ok(path)
}

/// Write settings to `path`. The file never exists with wider permissions
/// than 0600, since it holds the API key.
fn write_config(path: &Path, config: &StoredConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(0o600);

    let mut file = options.open(path).context("Failed to open config file")?;

    // A file created by an older version keeps its mode on open.
    #[cfg(unix)]
    file.set_permissions(fs::Permissions::from_mode(0o600))
        .context("Failed to restrict config file permissions")?;

    file.write_all(json.as_bytes())
        .context("Failed to write config file")?;
    Ok(())
}

/// Load settings from disk; a missing file is an empty config.
pub fn load_config() -> Result<StoredConfig> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(StoredConfig::default());
    }

    let json = fs::read_to_string(&path).context("Failed to read config file")?;
    serde_json::from_str(&json).context("Invalid config file")
}
