//! Configuration file handling.
//!
//! [`ConfigManager`] is the generic half: where a project's config file lives
//! and how it is loaded and rendered. [`StroyConfig`] is the
//! concrete configuration of the `stroycrm` binary.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use stroy_core::{Error, Result};
use stroy_crm::{Settings, ViewId};

/// A TOML configuration type with a conventional on-disk location.
pub trait ConfigManager: Default + Serialize + DeserializeOwned {
    /// Project name; names the config directory.
    fn project_name() -> &'static str;

    /// `<platform config dir>/<project>/config.toml`.
    fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::project_name()).join("config.toml"))
    }

    /// An explicit path wins over the default location.
    fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(PathBuf::from(path)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the resolved file, or returns defaults if it does not exist.
    fn load(explicit: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(explicit) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))
    }

    /// Pretty TOML rendering.
    fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

/// Shell start-up options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// View the shell starts on
    pub initial_view: ViewId,
    /// Prompt printed before each command
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewId::Dashboard,
            prompt: "stroycrm> ".to_string(),
        }
    }
}

/// Configuration of the `stroycrm` binary.
///
/// The admin-panel sections (`[company]`, `[notifications]`, `[security]`,
/// `[backup]`) sit at the top level next to `[shell]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StroyConfig {
    /// Admin-panel settings
    #[serde(flatten)]
    pub settings: Settings,
    /// `[shell]`
    pub shell: ShellConfig,
}

impl ConfigManager for StroyConfig {
    fn project_name() -> &'static str {
        "stroycrm"
    }
}
