//! CLI configuration: which backend to use and where its files live.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Directory name under the platform config / data dirs.
pub const PROJECT_DIR: &str = "lektyr";

/// Default remote backend address; matches the API server's default bind.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8016";

/// Which backend the CLI talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Catalog in a local JSON file.
    #[default]
    Local,
    /// Catalog behind the REST API.
    Remote,
}

/// The CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Selected backend.
    pub backend: Backend,
    /// Local backend settings.
    pub local: LocalSection,
    /// Remote backend settings.
    pub remote: RemoteSection,
    /// Session storage settings.
    pub session: SessionSection,
}

/// The `[local]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocalSection {
    /// Catalog JSON file; defaults to `<data dir>/lektyr/catalog.json`.
    pub path: Option<PathBuf>,
}

/// The `[remote]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RemoteSection {
    /// Base URL of the API server.
    pub base_url: String,
}

/// The `[session]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionSection {
    /// Session JSON file; defaults to `<config dir>/lektyr/session.json`.
    pub path: Option<PathBuf>,
}

impl Default for RemoteSection {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl CliConfig {
    /// The config file location when no override is given.
    pub fn default_config_path() -> Option<PathBuf> {
        Some(dirs::config_dir()?.join(PROJECT_DIR).join("config.toml"))
    }

    /// Resolves the config file path: explicit override, else the default.
    pub fn resolve_config_path(override_path: Option<&str>) -> Option<PathBuf> {
        match override_path {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// Loads the configuration.
    ///
    /// A missing file yields the defaults, so the CLI works out of the
    /// box against a local catalog.
    pub fn load(override_path: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(override_path) else {
            return Err(Error::config(
                "could not determine config directory for this platform",
            ));
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Loads the configuration from an explicit file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Where the local catalog lives.
    pub fn data_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.local.path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(PROJECT_DIR).join("catalog.json"))
            .ok_or_else(|| Error::config("could not determine data directory for this platform"))
    }

    /// Where the session record lives.
    pub fn session_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.session.path {
            return Ok(path.clone());
        }
        dirs::config_dir()
            .map(|d| d.join(PROJECT_DIR).join("session.json"))
            .ok_or_else(|| Error::config("could not determine config directory for this platform"))
    }
}
