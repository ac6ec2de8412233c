//! API server configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use lektyr_auth::Role;
use lektyr_core::{Error, Result};

/// Default bind address; clients default to port 8016 as well.
pub const DEFAULT_BIND: &str = "127.0.0.1:8016";

/// Default token lifetime in seconds (1 hour).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Top-level server configuration, loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Address to bind, e.g. `127.0.0.1:8016`.
    pub bind: String,

    /// Catalog JSON file. When unset, books live in memory only.
    pub data_path: Option<PathBuf>,

    /// Authentication settings.
    pub auth: AuthSection,

    /// Accounts allowed to log in.
    pub users: Vec<UserEntry>,
}

/// The `[auth]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthSection {
    /// Whether bearer-token auth is enforced on the catalog routes.
    pub enabled: bool,

    /// HS256 signing secret. Required when auth is enabled.
    pub secret: String,

    /// Lifetime of issued tokens, in seconds.
    pub token_ttl_secs: u64,
}

/// One login account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// Login name.
    pub username: String,
    /// Login password.
    pub password: String,
    /// Display name returned on login.
    pub full_name: String,
    /// Granted role.
    #[serde(default)]
    pub role: Role,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            data_path: None,
            auth: AuthSection::default(),
            users: Vec::new(),
        }
    }
}

impl Default for AuthSection {
    fn default() -> Self {
        Self {
            enabled: true,
            secret: String::new(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl ApiConfig {
    /// Loads and validates configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ApiConfig = toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.auth.enabled && self.auth.secret.trim().is_empty() {
            return Err(Error::config(
                "auth.secret must be set when auth is enabled",
            ));
        }
        if self.auth.enabled && self.users.is_empty() {
            return Err(Error::config(
                "at least one user is required when auth is enabled",
            ));
        }
        Ok(())
    }

    /// Looks up a user by exact credential match.
    pub fn find_user(&self, username: &str, password: &str) -> Option<&UserEntry> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password == password)
    }
}
