// ⚙️ Configuration - optional TOML file, defaults, environment overrides
//
// Precedence: environment > file > defaults.
//
//   [server]
//   bind = "0.0.0.0:3000"
//
//   [app]
//   name = "value-formats"
//   commit = "abc123"
//   latest_version = "0.2.0"
//
//   [display]
//   decimals = 2

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::numeric::{DecimalCount, MAX_DECIMALS};

/// Overrides `server.bind`
pub const ENV_BIND: &str = "VALUE_FORMATS_BIND";
/// Overrides `app.commit`
pub const ENV_COMMIT: &str = "VALUE_FORMATS_COMMIT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            bind: "0.0.0.0:3000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppInfoConfig {
    pub name: String,
    pub commit: String,
    pub latest_version: Option<String>,
}

impl Default for AppInfoConfig {
    fn default() -> Self {
        AppInfoConfig {
            name: env!("CARGO_PKG_NAME").to_string(),
            commit: "unknown".to_string(),
            latest_version: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Decimals used when a request does not specify any;
    /// unset means derive them from the value
    pub decimals: DecimalCount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub app: AppInfoConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Parse a TOML document; missing sections fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given (the file must exist), then apply
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                tracing::info!(path = %path.display(), "loaded configuration");
                Self::from_toml(&text)?
            }
            None => AppConfig::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.trim().is_empty()) {
            tracing::debug!(bind = %bind, "bind address overridden from environment");
            self.server.bind = bind;
        }
        if let Some(commit) = lookup(ENV_COMMIT).filter(|v| !v.trim().is_empty()) {
            self.app.commit = commit;
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server.bind.trim().is_empty() {
            return Err(Error::Config("server.bind must not be empty".to_string()));
        }
        if let Some(decimals) = self.display.decimals {
            if !(0..=MAX_DECIMALS).contains(&decimals) {
                return Err(Error::Config(format!(
                    "display.decimals must be between 0 and {}, got {}",
                    MAX_DECIMALS, decimals
                )));
            }
        }
        Ok(())
    }
}
