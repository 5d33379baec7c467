//! # vola-config
//!
//! Layered configuration loading for the Vola admin console using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VOLA_*` prefix, `__` as separator)
//! 2. Project-level `.vola/config.toml`
//! 3. User-level `~/.config/vola/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VOLA_API__BASE_URL` -> `api.base_url`, `VOLA_SESSION__TTL_DAYS`
//! -> `session.ttl_days`, etc. The `__` (double underscore) separates nested
//! config sections.
//!
//! # Usage
//!
//! ```no_run
//! use vola_config::VolaConfig;
//!
//! # fn main() -> Result<(), vola_config::ConfigError> {
//! let config = VolaConfig::load()?;
//! println!("API: {}", config.require_base_url()?);
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod general;
mod session;
mod stats;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::{SessionConfig, StoreBackend};
pub use stats::StatsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VolaConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub stats: StatsConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl VolaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// `.env` files are not read here; the binary loads them before calling this.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".vola/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VOLA_").split("__"))
    }

    /// Reject values that would make the session or API layer misbehave.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        if self.session.ttl_days == 0 {
            return Err(ConfigError::InvalidValue {
                field: "session.ttl_days",
                reason: "must be at least 1 day".into(),
            });
        }
        if self.session.cookie_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "session.cookie_name",
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// The API base URL, or `MissingBaseUrl` when it was never set.
    pub fn require_base_url(&self) -> Result<&str, ConfigError> {
        if self.api.is_configured() {
            Ok(self.api.normalized_base_url())
        } else {
            Err(ConfigError::MissingBaseUrl)
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("vola").join("config.toml"))
    }
}
