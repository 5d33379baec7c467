//! Session cookie persistence configuration.

use serde::{Deserialize, Serialize};
use vola_core::SameSite;

fn default_cookie_name() -> String {
    "token".into()
}

const fn default_ttl_days() -> u32 {
    7
}

const fn default_secure() -> bool {
    true
}

fn default_path() -> String {
    "/".into()
}

fn default_keyring_service() -> String {
    "vola-admin".into()
}

/// Where the session cookie record is persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// OS keychain, falling back to the credentials file.
    #[default]
    Auto,
    Keyring,
    File,
    /// Process memory only; the session ends with the command.
    Memory,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Retention window of a new credential, in days.
    #[serde(default = "default_ttl_days")]
    pub ttl_days: u32,

    /// Only send the credential over secure transport.
    #[serde(default = "default_secure")]
    pub secure: bool,

    #[serde(default)]
    pub same_site: SameSite,

    #[serde(default = "default_path")]
    pub path: String,

    #[serde(default)]
    pub store: StoreBackend,

    #[serde(default = "default_keyring_service")]
    pub keyring_service: String,

    /// Override for the credentials file. Empty means `~/.vola/session.json`.
    #[serde(default)]
    pub file_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            ttl_days: default_ttl_days(),
            secure: default_secure(),
            same_site: SameSite::default(),
            path: default_path(),
            store: StoreBackend::default(),
            keyring_service: default_keyring_service(),
            file_path: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_cookie() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "token");
        assert_eq!(config.ttl_days, 7);
        assert!(config.secure);
        assert_eq!(config.same_site, SameSite::Strict);
        assert_eq!(config.path, "/");
        assert_eq!(config.store, StoreBackend::Auto);
    }
}
