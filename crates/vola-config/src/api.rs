//! Backend API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL every API path is appended to (e.g. `https://api.example.org`).
    #[serde(default)]
    pub base_url: String,
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    /// Check that a configured base URL is an absolute http(s) URL.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Ok(());
        }
        let base = self.normalized_base_url();
        let Some((scheme, rest)) = base.split_once("://") else {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("'{base}' is not an absolute URL"),
            });
        };
        if !matches!(scheme, "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: format!("unsupported scheme '{scheme}'"),
            });
        }
        if rest.split('/').next().is_none_or(str::is_empty) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url",
                reason: "missing host".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!ApiConfig::default().is_configured());
        assert!(ApiConfig::default().validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_dropped() {
        let config = ApiConfig {
            base_url: "https://api.example.org/ ".into(),
        };
        assert_eq!(config.normalized_base_url(), "https://api.example.org");
    }

    #[test]
    fn rejects_relative_url() {
        let config = ApiConfig {
            base_url: "api.example.org".into(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_missing_host() {
        let config = ApiConfig {
            base_url: "https:///plan".into(),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_http_scheme() {
        let config = ApiConfig {
            base_url: "ftp://api.example.org".into(),
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }
}
