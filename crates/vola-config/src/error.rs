//! Errors raised while loading and checking the console configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML layer or `VOLA_*` variable does not fit [`crate::VolaConfig`].
    #[error("failed to read vola configuration: {0}")]
    Load(#[from] figment::Error),

    #[error(
        "API base URL is not configured. Set VOLA_API__BASE_URL or [api] base_url in .vola/config.toml."
    )]
    MissingBaseUrl,

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
