//! Cross-cutting error types for Vola.
//!
//! Domain-specific errors (`ConfigError`, `AuthError`, `ApiError`) live in
//! their own crates. They converge into `anyhow` in `vola-cli`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A request payload failed validation before being sent.
    #[error("Validation error: {0}")]
    Validation(String),
}
