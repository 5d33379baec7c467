use thiserror::Error;

/// Failures of the session cookie store.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The OS keychain rejected the operation.
    #[error("keyring error: {0}")]
    KeyringError(String),

    /// The record could not be written, read from disk, or encoded.
    #[error("token store error: {0}")]
    TokenStoreError(String),
}
