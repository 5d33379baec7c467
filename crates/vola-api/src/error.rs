use thiserror::Error;
use vola_auth::AuthError;

use crate::envelope::ErrorsField;

/// Every failure an API call can surface. Each variant renders as a single
/// user-facing message through `Display`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Base URL not found")]
    MissingBaseUrl,

    /// A bearer credential would have gone over plain http to a remote host.
    #[error("refusing to send credentials over insecure http to {host}")]
    InsecureTransport { host: String },

    /// Network failure: unreachable host, DNS, connection reset.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status with a message taken from the body. `detail`
    /// holds the body's `errors` when it reported any.
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
        detail: Option<ErrorsField>,
    },

    /// Success status, but the envelope carried business errors.
    #[error("{message}")]
    Envelope { detail: ErrorsField, message: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    /// The returned credential could not be persisted.
    #[error("failed to save session: {0}")]
    Session(#[from] AuthError),
}

impl ApiError {
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Every field or general error the backend reported, in order.
    #[must_use]
    pub fn field_messages(&self) -> Vec<String> {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            }
            | Self::Envelope { detail, .. } => detail.messages(),
            _ => Vec::new(),
        }
    }

    /// The normalized message shown to the user.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}
