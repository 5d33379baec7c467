//! Unverified decoding of the session credential's payload.
//!
//! The payload is read without checking the signature. The result only picks
//! which screen to show; it is never an authorization proof. The backend
//! verifies the credential on every request.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use vola_core::{Role, SessionIdentity};

/// Fields read from the credential payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Claims {
    /// `role` claim; `None` when missing, empty, or not a string.
    pub role: Option<Role>,
    /// `sub` claim, falling back to `id`.
    pub subject: Option<String>,
    pub email: Option<String>,
    /// `exp` claim as a timestamp.
    pub expires_at: Option<DateTime<Utc>>,
    /// The full payload object.
    pub extra: Map<String, Value>,
}

impl Claims {
    #[must_use]
    pub fn to_identity(&self) -> SessionIdentity {
        SessionIdentity {
            role: self.role.clone(),
            subject: self.subject.clone(),
            email: self.email.clone(),
            expires_at: self.expires_at,
        }
    }

    fn from_payload(extra: Map<String, Value>) -> Self {
        let text = |key: &str| {
            extra.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        let role = text("role").map(Role::from);
        let subject = text("sub").or_else(|| text("id"));
        let email = text("email");
        let expires_at = extra
            .get("exp")
            .and_then(Value::as_i64)
            .and_then(|exp| DateTime::from_timestamp(exp, 0));

        Self {
            role,
            subject,
            email,
            expires_at,
            extra,
        }
    }
}

/// Decode the payload segment of a `header.payload.signature` credential.
///
/// Returns `None` for a wrong segment count, a payload that is not base64, or
/// a payload that is not a JSON object. Never panics.
#[must_use]
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let bytes = decode_segment(payload)?;
    let object: Map<String, Value> = serde_json::from_slice(&bytes).ok()?;
    Some(Claims::from_payload(object))
}

/// Role claim of a credential, or `None` on any decode failure.
#[must_use]
pub fn role_of(token: &str) -> Option<Role> {
    decode(token).and_then(|claims| claims.role)
}

// JWTs use unpadded base64url, but older issuers pad or use the standard alphabet.
fn decode_segment(segment: &str) -> Option<Vec<u8>> {
    if segment.is_empty() {
        return None;
    }
    [URL_SAFE_NO_PAD, URL_SAFE, STANDARD_NO_PAD, STANDARD]
        .iter()
        .find_map(|engine| engine.decode(segment).ok())
}
