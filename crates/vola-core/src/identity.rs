use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// Lightweight signed-in identity for cross-crate passing.
///
/// Produced by `vola-auth` from decoded (unverified) claims, consumed by
/// `vola-cli` views. Data only; the backend remains the authorization
/// authority for every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIdentity {
    /// `role` claim. `None` when missing or not a string.
    pub role: Option<Role>,
    /// `sub` or `id` claim.
    pub subject: Option<String>,
    /// `email` claim.
    pub email: Option<String>,
    /// `exp` claim.
    pub expires_at: Option<DateTime<Utc>>,
}

impl SessionIdentity {
    #[must_use]
    pub fn is_dashboard_member(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_dashboard_member)
    }
}
