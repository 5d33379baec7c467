//! Persisted session cookie.
//!
//! The bearer credential is stored as a cookie-shaped record: value, expiry,
//! and the transport attributes the dashboard sets (secure, `SameSite`, path).
//! Reads are synchronous, so a credential written by a login is visible to
//! the very next read in the same process.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use vola_core::SameSite;

use crate::error::AuthError;
use crate::jar::{CookieJar, MemoryJar};

/// Attributes applied to every cookie the store writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookiePolicy {
    pub name: String,
    pub path: String,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for CookiePolicy {
    fn default() -> Self {
        Self {
            name: "token".into(),
            path: "/".into(),
            secure: true,
            same_site: SameSite::Strict,
        }
    }
}

/// The stored record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub expires_at: DateTime<Utc>,
    pub path: String,
    pub secure: bool,
    pub same_site: SameSite,
}

impl SessionCookie {
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Reads and writes the session credential through a [`CookieJar`].
pub struct TokenStore {
    jar: Box<dyn CookieJar>,
    policy: CookiePolicy,
}

impl TokenStore {
    #[must_use]
    pub fn new(jar: impl CookieJar + 'static, policy: CookiePolicy) -> Self {
        Self {
            jar: Box::new(jar),
            policy,
        }
    }

    /// Store backed by process memory with the default policy.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryJar::new(), CookiePolicy::default())
    }

    #[must_use]
    pub const fn policy(&self) -> &CookiePolicy {
        &self.policy
    }

    /// Persist `token` until `now + ttl_days`, replacing any previous credential.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` for an empty token or zero TTL, and
    /// propagates backend write failures.
    pub fn set(&self, token: &str, ttl_days: u32) -> Result<(), AuthError> {
        if token.trim().is_empty() {
            return Err(AuthError::TokenStoreError(
                "refusing to store an empty credential".into(),
            ));
        }
        if ttl_days == 0 {
            return Err(AuthError::TokenStoreError(
                "session retention must be at least one day".into(),
            ));
        }
        let expires_at = Utc::now() + TimeDelta::days(i64::from(ttl_days));
        self.write_cookie(&SessionCookie {
            name: self.policy.name.clone(),
            value: token.to_string(),
            expires_at,
            path: self.policy.path.clone(),
            secure: self.policy.secure,
            same_site: self.policy.same_site,
        })
    }

    /// Current credential, or `None` if absent, expired, or unreadable.
    #[must_use]
    pub fn get(&self) -> Option<String> {
        self.cookie().map(|cookie| cookie.value)
    }

    /// Current cookie record with its attributes, subject to the same rules as [`Self::get`].
    #[must_use]
    pub fn cookie(&self) -> Option<SessionCookie> {
        let raw = match self.jar.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(error) => {
                tracing::warn!(%error, "session store unreadable; treating as signed out");
                return None;
            }
        };

        let cookie: SessionCookie = match serde_json::from_str(&raw) {
            Ok(cookie) => cookie,
            Err(error) => {
                tracing::warn!(%error, "session record is malformed; ignoring it");
                return None;
            }
        };

        if cookie.name != self.policy.name || cookie.value.trim().is_empty() {
            return None;
        }

        if cookie.is_expired_at(Utc::now()) {
            tracing::debug!(expires_at = %cookie.expires_at, "session cookie expired");
            if let Err(error) = self.jar.remove() {
                tracing::warn!(%error, "failed to remove expired session cookie");
            }
            return None;
        }

        Some(cookie)
    }

    /// Remove the credential. Clearing an absent credential is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates backend delete failures.
    pub fn clear(&self) -> Result<(), AuthError> {
        self.jar.remove()
    }

    /// Backend currently holding a live credential (for status display).
    #[must_use]
    pub fn source(&self) -> Option<&'static str> {
        self.cookie().and_then(|_| self.jar.locate())
    }

    fn write_cookie(&self, cookie: &SessionCookie) -> Result<(), AuthError> {
        let record = serde_json::to_string(cookie)
            .map_err(|e| AuthError::TokenStoreError(format!("serialize session cookie: {e}")))?;
        self.jar.write(&record)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::jar::FileJar;

    #[test]
    fn set_then_get_returns_token() {
        let store = TokenStore::in_memory();
        store.set("a.b.c", 7).unwrap();
        assert_eq!(store.get().as_deref(), Some("a.b.c"));
    }

    #[test]
    fn cookie_carries_policy_attributes_and_ttl() {
        let store = TokenStore::in_memory();
        let before = Utc::now();
        store.set("a.b.c", 7).unwrap();
        let cookie = store.cookie().expect("cookie stored");

        assert_eq!(cookie.name, "token");
        assert_eq!(cookie.path, "/");
        assert!(cookie.secure);
        assert_eq!(cookie.same_site, SameSite::Strict);
        let ttl = cookie.expires_at - before;
        assert!(ttl >= TimeDelta::days(7) && ttl < TimeDelta::days(7) + TimeDelta::minutes(1));
    }

    #[test]
    fn new_login_replaces_previous_token() {
        let store = TokenStore::in_memory();
        store.set("old.t.k", 7).unwrap();
        store.set("new.t.k", 7).unwrap();
        assert_eq!(store.get().as_deref(), Some("new.t.k"));
    }

    #[test]
    fn expired_cookie_reads_as_absent_and_is_removed() {
        let store = TokenStore::in_memory();
        store
            .write_cookie(&SessionCookie {
                name: "token".into(),
                value: "a.b.c".into(),
                expires_at: Utc::now() - TimeDelta::seconds(1),
                path: "/".into(),
                secure: true,
                same_site: SameSite::Strict,
            })
            .unwrap();

        assert_eq!(store.get(), None);
        assert_eq!(store.jar.read().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = TokenStore::in_memory();
        store.clear().unwrap();
        store.set("a.b.c", 1).unwrap();
        store.clear().unwrap();
        assert_eq!(store.get(), None);
        store.clear().unwrap();
    }

    #[test]
    fn rejects_empty_token_and_zero_ttl() {
        let store = TokenStore::in_memory();
        assert!(store.set("  ", 7).is_err());
        assert!(store.set("a.b.c", 0).is_err());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn malformed_record_reads_as_absent() {
        let jar = MemoryJar::new();
        jar.write("not json").unwrap();
        let store = TokenStore::new(jar, CookiePolicy::default());
        assert_eq!(store.get(), None);
    }

    #[test]
    fn record_for_another_cookie_name_is_ignored() {
        let store = TokenStore::in_memory();
        store.set("a.b.c", 7).unwrap();
        let renamed = TokenStore {
            jar: Box::new(MemoryJar::new()),
            policy: CookiePolicy {
                name: "other".into(),
                ..CookiePolicy::default()
            },
        };
        renamed
            .jar
            .write(&store.jar.read().unwrap().unwrap())
            .unwrap();
        assert_eq!(renamed.get(), None);
    }

    #[test]
    fn file_backed_store_survives_reopen() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("session.json");

        TokenStore::new(FileJar::new(&path), CookiePolicy::default())
            .set("persisted.t.k", 7)
            .unwrap();

        let reopened = TokenStore::new(FileJar::new(&path), CookiePolicy::default());
        assert_eq!(reopened.get().as_deref(), Some("persisted.t.k"));
        assert_eq!(reopened.source(), Some("file"));
    }
}
