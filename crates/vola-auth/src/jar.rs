//! Storage backends for the serialized session cookie.
//!
//! A jar holds at most one opaque record. Expiry and cookie attributes are
//! interpreted by [`crate::token_store::TokenStore`], not here.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::AuthError;

const KEYRING_USER: &str = "session-cookie";
const SESSION_FILE_NAME: &str = "session.json";

/// Persistence for a single session-cookie record.
pub trait CookieJar: Send + Sync {
    /// Short backend name shown by `vola auth status`.
    fn label(&self) -> &'static str;

    /// Read the stored record. `Ok(None)` when nothing is stored.
    fn read(&self) -> Result<Option<String>, AuthError>;

    /// Replace the stored record.
    fn write(&self, record: &str) -> Result<(), AuthError>;

    /// Remove the stored record. Removing an absent record is not an error.
    fn remove(&self) -> Result<(), AuthError>;

    /// Which backend currently holds a record, if any.
    fn locate(&self) -> Option<&'static str> {
        match self.read() {
            Ok(Some(_)) => Some(self.label()),
            _ => None,
        }
    }
}

// --- Keyring ---

/// OS keychain entry.
pub struct KeyringJar {
    service: String,
}

impl KeyringJar {
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, AuthError> {
        keyring::Entry::new(&self.service, KEYRING_USER)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }
}

impl CookieJar for KeyringJar {
    fn label(&self) -> &'static str {
        "keyring"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        match self.entry()?.get_password() {
            Ok(record) if record.trim().is_empty() => Ok(None),
            Ok(record) => Ok(Some(record)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }

    fn write(&self, record: &str) -> Result<(), AuthError> {
        self.entry()?
            .set_password(record)
            .map_err(|e| AuthError::KeyringError(e.to_string()))
    }

    fn remove(&self) -> Result<(), AuthError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(AuthError::KeyringError(e.to_string())),
        }
    }
}

// --- File ---

/// Owner-only JSON file, `~/.vola/session.json` by default.
pub struct FileJar {
    path: PathBuf,
}

impl FileJar {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File jar at the default location under the home directory.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::TokenStoreError` if the home directory is unknown.
    pub fn at_default_location() -> Result<Self, AuthError> {
        default_session_path().map(Self::new)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `~/.vola/session.json`.
///
/// # Errors
///
/// Returns `AuthError::TokenStoreError` if the home directory is unknown.
pub fn default_session_path() -> Result<PathBuf, AuthError> {
    dirs::home_dir()
        .map(|h| h.join(".vola").join(SESSION_FILE_NAME))
        .ok_or_else(|| {
            AuthError::TokenStoreError("home directory not found: cannot store session".into())
        })
}

impl CookieJar for FileJar {
    fn label(&self) -> &'static str {
        "file"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AuthError::TokenStoreError(format!(
                "read {}: {e}",
                self.path.display()
            ))),
        }
    }

    fn write(&self, record: &str) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AuthError::TokenStoreError(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }
        fs::write(&self.path, record).map_err(|e| {
            AuthError::TokenStoreError(format!("write {}: {e}", self.path.display()))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                AuthError::TokenStoreError(format!("chmod {}: {e}", self.path.display()))
            })?;
        }

        Ok(())
    }

    fn remove(&self) -> Result<(), AuthError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::TokenStoreError(format!(
                "failed to delete {}: {e}",
                self.path.display()
            ))),
        }
    }
}

// --- Keyring with file fallback ---

/// Keyring first; the file takes over when the keyring is unavailable or does
/// not retain what was written.
pub struct FallbackJar<K = KeyringJar> {
    keyring: K,
    file: FileJar,
}

impl<K: CookieJar> FallbackJar<K> {
    #[must_use]
    pub const fn new(keyring: K, file: FileJar) -> Self {
        Self { keyring, file }
    }

    fn write_file(&self, record: &str) -> Result<(), AuthError> {
        // A keyring record left behind would shadow the file on the next read.
        if let Err(error) = self.keyring.remove() {
            tracing::debug!(%error, "keyring delete failed");
        }
        self.file.write(record)
    }
}

impl<K: CookieJar> CookieJar for FallbackJar<K> {
    fn label(&self) -> &'static str {
        "keyring+file"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        match self.keyring.read() {
            Ok(Some(record)) => return Ok(Some(record)),
            Ok(None) => {}
            Err(error) => tracing::debug!(%error, "keyring read failed; trying file"),
        }
        self.file.read()
    }

    fn write(&self, record: &str) -> Result<(), AuthError> {
        match self.keyring.write(record).and_then(|()| self.keyring.read()) {
            Ok(Some(stored)) if stored == record => {
                // An older file record must not resurface during a later keyring outage.
                if let Err(error) = self.file.remove() {
                    tracing::warn!(%error, "failed to remove stale session file");
                }
                Ok(())
            }
            Ok(_) => {
                tracing::warn!("keyring did not retain the session; falling back to file");
                self.write_file(record)
            }
            Err(error) => {
                tracing::warn!(%error, "keyring store failed; falling back to file");
                self.write_file(record)
            }
        }
    }

    fn remove(&self) -> Result<(), AuthError> {
        if let Err(error) = self.keyring.remove() {
            tracing::debug!(%error, "keyring delete failed");
        }
        self.file.remove()
    }

    fn locate(&self) -> Option<&'static str> {
        self.keyring.locate().or_else(|| self.file.locate())
    }
}

// --- Memory ---

/// Process-local jar. Sessions end with the process.
#[derive(Default)]
pub struct MemoryJar {
    slot: Mutex<Option<String>>,
}

impl MemoryJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> AuthError {
        AuthError::TokenStoreError("memory jar lock poisoned".into())
    }
}

impl CookieJar for MemoryJar {
    fn label(&self) -> &'static str {
        "memory"
    }

    fn read(&self) -> Result<Option<String>, AuthError> {
        let slot = self.slot.lock().map_err(|_| Self::poisoned())?;
        Ok(slot.clone())
    }

    fn write(&self, record: &str) -> Result<(), AuthError> {
        let mut slot = self.slot.lock().map_err(|_| Self::poisoned())?;
        *slot = Some(record.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), AuthError> {
        let mut slot = self.slot.lock().map_err(|_| Self::poisoned())?;
        *slot = None;
        Ok(())
    }
}
