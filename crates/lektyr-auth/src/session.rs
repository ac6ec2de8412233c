//! Client-side session: the stored token plus its expiry.
//!
//! The session record (token, display name, expiry instant) is persisted
//! as a small JSON file under the user's config directory so it survives
//! between invocations.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::AuthError;

/// Expiry applied when a login response carries no `expiresIn` (1 hour).
pub const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// A logged-in session: bearer token, display name, and expiry instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The bearer token presented on every request.
    pub token: String,
    /// Display name returned by the login endpoint.
    pub full_name: String,
    /// Instant after which the token is no longer usable.
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Builds a session from a login response.
    ///
    /// `expires_in` is in seconds; `None` falls back to
    /// [`DEFAULT_EXPIRES_IN_SECS`].
    pub fn from_login(
        token: impl Into<String>,
        full_name: impl Into<String>,
        expires_in: Option<u64>,
    ) -> Self {
        let secs = expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        Self {
            token: token.into(),
            full_name: full_name.into(),
            expires_at: Utc::now() + Duration::seconds(secs as i64),
        }
    }

    /// Whether the session has lapsed (now at or past the expiry instant).
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Persistent storage for the current session.
///
/// Loading an expired session clears it on the spot, which is the
/// auto-logout: after that the caller sees no session and must log in.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// A session file at the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the session is stored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the current session.
    ///
    /// Missing file or expired session yield `None`; an expired session
    /// is also removed from disk.
    pub fn load(&self) -> Result<Option<Session>, AuthError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AuthError::SessionFile(e.to_string())),
        };

        let session: Session = serde_json::from_str(&content)
            .map_err(|e| AuthError::SessionFile(format!("corrupt session file: {e}")))?;

        if session.is_expired() {
            log::info!("Stored session expired, clearing authentication data");
            self.clear()?;
            return Ok(None);
        }

        Ok(Some(session))
    }

    /// Writes the session to disk, creating parent directories as needed.
    pub fn save(&self, session: &Session) -> Result<(), AuthError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AuthError::SessionFile(e.to_string()))?;
        }
        let json = serde_json::to_string_pretty(session)
            .map_err(|e| AuthError::SessionFile(e.to_string()))?;
        std::fs::write(&self.path, json).map_err(|e| AuthError::SessionFile(e.to_string()))
    }

    /// Removes the stored session; a missing file is fine.
    pub fn clear(&self) -> Result<(), AuthError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AuthError::SessionFile(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn session_file() -> (tempfile::TempDir, SessionFile) {
        let dir = tempfile::tempdir().unwrap();
        let file = SessionFile::new(dir.path().join("session.json"));
        (dir, file)
    }

    #[test]
    fn test_from_login_default_expiry() {
        let session = Session::from_login("tok", "Maria Svensson", None);
        let remaining = session.expires_at - Utc::now();
        assert!(remaining > Duration::seconds(3590));
        assert!(remaining <= Duration::seconds(3600));
        assert!(!session.is_expired());
    }

    #[test]
    fn test_expired_session_detected() {
        let mut session = Session::from_login("tok", "x", Some(60));
        session.expires_at = Utc::now() - Duration::seconds(1);
        assert!(session.is_expired());
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, file) = session_file();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let (_dir, file) = session_file();
        let session = Session::from_login("tok-123", "Maria Svensson", Some(600));
        file.save(&session).unwrap();
        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_loading_expired_session_clears_it() {
        let (_dir, file) = session_file();
        let mut session = Session::from_login("tok", "x", Some(600));
        session.expires_at = Utc::now() - Duration::seconds(5);
        file.save(&session).unwrap();

        assert!(file.load().unwrap().is_none());
        // The file itself is gone — the auto-logout
        assert!(!file.path().exists());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let (_dir, file) = session_file();
        file.clear().unwrap();
        file.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_file_is_an_error() {
        let (_dir, file) = session_file();
        std::fs::write(file.path(), b"{half a record").unwrap();
        assert!(file.load().is_err());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = Session::from_login("tok", "Maria Svensson", Some(60));
        let json = serde_json::to_value(&session).unwrap();
        assert!(json.get("fullName").is_some());
        assert!(json.get("expiresAt").is_some());
    }
}
