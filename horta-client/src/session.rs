use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// An authenticated session: the bearer token plus the group name the login
/// endpoint reported. Passed explicitly to every client call; there is no
/// ambient token lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Canonical storage key is `access_token`; `token` is accepted on read
    /// for files written by older builds.
    #[serde(rename = "access_token", alias = "token")]
    pub token: String,

    #[serde(rename = "grupo_usuario", default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl Session {
    pub fn new(token: impl Into<String>, group: Option<String>) -> Self {
        Self {
            token: token.into(),
            group,
        }
    }

    /// The ADMIN group gates mutating controls on admin-managed screens.
    /// Comparison is case-insensitive, as the original frontend upper-cased
    /// the stored group before checking.
    pub fn is_admin(&self) -> bool {
        self.group
            .as_deref()
            .is_some_and(|g| g.eq_ignore_ascii_case("ADMIN"))
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file error: {0}")]
    Io(#[from] io::Error),

    #[error("session file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// File-backed session persistence, the stand-in for browser localStorage.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)?;
        info!("session saved to {}", self.path.display());
        Ok(())
    }

    /// A missing file is not an error: it just means nobody is logged in.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let session = Session::new("abc123", Some("ADMIN".to_string()));
        store.save(&session).unwrap();

        assert_eq!(store.load().unwrap(), Some(session));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).load().unwrap(), None);
    }

    #[test]
    fn clear_removes_the_file_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.save(&Session::new("abc", None)).unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
        store.clear().unwrap();
    }

    #[test]
    fn legacy_token_key_still_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, r#"{"token": "old-style", "grupo_usuario": "Visitante"}"#).unwrap();

        let session = SessionStore::new(&path).load().unwrap().unwrap();
        assert_eq!(session.token, "old-style");
        assert_eq!(session.group.as_deref(), Some("Visitante"));
    }

    #[test]
    fn saved_files_use_the_canonical_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(&path);

        store.save(&Session::new("abc", None)).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("access_token"));
        assert!(!raw.contains("\"token\""));
    }

    #[test]
    fn admin_check_ignores_case() {
        assert!(Session::new("t", Some("admin".to_string())).is_admin());
        assert!(Session::new("t", Some("ADMIN".to_string())).is_admin());
        assert!(!Session::new("t", Some("Visitante".to_string())).is_admin());
        assert!(!Session::new("t", None).is_admin());
    }
}
