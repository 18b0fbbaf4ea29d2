//! The persistent session store.
//!
//! The browser original kept the bearer token under a single localStorage
//! key and mutated it from several call sites. Here the session is an
//! explicit object: [`Session::login`] and [`Session::logout`] are the only
//! mutators, and [`Session::verify_with`] is the single invalidation path —
//! any failure to resolve the token to a profile logs the session out.

use std::fs;
use std::path::{Path, PathBuf};

use qv_core::Profile;

use crate::error::ClientResult;

/// Environment variable overriding the token file location.
pub const TOKEN_FILE_ENV: &str = "QUESTVAULT_TOKEN_FILE";

/// Holds the bearer token and its on-disk location.
#[derive(Debug)]
pub struct Session {
    path: PathBuf,
    token: Option<String>,
}

impl Session {
    /// Load the session from the default token file location:
    /// `$QUESTVAULT_TOKEN_FILE`, else `~/.config/questvault/token`.
    pub fn load_default() -> Self {
        Self::load(default_token_path())
    }

    /// Load the session from a specific token file. A missing or unreadable
    /// file simply means logged out.
    pub fn load(path: PathBuf) -> Self {
        let token = fs::read_to_string(&path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self { path, token }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a token is present. Presence does not imply validity; see
    /// [`Session::verify_with`].
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Where the token is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Store a new token, replacing any existing one.
    pub fn login(&mut self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        self.token = Some(token.to_string());
        Ok(())
    }

    /// Remove the token from memory and disk.
    pub fn logout(&mut self) -> ClientResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        self.token = None;
        Ok(())
    }

    /// Resolve the token to a profile through `fetch`. Any fetch failure
    /// invalidates the session (the token is discarded and the user is
    /// treated as logged out); the failure itself is logged, not surfaced.
    pub fn verify_with<F>(&mut self, fetch: F) -> ClientResult<Option<Profile>>
    where
        F: FnOnce(&str) -> ClientResult<Profile>,
    {
        let Some(token) = self.token.clone() else {
            return Ok(None);
        };
        match fetch(&token) {
            Ok(profile) => Ok(Some(profile)),
            Err(err) => {
                tracing::warn!(error = %err, "profile verification failed, invalidating session");
                self.logout()?;
                Ok(None)
            }
        }
    }
}

/// Default token file path.
fn default_token_path() -> PathBuf {
    if let Some(path) = std::env::var_os(TOKEN_FILE_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var_os("HOME").map(PathBuf::from).unwrap_or_default();
    home.join(".config").join("questvault").join("token")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use qv_core::ProfileStats;
    use tempfile::TempDir;

    fn profile() -> Profile {
        Profile {
            username: "veteran".to_string(),
            display_name: None,
            level: 2,
            stats: ProfileStats::default(),
            recent_achievements: Vec::new(),
            dimension_stats: Vec::new(),
            quests: Vec::new(),
            achievements: Vec::new(),
        }
    }

    #[test]
    fn missing_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        let session = Session::load(dir.path().join("token"));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn login_persists_and_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("token");

        let mut session = Session::load(path.clone());
        session.login("abc123").unwrap();
        assert!(session.is_authenticated());

        let reloaded = Session::load(path);
        assert_eq!(reloaded.token(), Some("abc123"));
    }

    #[test]
    fn logout_removes_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");

        let mut session = Session::load(path.clone());
        session.login("abc123").unwrap();
        session.logout().unwrap();

        assert!(!session.is_authenticated());
        assert!(!path.exists());
        assert!(!Session::load(path).is_authenticated());
    }

    #[test]
    fn stored_token_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "  abc123\n").unwrap();

        let session = Session::load(path);
        assert_eq!(session.token(), Some("abc123"));
    }

    #[test]
    fn blank_token_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        fs::write(&path, "\n").unwrap();

        assert!(!Session::load(path).is_authenticated());
    }

    #[test]
    fn verify_with_returns_profile_on_success() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::load(dir.path().join("token"));
        session.login("abc123").unwrap();

        let result = session
            .verify_with(|token| {
                assert_eq!(token, "abc123");
                Ok(profile())
            })
            .unwrap();
        assert_eq!(result.unwrap().username, "veteran");
        assert!(session.is_authenticated());
    }

    #[test]
    fn verify_failure_invalidates_session() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token");
        let mut session = Session::load(path.clone());
        session.login("stale").unwrap();

        let result = session
            .verify_with(|_| {
                Err(ClientError::Api {
                    status: 401,
                    message: "Could not validate credentials".to_string(),
                })
            })
            .unwrap();

        assert!(result.is_none());
        assert!(!session.is_authenticated());
        assert!(!path.exists());
    }

    #[test]
    fn verify_without_token_is_a_no_op() {
        let dir = TempDir::new().unwrap();
        let mut session = Session::load(dir.path().join("token"));

        let result = session
            .verify_with(|_| panic!("fetch must not run without a token"))
            .unwrap();
        assert!(result.is_none());
    }
}
