//! Token store persisted as a small JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{SessionError, TokenKind, TokenStore};

/// On-disk layout, keyed the same way the browser client keys `localStorage`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTokens {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
}

impl StoredTokens {
    fn slot(&mut self, kind: TokenKind) -> &mut Option<String> {
        match kind {
            TokenKind::Access => &mut self.access_token,
            TokenKind::Refresh => &mut self.refresh_token,
        }
    }
}

/// Token store backed by a JSON file, read and written on every call.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_session_path`].
    pub fn at_default_path() -> Self {
        Self::new(default_session_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents. A missing file is an empty session.
    fn load(&self) -> Result<StoredTokens, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(StoredTokens::default()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredTokens::default()),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, tokens: &StoredTokens) -> Result<(), SessionError> {
        if tokens.access_token.is_none() && tokens.refresh_token.is_none() {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(self.io_error(e)),
                _ => Ok(()),
            };
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let body = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.path, body).map_err(|e| self.io_error(e))?;
        restrict_permissions(&self.path);
        debug!(path = %self.path.display(), "session file written");
        Ok(())
    }

    fn update(
        &self,
        kind: TokenKind,
        value: Option<&str>,
    ) -> Result<(), SessionError> {
        // A corrupt file is replaced rather than blocking login/logout.
        let mut tokens = self.load().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
            StoredTokens::default()
        });
        *tokens.slot(kind) = value.map(str::to_string);
        self.save(&tokens)
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        match self.load() {
            Ok(mut tokens) => tokens.slot(kind).take(),
            Err(e) => {
                debug!(error = %e, "treating unreadable session file as empty");
                None
            }
        }
    }

    fn set(&self, kind: TokenKind, token: &str) -> Result<(), SessionError> {
        self.update(kind, Some(token))
    }

    fn remove(&self, kind: TokenKind) -> Result<(), SessionError> {
        self.update(kind, None)
    }
}

/// `{data_dir}/storefront/session.json`, or `./storefront/session.json`
/// when the platform has no data directory.
pub fn default_session_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("storefront")
        .join("session.json")
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) {}
