//! Session state: where the bearer tokens live and what they say.
//!
//! A [`Session`] is handed to whatever issues API calls instead of being
//! read from ambient storage, so tests can run against
//! [`MemoryTokenStore`] and the CLI against [`FileTokenStore`].

mod file;
mod memory;

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::{self, Claims, Roles};

pub use file::{FileTokenStore, default_session_path};
pub use memory::MemoryTokenStore;

/// Session storage errors.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("session file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The two persisted credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Access,
    Refresh,
}

impl TokenKind {
    /// Storage key, shared with the browser client's `localStorage` layout.
    pub fn key(self) -> &'static str {
        match self {
            TokenKind::Access => "accessToken",
            TokenKind::Refresh => "refreshToken",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Persistent key/value storage for the session tokens.
pub trait TokenStore: Send + Sync + fmt::Debug {
    /// Stored token, if any. Read failures read as absent.
    fn get(&self, kind: TokenKind) -> Option<String>;

    fn set(&self, kind: TokenKind, token: &str) -> Result<(), SessionError>;

    fn remove(&self, kind: TokenKind) -> Result<(), SessionError>;
}

/// Explicit session context shared by the API client and its callers.
#[derive(Clone, Debug)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Session backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryTokenStore::default())
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(TokenKind::Access).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(TokenKind::Refresh).filter(|t| !t.is_empty())
    }

    /// Persist a login or refresh result.
    ///
    /// The refresh token is only overwritten when a new one is supplied.
    pub fn set_tokens(&self, access: &str, refresh: Option<&str>) -> Result<(), SessionError> {
        self.store.set(TokenKind::Access, access)?;
        if let Some(refresh) = refresh.filter(|r| !r.is_empty()) {
            self.store.set(TokenKind::Refresh, refresh)?;
        }
        Ok(())
    }

    /// Forget both tokens. The refresh token is removed even if removing
    /// the access token failed.
    pub fn clear(&self) -> Result<(), SessionError> {
        let access = self.store.remove(TokenKind::Access);
        let refresh = self.store.remove(TokenKind::Refresh);
        access.and(refresh)
    }

    /// True iff an access token is stored. Shape and expiry are not checked.
    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Decoded access-token claims, or `None` when absent or undecodable.
    pub fn claims(&self) -> Option<Claims> {
        self.access_token().and_then(|t| auth::decode_claims(&t))
    }

    /// Roles carried by the access token. Empty when anything goes wrong.
    pub fn roles(&self) -> Roles {
        self.claims()
            .map(|c| auth::roles_from_claims(&c))
            .unwrap_or_default()
    }

    pub fn is_admin(&self) -> bool {
        auth::is_admin_role_set(&self.roles())
    }
}

#[cfg(test)]
mod tests {
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use super::*;

    fn token(payload: &str) -> String {
        format!("eyJhbGciOiJIUzI1NiJ9.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn empty_session_is_anonymous() {
        let session = Session::in_memory();
        assert!(!session.is_authenticated());
        assert!(session.roles().is_empty());
        assert!(!session.is_admin());
    }

    #[test]
    fn any_stored_token_counts_as_authenticated() {
        let session = Session::in_memory();
        session.set_tokens("garbage", None).expect("set");
        assert!(session.is_authenticated());
        assert!(session.roles().is_empty());
        assert!(!session.is_admin());
    }

    #[test]
    fn empty_access_token_is_not_authenticated() {
        let session = Session::in_memory();
        session.set_tokens("", None).expect("set");
        assert!(!session.is_authenticated());
    }

    #[test]
    fn malformed_tokens_never_grant_admin() {
        let session = Session::in_memory();
        let bad_tokens = vec![
            "a.b".to_string(),
            "a.b.c.d".to_string(),
            "h.%%%.s".to_string(),
            format!("h.{}.s", URL_SAFE_NO_PAD.encode("nope")),
            format!("h.{}", URL_SAFE_NO_PAD.encode(r#"{"role":"ADMIN"}"#)),
        ];
        for bad in &bad_tokens {
            session.set_tokens(bad, None).expect("set");
            assert!(session.roles().is_empty(), "roles for {bad}");
            assert!(!session.is_admin(), "admin for {bad}");
        }
    }

    #[test]
    fn admin_from_single_role_string() {
        let session = Session::in_memory();
        session
            .set_tokens(&token(r#"{"role":"ADMIN"}"#), None)
            .expect("set");
        assert!(session.is_admin());
    }

    #[test]
    fn admin_from_roles_array() {
        let session = Session::in_memory();
        session
            .set_tokens(&token(r#"{"roles":["ROLE_USER","ROLE_ADMIN"]}"#), None)
            .expect("set");
        assert!(session.is_admin());
        assert_eq!(session.roles().len(), 2);
    }

    #[test]
    fn plain_user_is_not_admin() {
        let session = Session::in_memory();
        session
            .set_tokens(&token(r#"{"roles":["ROLE_USER"]}"#), None)
            .expect("set");
        assert!(session.is_authenticated());
        assert!(!session.is_admin());
    }

    #[test]
    fn set_tokens_keeps_refresh_when_none_given() {
        let session = Session::in_memory();
        session.set_tokens("a1", Some("r1")).expect("set");
        session.set_tokens("a2", None).expect("set");
        assert_eq!(session.access_token().as_deref(), Some("a2"));
        assert_eq!(session.refresh_token().as_deref(), Some("r1"));
    }

    #[test]
    fn clear_removes_both_tokens() {
        let session = Session::in_memory();
        session.set_tokens("a", Some("r")).expect("set");
        session.clear().expect("clear");
        assert!(session.access_token().is_none());
        assert!(session.refresh_token().is_none());
    }

    #[test]
    fn clones_share_the_store() {
        let session = Session::in_memory();
        let other = session.clone();
        session.set_tokens("a", None).expect("set");
        assert!(other.is_authenticated());
    }
}
