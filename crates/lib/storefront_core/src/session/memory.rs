//! In-process token store.

use std::collections::HashMap;
use std::sync::Mutex;

use super::{SessionError, TokenKind, TokenStore};

/// Token store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<HashMap<TokenKind, String>>,
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, kind: TokenKind) -> Option<String> {
        self.tokens.lock().ok()?.get(&kind).cloned()
    }

    fn set(&self, kind: TokenKind, token: &str) -> Result<(), SessionError> {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.insert(kind, token.to_string());
        }
        Ok(())
    }

    fn remove(&self, kind: TokenKind) -> Result<(), SessionError> {
        if let Ok(mut tokens) = self.tokens.lock() {
            tokens.remove(&kind);
        }
        Ok(())
    }
}
