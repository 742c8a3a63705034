//! Unverified JWT payload decoding.

use base64::Engine as _;
use base64::engine::general_purpose::{URL_SAFE, URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use super::ClaimsError;

/// Claim keys that may carry the user's roles, in lookup order.
pub const ROLE_CLAIM_KEYS: [&str; 3] = ["role", "roles", "authorities"];

/// Decoded access-token payload.
///
/// Holds the raw JSON object so that unexpected claim shapes degrade per
/// field instead of failing the whole payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Claims(Map<String, Value>);

impl Claims {
    /// Parse the payload segment of a three-part token.
    pub fn parse(token: &str) -> Result<Self, ClaimsError> {
        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(ClaimsError::SegmentCount(segments.len()));
        }

        // base64url without padding is the norm, but padded payloads exist in the wild.
        let payload = segments[1];
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| URL_SAFE.decode(payload))?;

        let object: Map<String, Value> = serde_json::from_slice(&bytes)?;
        Ok(Self(object))
    }

    /// Raw claim lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Subject claim (the account email on this backend).
    pub fn subject(&self) -> Option<&str> {
        self.0.get("sub").and_then(Value::as_str)
    }

    /// Numeric user id claim.
    pub fn user_id(&self) -> Option<i64> {
        self.0.get("id").and_then(Value::as_i64)
    }

    /// `exp` as a timestamp. Informational only; nothing enforces it.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("exp")
    }

    /// `iat` as a timestamp.
    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp("iat")
    }

    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        let secs = self.0.get(key).and_then(Value::as_i64)?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// Decode a token's claims, swallowing every failure.
///
/// A garbled token reads the same as no token at all; the reason is only
/// visible at `debug` level.
pub fn decode_claims(token: &str) -> Option<Claims> {
    match Claims::parse(token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            tracing::debug!(error = %e, "ignoring undecodable access token");
            None
        }
    }
}
