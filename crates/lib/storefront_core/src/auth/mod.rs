//! Token claims and role resolution.
//!
//! Access tokens are read, never verified: the payload segment is decoded
//! so the client can decide what to show, and the server remains the
//! authority on what the bearer may actually do.

pub mod claims;
pub mod roles;

pub use claims::{Claims, decode_claims};
pub use roles::{ADMIN_ROLES, Roles, is_admin_role_set, roles_from_claims};

use thiserror::Error;

/// Reasons a token payload could not be decoded.
///
/// These never leave the resolver; callers see an empty role set instead.
#[derive(Debug, Error)]
pub enum ClaimsError {
    #[error("token must have three segments, found {0}")]
    SegmentCount(usize),

    #[error("payload is not base64url: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("payload is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}
