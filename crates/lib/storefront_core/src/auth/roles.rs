//! Role extraction from decoded claims.

use std::collections::BTreeSet;

use serde_json::Value;

use super::claims::{Claims, ROLE_CLAIM_KEYS};

/// Normalized role names.
pub type Roles = BTreeSet<String>;

/// Role names that grant access to the admin panels. Matched exactly.
pub const ADMIN_ROLES: [&str; 2] = ["ADMIN", "ROLE_ADMIN"];

/// Collect roles from every role-bearing claim.
///
/// Each claim may be a single string, an array of strings, or an array of
/// `{"authority": "..."}` objects. Anything else contributes nothing.
pub fn roles_from_claims(claims: &Claims) -> Roles {
    let mut roles = Roles::new();
    for key in ROLE_CLAIM_KEYS {
        if let Some(value) = claims.get(key) {
            collect(value, &mut roles);
        }
    }
    roles
}

fn collect(value: &Value, roles: &mut Roles) {
    match value {
        Value::String(name) => {
            roles.insert(name.clone());
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::String(name) => {
                        roles.insert(name.clone());
                    }
                    Value::Object(entry) => {
                        if let Some(Value::String(name)) = entry.get("authority") {
                            roles.insert(name.clone());
                        }
                    }
                    _ => {}
                }
            }
        }
        _ => {}
    }
}

/// True iff the set holds one of [`ADMIN_ROLES`].
pub fn is_admin_role_set(roles: &Roles) -> bool {
    ADMIN_ROLES.iter().any(|r| roles.contains(*r))
}
