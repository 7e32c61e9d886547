//! Identity claims carried inside access tokens.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Claim names the token service owns; callers cannot supply them.
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Decoded, verified identity. Inserted into request extensions by `AuthGate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaim {
    /// Owner identifier compared against inventory `email`
    pub email: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
    /// Any other fields the caller asked to embed, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body of `POST /createToken`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimRequest {
    #[serde(default)]
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ClaimRequest {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: Map::new(),
        }
    }

    /// Caller-supplied extras minus the reserved claim names.
    pub fn extra_claims(&self) -> Map<String, Value> {
        self.extra
            .iter()
            .filter(|(key, _)| !RESERVED_CLAIMS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }
}
