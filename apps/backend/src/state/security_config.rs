use std::fmt;
use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Lifetime of every access token.
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Token signing settings, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// Signing algorithm (HS256)
    pub algorithm: Algorithm,
    pub token_ttl: Duration,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: ACCESS_TOKEN_TTL,
        }
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}

// Keep the secret out of logs
impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
