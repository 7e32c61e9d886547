use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::auth::claims::{ClaimRequest, IdentityClaim};
use crate::errors::ErrorCode;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// Sign `request` into an access token valid for `security.token_ttl` from `now`.
///
/// Stateless: nothing is stored server side.
pub fn issue_token(
    request: &ClaimRequest,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<String, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal(ErrorCode::Internal, "System clock before unix epoch"))?
        .as_secs() as i64;

    let exp = iat + security.token_ttl.as_secs() as i64;

    let claims = IdentityClaim {
        email: request.email.clone(),
        iat,
        exp,
        extra: request.extra_claims(),
    };

    encode(
        &Header::new(security.algorithm),
        &claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(ErrorCode::Internal, format!("Failed to encode JWT: {e}")))
}

/// Verify signature, structure and expiry, returning the embedded claim.
///
/// Every failure collapses into `AppError::ForbiddenInvalidToken`; the
/// underlying reason is only logged.
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<IdentityClaim, AppError> {
    // Default Validation requires and checks exp; algorithm pinned to config.
    // Caller extras may include an `aud`, which is carried, not enforced.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_aud = false;

    decode::<IdentityClaim>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| {
        let reason = match e.kind() {
            ErrorKind::ExpiredSignature => "token_expired",
            ErrorKind::InvalidSignature => "invalid_signature",
            _ => "invalid_token",
        };
        debug!(reason, "access token rejected");
        AppError::forbidden_invalid_token()
    })
}
