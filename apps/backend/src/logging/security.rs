//! Security-relevant events, emitted with a stable `event` field.

use tracing::warn;

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A gated request arrived without an Authorization header.
pub fn missing_auth_header(path: &str) {
    warn!(
        event = "SECURITY_AUTH_HEADER_MISSING",
        trace_id = %trace_ctx::trace_id(),
        path,
        "Unauthorized access"
    );
}

/// A presented token failed verification.
pub fn token_rejected(path: &str) {
    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        trace_id = %trace_ctx::trace_id(),
        path,
        "Forbidden access: token rejected"
    );
}

/// A verified identity asked for another owner's records.
pub fn owner_mismatch(requested: &str, claimed: &str) {
    warn!(
        event = "SECURITY_OWNER_MISMATCH",
        trace_id = %trace_ctx::trace_id(),
        requested = %Redacted(requested),
        claimed = %Redacted(claimed),
        "Forbidden access: owner mismatch"
    );
}
