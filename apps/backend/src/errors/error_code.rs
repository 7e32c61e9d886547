//! Error codes for the inventory API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in the `code` field of a Problem Details response.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// No Authorization header on a gated route
    Unauthorized,
    /// Token failed signature, structure or expiry checks
    ForbiddenInvalidToken,
    /// Path owner differs from the verified claim
    ForbiddenOwnerMismatch,

    // Request Validation
    /// Inventory id in the path is not a positive integer
    InvalidInventoryId,
    /// Malformed request body
    BadRequest,
    /// Well-formed body with unacceptable values
    ValidationError,

    // Resource Not Found
    /// No inventory record with the requested id
    InventoryNotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database not configured for this process
    DbUnavailable,
    /// Stored data could not be decoded
    DataCorruption,
    /// Configuration error
    ConfigError,
    /// Internal server error
    Internal,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::ForbiddenInvalidToken => "FORBIDDEN_INVALID_TOKEN",
            Self::ForbiddenOwnerMismatch => "FORBIDDEN_OWNER_MISMATCH",

            Self::InvalidInventoryId => "INVALID_INVENTORY_ID",
            Self::BadRequest => "BAD_REQUEST",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::InventoryNotFound => "INVENTORY_NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::Unauthorized.as_str(), "UNAUTHORIZED");
        assert_eq!(
            ErrorCode::ForbiddenInvalidToken.as_str(),
            "FORBIDDEN_INVALID_TOKEN"
        );
        assert_eq!(
            ErrorCode::ForbiddenOwnerMismatch.as_str(),
            "FORBIDDEN_OWNER_MISMATCH"
        );
        assert_eq!(ErrorCode::InvalidInventoryId.as_str(), "INVALID_INVENTORY_ID");
        assert_eq!(ErrorCode::InventoryNotFound.as_str(), "INVENTORY_NOT_FOUND");
        assert_eq!(ErrorCode::DbUnavailable.as_str(), "DB_UNAVAILABLE");
    }

    #[test]
    fn test_display_trait() {
        assert_eq!(format!("{}", ErrorCode::ValidationError), "VALIDATION_ERROR");
        assert_eq!(format!("{}", ErrorCode::DbError), "DB_ERROR");
    }
}
