use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Inventory id taken from the `{id}` path segment.
///
/// Only checks shape (a positive integer); whether the record exists is the
/// handler's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryId(pub i32);

impl InventoryId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.trim().parse::<i32>().map_err(|_| {
            AppError::bad_request(
                ErrorCode::InvalidInventoryId,
                format!("Invalid inventory id: {raw}"),
            )
        })?;

        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidInventoryId,
                format!("Inventory id must be positive, got: {id}"),
            ));
        }

        Ok(Self(id))
    }
}

impl FromRequest for InventoryId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("id") {
            Some(raw) => Self::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidInventoryId,
                "Missing id parameter",
            )),
        };
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(InventoryId::parse("42").unwrap(), InventoryId(42));
    }

    #[test]
    fn rejects_garbage_zero_and_negatives() {
        for raw in ["abc", "0", "-3", "1.5", "", "99999999999"] {
            let err = InventoryId::parse(raw).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidInventoryId, "input {raw:?}");
        }
    }
}
