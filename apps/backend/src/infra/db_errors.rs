//! SeaORM -> DomainError translation.
//!
//! Adapters return raw `DbErr`; repositories map them here, and handlers
//! turn the resulting `DomainError` into `AppError` via `From`.

use sea_orm::DbErr;
use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with a sanitized detail.
pub fn map_db_err(e: DbErr) -> DomainError {
    let trace_id = trace_ctx::trace_id();
    let raw = e.to_string();

    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, error = %Redacted(&raw), "database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable")
        }
        DbErr::Json(_) | DbErr::Type(_) | DbErr::TryIntoErr { .. } => {
            error!(trace_id = %trace_id, error = %Redacted(&raw), "stored row could not be decoded");
            DomainError::infra(InfraErrorKind::DataCorruption, "Stored data is corrupt")
        }
        _ => {
            error!(trace_id = %trace_id, error = %Redacted(&raw), "database operation failed");
            DomainError::infra(
                InfraErrorKind::Other("DbErr".into()),
                "Database operation failed",
            )
        }
    }
}
