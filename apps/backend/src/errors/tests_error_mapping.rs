// Error mapping without HTTP or database dependencies
use actix_web::http::StatusCode;

use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::AppError;

#[test]
fn maps_validation_to_400() {
    let app: AppError = DomainError::validation("quantity must be positive").into();
    assert_eq!(app.code(), ErrorCode::ValidationError);
    assert_eq!(app.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.detail(), "quantity must be positive");
}

#[test]
fn maps_not_found() {
    let app: AppError = DomainError::not_found(NotFoundKind::Inventory, "no record 7").into();
    assert_eq!(app.code().as_str(), "INVENTORY_NOT_FOUND");
    assert_eq!(app.status().as_u16(), 404);
}

#[test]
fn maps_infra() {
    let down: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert!(matches!(down, AppError::DbUnavailable));

    let corr: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(corr.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(corr.status().as_u16(), 500);

    let other: AppError =
        DomainError::infra(InfraErrorKind::Other("io".to_string()), "socket closed").into();
    assert_eq!(other.code().as_str(), "DB_ERROR");
    assert_eq!(other.status().as_u16(), 500);
}

#[test]
fn auth_errors_carry_contract_messages() {
    assert_eq!(AppError::unauthorized().status().as_u16(), 401);
    assert_eq!(AppError::unauthorized().detail(), "Unauthorized access");

    assert_eq!(AppError::forbidden_invalid_token().status().as_u16(), 403);
    assert_eq!(AppError::forbidden_invalid_token().detail(), "forbidden access");

    assert_eq!(AppError::forbidden_owner_mismatch().status().as_u16(), 403);
    assert_eq!(
        AppError::forbidden_owner_mismatch().detail(),
        "Forbidden access"
    );
}

#[test]
fn humanizes_codes_for_titles() {
    assert_eq!(
        AppError::humanize_code("FORBIDDEN_INVALID_TOKEN"),
        "Forbidden Invalid Token"
    );
}
