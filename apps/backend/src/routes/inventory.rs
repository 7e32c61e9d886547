//! Single-record reads and quantity adjustments.

use actix_web::{web, HttpResponse};

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{InventoryId, ValidatedJson};
use crate::repos::inventory::{self, RestockRequest};
use crate::state::app_state::AppState;

/// GET /inventory/{id}
async fn get_inventory(
    id: InventoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = inventory::find_by_id(db, id.0).await?.ok_or_else(|| {
        AppError::not_found(
            ErrorCode::InventoryNotFound,
            format!("Inventory {} not found", id.0),
        )
    })?;
    Ok(HttpResponse::Ok().json(record))
}

/// PUT /inventory/{id}: one unit delivered.
///
/// No floor at zero; quantity may go negative.
async fn decrement_inventory(
    id: InventoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let record = inventory::increment_quantity(db, id.0, -1).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// PUT /restock/{id}
async fn restock_inventory(
    id: InventoryId,
    body: ValidatedJson<RestockRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    body.validate()?;

    let db = require_db(&app_state)?;
    let record = inventory::increment_quantity(db, id.0, body.quantity).await?;
    Ok(HttpResponse::Ok().json(record))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/inventory/{id}")
            .route(web::get().to(get_inventory))
            .route(web::put().to(decrement_inventory)),
    )
    .route("/restock/{id}", web::put().to(restock_inventory));
}
