//! Product listing, insertion and deletion.

use actix_web::{guard, web, HttpResponse};
use serde::Serialize;

use crate::db::require_db;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::{CurrentIdentity, InventoryId, ValidatedJson};
use crate::logging::security;
use crate::middleware::AuthGate;
use crate::repos::inventory::{self, NewInventoryRecord, FEATURED_LIMIT};
use crate::state::app_state::AppState;

/// GET /products
async fn list_products(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let records = inventory::find_all(db).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /featuredProducts
async fn list_featured(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let records = inventory::find_limited(db, FEATURED_LIMIT).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// GET /products/{email}, behind `AuthGate`.
///
/// The owner check runs before the database is touched.
async fn list_owned_products(
    path: web::Path<String>,
    identity: CurrentIdentity,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let requested = path.into_inner();
    if requested != identity.email() {
        security::owner_mismatch(&requested, identity.email());
        return Err(AppError::forbidden_owner_mismatch());
    }

    let db = require_db(&app_state)?;
    let records = inventory::find_by_owner(db, &requested).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// DELETE /products/{id}
async fn delete_product(
    id: InventoryId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;

    match inventory::delete_by_id(db, id.0).await? {
        0 => Err(AppError::not_found(ErrorCode::InventoryNotFound, "delete failed")),
        _ => Ok(HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("delete success")),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertResponse {
    inserted_id: i32,
}

/// POST /inventories/add
async fn add_inventory(
    body: ValidatedJson<NewInventoryRecord>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let inserted_id = inventory::insert(db, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(InsertResponse { inserted_id }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(list_products))
        .route("/featuredProducts", web::get().to(list_featured))
        .route("/inventories/add", web::post().to(add_inventory))
        // Same path shape, told apart by method; only the GET is gated.
        .service(
            web::resource("/products/{email}")
                .guard(guard::Get())
                .wrap(AuthGate)
                .route(web::get().to(list_owned_products)),
        )
        .service(web::resource("/products/{id}").route(web::delete().to(delete_product)));
}
