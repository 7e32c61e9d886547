use std::time::SystemTime;

use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;

use crate::auth::{issue_token, ClaimRequest};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::extractors::ValidatedJson;
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;
use crate::trace_ctx;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
}

/// POST /createToken
///
/// Whatever identity the caller presents is signed as-is; no credential
/// check happens here.
async fn create_token(
    body: ValidatedJson<ClaimRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    if request.email.trim().is_empty() {
        return Err(AppError::invalid(ErrorCode::ValidationError, "email is required"));
    }

    let access_token = issue_token(&request, SystemTime::now(), &app_state.security)?;
    info!(
        trace_id = %trace_ctx::trace_id(),
        email = %Redacted(&request.email),
        "access token issued"
    );

    Ok(HttpResponse::Ok().json(TokenResponse { access_token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/createToken", web::post().to(create_token));
}
