use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::auth::IdentityClaim;
use crate::error::AppError;

/// The verified identity attached by `AuthGate`.
///
/// Only meaningful on gated routes; anywhere else it fails with 401.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub IdentityClaim);

impl CurrentIdentity {
    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequest for CurrentIdentity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let claim = req.extensions().get::<IdentityClaim>().cloned();
        ready(claim.map(CurrentIdentity).ok_or_else(AppError::unauthorized))
    }
}
