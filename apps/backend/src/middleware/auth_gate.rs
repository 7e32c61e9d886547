//! Authorization gate for owner-scoped routes.
//!
//! Reads the `Authorization` header, verifies the token and stores the
//! resulting [`IdentityClaim`] in request extensions for the handler.
//! Rejections are rendered here as problem details:
//!
//! - no header: 401
//! - anything wrong with the token: 403
//!
//! The token is the text after the first space. The scheme word in front
//! of it is not inspected, so `Bearer <t>` and `Token <t>` both work.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::{verify_token, IdentityClaim};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::state::app_state::AppState;

pub struct AuthGate;

impl<S, B> Transform<S, ServiceRequest> for AuthGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthGateMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        // Rendered inside the future so the request's trace id is in scope.
        Box::pin(async move {
            match authorize(&req) {
                Ok(claim) => {
                    req.extensions_mut().insert(claim);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => Ok(req.error_response(err).map_into_right_body()),
            }
        })
    }
}

fn authorize(req: &ServiceRequest) -> Result<IdentityClaim, AppError> {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        security::missing_auth_header(req.path());
        return Err(AppError::unauthorized());
    };

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        AppError::internal(ErrorCode::Internal, "AppState not available")
    })?;

    let token = value.to_str().ok().and_then(token_from_header);
    let verified = match token {
        Some(token) => verify_token(token, &state.security),
        None => Err(AppError::forbidden_invalid_token()),
    };

    verified.inspect_err(|_| security::token_rejected(req.path()))
}

/// Second space-separated segment of the header value, if non-empty.
pub fn token_from_header(value: &str) -> Option<&str> {
    value.split(' ').nth(1).filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::token_from_header;

    #[test]
    fn token_is_second_segment() {
        assert_eq!(token_from_header("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(token_from_header("Token abc"), Some("abc"));
        assert_eq!(token_from_header("Bearer abc extra"), Some("abc"));
    }

    #[test]
    fn no_second_segment_means_no_token() {
        assert_eq!(token_from_header("abc.def.ghi"), None);
        assert_eq!(token_from_header("Bearer "), None);
        assert_eq!(token_from_header(""), None);
    }

    #[test]
    fn double_space_leaves_empty_second_segment() {
        assert_eq!(token_from_header("Bearer  abc"), None);
    }
}
