/// HTTP middleware for the engagement service
///
/// Bearer-token authentication runs before every `/api/v1` route; the
/// validated actor id lands in request extensions and handlers pull it out
/// with the `ActorId` extractor. Ownership predicates for destructive
/// operations live in [`permissions`].
pub mod permissions;

pub use permissions::*;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::error::AppError;

/// Authenticated actor id stored in request extensions after auth.
#[derive(Debug, Clone)]
pub struct ActorId(pub Uuid);

/// Actix middleware that validates a Bearer token using the shared JWT keys.
pub struct BearerAuth;

impl<S, B> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthService {
            service: Rc::new(service),
        }))
    }
}

pub struct BearerAuthService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for BearerAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let auth_header = req
                .headers()
                .get("Authorization")
                .and_then(|h| h.to_str().ok())
                .ok_or_else(|| {
                    Error::from(AppError::Unauthorized("Missing Authorization header".into()))
                })?;

            let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
                Error::from(AppError::Unauthorized("Invalid Authorization scheme".into()))
            })?;

            let token_data = auth_core::jwt::validate_token(token).map_err(|_| {
                Error::from(AppError::Unauthorized("Invalid or expired token".into()))
            })?;

            let actor = token_data.claims.subject().map_err(|_| {
                Error::from(AppError::Unauthorized("Invalid subject claim".into()))
            })?;

            req.extensions_mut().insert(ActorId(actor));

            service.call(req).await
        })
    }
}

impl FromRequest for ActorId {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<ActorId>()
                .cloned()
                .ok_or_else(|| Error::from(AppError::Unauthorized("Actor identity missing".into()))),
        )
    }
}
