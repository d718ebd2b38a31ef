//! Bearer token authorization middleware.
//!
//! The middleware compares the `Authorization` header against the literal
//! form `Bearer <token>` for the process-wide shared secret and rejects
//! mismatches with 401 before the request body is read. The comparison runs
//! in constant time.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::task::{Context, Poll};

use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    Error,
};
use constant_time_eq::constant_time_eq;
use futures_util::future::LocalBoxFuture;

use ox_core::errors::DomainError;

use crate::handlers::error::domain_error_response;

/// Bearer authorization middleware factory
pub struct BearerAuth {
    token: Rc<String>,
}

impl BearerAuth {
    /// Creates middleware that admits only requests carrying the given
    /// shared secret
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(token.into()),
        }
    }
}

impl<S> Transform<S, ServiceRequest> for BearerAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = BearerAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(BearerAuthMiddleware {
            service: Rc::new(service),
            token: Rc::clone(&self.token),
        }))
    }
}

/// Bearer authorization middleware service
pub struct BearerAuthMiddleware<S> {
    service: Rc<S>,
    token: Rc<String>,
}

impl<S> Service<ServiceRequest> for BearerAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
    S::Future: 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !is_authorized(&self.token, &req) {
            // Short-circuit without touching the payload
            let (request, _payload) = req.into_parts();
            let response = domain_error_response(&DomainError::Unauthorized);
            return Box::pin(ready(Ok(ServiceResponse::new(request, response))));
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move { service.call(req).await })
    }
}

/// Check the Authorization header against `Bearer <token>`.
///
/// An empty configured secret never authorizes anything.
fn is_authorized(token: &str, req: &ServiceRequest) -> bool {
    if token.is_empty() {
        return false;
    }

    let header = match req.headers().get(AUTHORIZATION).map(|h| h.to_str()) {
        Some(Ok(header)) => header,
        _ => return false,
    };

    let expected = format!("Bearer {}", token);
    constant_time_eq(header.as_bytes(), expected.as_bytes())
}
