//! Bearer authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! resolves the account behind it, and injects it into the request
//! extensions before any handler logic runs. Handlers receive the account
//! through the `CurrentUser` extractor.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::{ErrorInternalServerError, ErrorUnauthorized},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest,
};
use async_trait::async_trait;
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use ch_core::domain::entities::User;
use ch_core::errors::DomainError;
use ch_core::repositories::UserRepository;
use ch_core::services::auth::AuthService;

use crate::handlers::error::CREDENTIALS_DETAIL;

/// Resolver turning a bearer token into the account behind it
///
/// Dyn-dispatched so the middleware does not need the repository generics
/// of the concrete auth service.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// Decode the token with the access scope and look up the account
    async fn resolve(&self, token: &str) -> Result<User, DomainError>;
}

#[async_trait]
impl<U: UserRepository + 'static> IdentityResolver for AuthService<U> {
    async fn resolve(&self, token: &str) -> Result<User, DomainError> {
        self.resolve_bearer(token).await
    }
}

/// Authenticated account injected into requests
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    /// The account's id, the owner scope for contact operations
    pub fn id(&self) -> uuid::Uuid {
        self.0.id
    }
}

/// Extractor for handlers behind `RequireAuth`
impl FromRequest for CurrentUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(unauthorized_error);

        ready(result)
    }
}

/// Bearer authentication middleware factory
pub struct RequireAuth;

impl<S, B> Transform<S, ServiceRequest> for RequireAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// Bearer authentication middleware service
pub struct RequireAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return Err(unauthorized_error()),
            };

            let resolver = match req.app_data::<web::Data<Arc<dyn IdentityResolver>>>() {
                Some(resolver) => resolver.get_ref().clone(),
                None => return Err(ErrorInternalServerError("identity resolver not configured")),
            };

            match resolver.resolve(&token).await {
                Ok(user) => {
                    req.extensions_mut().insert(CurrentUser(user));
                }
                Err(error) => {
                    tracing::debug!(%error, "bearer token rejected");
                    return Err(unauthorized_error());
                }
            }

            service.call(req).await
        })
    }
}

/// Extracts the bearer token from the Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.to_string())
}

fn unauthorized_error() -> Error {
    ErrorUnauthorized(serde_json::json!({
        "error": "unauthorized",
        "message": CREDENTIALS_DETAIL,
    }))
}
