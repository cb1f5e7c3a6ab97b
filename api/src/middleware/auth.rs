//! Access token gate for protected endpoints.
//!
//! Every protected request goes through the same steps: extract a token,
//! verify it as an access token, check it against the revocation list,
//! then resolve its subject to a known user. Any failure ends in the same
//! 403 body, so a caller cannot tell an expired token from a revoked one or
//! from an unknown user.

use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::AUTHORIZATION, StatusCode},
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use serde::Deserialize;
use tracing::{debug, warn};

use pb_core::{
    domain::entities::token::TokenClass,
    errors::TokenError,
    repositories::{RevocationRepository, UserRepository},
    services::token::{TokenCodec, TokenValidator},
};

use crate::handlers::ErrorResponse;

/// Identity attached to a request that passed the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: i64,
}

/// The single denial every gate failure turns into
#[derive(Debug, Clone, Copy, Default, thiserror::Error)]
#[error("permission denied")]
pub struct PermissionDenied;

impl ResponseError for PermissionDenied {
    fn status_code(&self) -> StatusCode {
        StatusCode::FORBIDDEN
    }

    fn error_response(&self) -> HttpResponse {
        ErrorResponse::new("permission_denied", "permission denied").to_response(self.status_code())
    }
}

/// Validates access tokens and resolves them to users
///
/// Holds no per-request state and is shared across workers behind an `Arc`.
pub struct AuthGate {
    validator: TokenValidator,
    users: Arc<dyn UserRepository>,
}

impl AuthGate {
    /// Gate that always consults `revocations`
    pub fn new(
        codec: Arc<TokenCodec>,
        revocations: Arc<dyn RevocationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            validator: TokenValidator::with_revocation(codec, revocations),
            users,
        }
    }

    /// Run the full check on a raw token string
    pub async fn authenticate(&self, token: &str) -> Result<AuthContext, TokenError> {
        let user_id = self.validator.validate(token, TokenClass::Access).await?;

        match self.users.find_by_id(user_id).await {
            Ok(Some(user)) => Ok(AuthContext { user_id: user.id }),
            Ok(None) => Err(TokenError::UnknownUser),
            Err(e) => {
                warn!(user_id, error = %e, "user lookup failed");
                Err(TokenError::UnknownUser)
            }
        }
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Raw `Authorization` value if non-empty, else the `token` query parameter,
/// else the empty string
fn extract_token(req: &ServiceRequest) -> String {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty());
    if let Some(value) = header {
        return value.to_string();
    }

    web::Query::<TokenQuery>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().token)
        .unwrap_or_default()
}

/// Middleware factory wrapping a route with the [`AuthGate`]
#[derive(Clone)]
pub struct JwtAuth {
    gate: Arc<AuthGate>,
}

impl JwtAuth {
    pub fn new(gate: Arc<AuthGate>) -> Self {
        Self { gate }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            gate: self.gate.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    gate: Arc<AuthGate>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
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
        let gate = self.gate.clone();

        Box::pin(async move {
            let token = extract_token(&req);

            match gate.authenticate(&token).await {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(e) => {
                    debug!(reason = e.error_code(), path = %req.path(), "request denied");
                    let response = PermissionDenied.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Extractor for handlers behind [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .copied()
            .ok_or_else(|| PermissionDenied.into());

        ready(result)
    }
}
