//! Bearer-token authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the token from the `Authorization` header,
//! verifies it through the credential service contract, and injects an
//! [`AuthContext`] into the request. Missing headers, other
//! schemes and failed verification are all answered with the same 401 body
//! before the request reaches a handler.
//!
//! The credential service is either given explicitly
//! ([`JwtAuth::with_service`]) or taken from the application's [`AppState`].

use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, HttpResponse,
};
use cf_core::services::CredentialServiceTrait;
use cf_shared::{error_codes, ErrorResponse};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
};

use crate::app::AppState;

/// Identity of the caller, taken from the token subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub phone_number: String,
}

/// Bearer authentication middleware factory
#[derive(Clone, Default)]
pub struct JwtAuth {
    credentials: Option<Arc<dyn CredentialServiceTrait>>,
}

impl JwtAuth {
    /// Use the credential service held by the application state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_service(credentials: Arc<dyn CredentialServiceTrait>) -> Self {
        Self {
            credentials: Some(credentials),
        }
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
            credentials: self.credentials.clone(),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    credentials: Option<Arc<dyn CredentialServiceTrait>>,
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
        let credentials = self.credentials.clone().or_else(|| {
            req.app_data::<web::Data<AppState>>()
                .map(|state| Arc::clone(&state.credentials))
        });

        Box::pin(async move {
            let Some(credentials) = credentials else {
                tracing::error!("Bearer authentication used without a credential service");
                return Ok(unauthorized(req));
            };

            let Some(token) = extract_bearer_token(&req) else {
                tracing::debug!(path = %req.path(), "Missing or malformed Authorization header");
                return Ok(unauthorized(req));
            };

            match credentials.verify_session_token(&token) {
                Ok(phone_number) => {
                    req.extensions_mut().insert(AuthContext { phone_number });
                }
                Err(_) => {
                    tracing::debug!(path = %req.path(), "Session token rejected");
                    return Ok(unauthorized(req));
                }
            }

            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ErrorResponse::new(
        error_codes::UNAUTHENTICATED,
        "Authentication required",
    ))
}

fn unauthorized<B>(req: ServiceRequest) -> ServiceResponse<EitherBody<B>> {
    req.into_response(unauthorized_response()).map_into_right_body()
}

/// Extracts the token from `Authorization: Bearer <token>`
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req.extensions().get::<AuthContext>().cloned().ok_or_else(|| {
            InternalError::from_response("authentication required", unauthorized_response())
                .into()
        });

        ready(result)
    }
}
