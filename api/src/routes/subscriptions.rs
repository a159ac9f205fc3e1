//! Subscription handlers
//!
//! All routes sit behind [`JwtAuth`](crate::middleware::JwtAuth). The owner
//! is resolved from the token subject when listing and creating; reads,
//! updates and deletes by id are not scoped to the caller.

use actix_web::{web, HttpResponse};
use cf_shared::ApiResponse;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::dto::subscription::{SubscriptionListResponse, SubscriptionRequest, SubscriptionResponse};
use crate::handlers::{handle_domain_error, invalid_id_response, validation_error_response};
use crate::middleware::AuthContext;

fn parse_id(raw: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw).map_err(|_| invalid_id_response("id"))
}

/// GET /api/v1/subscriptions
pub async fn list(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    match state.subscriptions.list_for_owner(&auth.phone_number).await {
        Ok(subscriptions) => HttpResponse::Ok().json(ApiResponse::success(
            SubscriptionListResponse::from(subscriptions),
        )),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/v1/subscriptions
pub async fn create(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<SubscriptionRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .subscriptions
        .create_for_owner(&auth.phone_number, &request.name, request.amount)
        .await
    {
        Ok(subscription) => HttpResponse::Ok().json(
            ApiResponse::success(SubscriptionResponse::from(subscription))
                .with_message("Subscription created"),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// GET /api/v1/subscriptions/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.subscriptions.get(id).await {
        Ok(subscription) => {
            HttpResponse::Ok().json(ApiResponse::success(SubscriptionResponse::from(subscription)))
        }
        Err(e) => handle_domain_error(e),
    }
}

/// PUT /api/v1/subscriptions/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<SubscriptionRequest>,
) -> HttpResponse {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state
        .subscriptions
        .update(id, &request.name, request.amount)
        .await
    {
        Ok(subscription) => HttpResponse::Ok().json(
            ApiResponse::success(SubscriptionResponse::from(subscription))
                .with_message("Subscription updated"),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// DELETE /api/v1/subscriptions/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> HttpResponse {
    let id = match parse_id(&path) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.subscriptions.delete(id).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message("Subscription deleted")),
        Err(e) => handle_domain_error(e),
    }
}
