use actix_web::{web, HttpResponse};
use cf_shared::{HealthResponse, HealthStatus};

use crate::app::AppState;

/// GET /health
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    let response = HealthResponse::new(
        env!("CARGO_PKG_VERSION"),
        state.health.database_ok().await,
    );

    match response.status {
        HealthStatus::Healthy => HttpResponse::Ok().json(response),
        HealthStatus::Unhealthy => HttpResponse::ServiceUnavailable().json(response),
    }
}
