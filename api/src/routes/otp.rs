use actix_web::{web, HttpResponse};
use cf_shared::ApiResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::otp::{SendCodeRequest, SendCodeResponse, VerifyCodeRequest};
use crate::handlers::{handle_domain_error, validation_error_response};

/// POST /api/v1/otp/send
pub async fn send_code(
    state: web::Data<AppState>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.otp.send_code(&request.phone).await {
        Ok(result) => HttpResponse::Ok().json(
            ApiResponse::success(SendCodeResponse {
                expires_at: result.otp.expires_at,
            })
            .with_message("Verification code sent"),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/v1/otp/verify
pub async fn verify_code(
    state: web::Data<AppState>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.otp.verify_code(&request.phone, &request.code).await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::<()>::message("Verification successful")),
        Err(e) => handle_domain_error(e),
    }
}
