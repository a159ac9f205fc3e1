use actix_web::{web, HttpResponse};
use cf_shared::phone::mask_phone_number;
use cf_shared::ApiResponse;
use validator::Validate;

use crate::app::AppState;
use crate::dto::auth::{LoginRequest, LoginResponse, RegisterRequest, RegisterWithOtpRequest, UserResponse};
use crate::handlers::{handle_domain_error, validation_error_response};

/// POST /api/v1/auth/register
pub async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    tracing::info!(phone = %mask_phone_number(&request.phone), "Registration requested");

    match state.auth.register(&request.phone, &request.password).await {
        Ok(user) => HttpResponse::Ok().json(
            ApiResponse::success(UserResponse::from(user))
                .with_message("User registered successfully"),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/v1/auth/register/otp
///
/// The code is consumed before the account is created; an invalid code
/// never reaches registration.
pub async fn register_with_otp(
    state: web::Data<AppState>,
    request: web::Json<RegisterWithOtpRequest>,
) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    tracing::info!(phone = %mask_phone_number(&request.phone), "OTP registration requested");

    match state
        .auth
        .register_with_otp(&request.phone, &request.password, &request.otp_code)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(
            ApiResponse::success(UserResponse::from(user))
                .with_message("User registered successfully"),
        ),
        Err(e) => handle_domain_error(e),
    }
}

/// POST /api/v1/auth/login
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> HttpResponse {
    let request = request.into_inner();
    if let Err(errors) = request.validate() {
        return validation_error_response(&errors);
    }

    match state.auth.login(&request.phone, &request.password).await {
        Ok(session) => HttpResponse::Ok().json(
            ApiResponse::success(LoginResponse::from(session)).with_message("Login successful"),
        ),
        Err(e) => handle_domain_error(e),
    }
}
