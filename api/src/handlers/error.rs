//! Mapping of domain errors to HTTP responses
//!
//! Credential and code failures stay deliberately vague; storage and internal
//! failures are logged here and reach the client only as a generic message.

use std::collections::HashMap;

use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse};
use cf_core::errors::{AuthError, DomainError, OtpError};
use cf_shared::{error_codes, ErrorResponse};
use serde_json::Value;
use validator::ValidationErrors;

pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let (status, body) = match &error {
        DomainError::Validation(validation) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
                .add_detail(validation.field(), vec![validation.to_string()]),
        ),
        DomainError::NotFound { resource } => (
            StatusCode::NOT_FOUND,
            ErrorResponse::new(error_codes::NOT_FOUND, format!("{} not found", resource)),
        ),
        DomainError::Auth(auth) => match auth {
            AuthError::UserNotFound => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(error_codes::USER_NOT_FOUND, "User not found"),
            ),
            AuthError::UserAlreadyExists => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(error_codes::ALREADY_EXISTS, "User already exists"),
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(error_codes::INVALID_CREDENTIALS, "Invalid credentials"),
            ),
            AuthError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(error_codes::UNAUTHENTICATED, "Authentication required"),
            ),
            AuthError::TokenGenerationFailed => {
                tracing::error!("Session token generation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
                )
            }
        },
        DomainError::Otp(otp) => match otp {
            OtpError::InvalidOrExpiredCode => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(
                    error_codes::INVALID_OR_EXPIRED_CODE,
                    "Invalid or expired verification code",
                ),
            ),
            OtpError::DispatchFailure { reason } => {
                tracing::error!(reason = %reason, "Verification code dispatch failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        error_codes::DISPATCH_FAILURE,
                        "Failed to send verification code",
                    ),
                )
            }
        },
        DomainError::Storage { message } => {
            tracing::error!(message = %message, "Storage failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::STORAGE_FAILURE, "A storage error occurred"),
            )
        }
        DomainError::Internal { message } => {
            tracing::error!(message = %message, "Internal failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(error_codes::INTERNAL_ERROR, "An internal error occurred"),
            )
        }
    };

    HttpResponse::build(status).json(body)
}

/// 400 with one entry per failing field
pub fn validation_error_response(errors: &ValidationErrors) -> HttpResponse {
    let details: HashMap<String, Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            (field.to_string(), Value::from(messages))
        })
        .collect();

    HttpResponse::BadRequest().json(ErrorResponse::with_details(
        error_codes::VALIDATION_ERROR,
        "Invalid request data",
        details,
    ))
}

/// 400 for a path segment that is not a valid UUID
pub fn invalid_id_response(field: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::VALIDATION_ERROR, "Invalid request data")
            .add_detail(field, vec!["Must be a valid UUID"]),
    )
}

/// JSON extractor config answering malformed bodies with the error envelope
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest().json(ErrorResponse::new(
            error_codes::VALIDATION_ERROR,
            format!("Malformed request body: {}", err),
        ));
        InternalError::from_response(err, response).into()
    })
}
