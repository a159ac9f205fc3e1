use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use cf_core::domain::entities::session::SessionToken;
use cf_core::domain::entities::user::User;

use super::validate_otp_code;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Phone number, E.164 with or without the leading '+'
    #[serde(alias = "phone_number")]
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))]
    pub phone: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterWithOtpRequest {
    #[serde(alias = "phone_number")]
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))]
    pub phone: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    #[validate(custom = "validate_otp_code")]
    pub otp_code: String,
}

pub type LoginRequest = RegisterRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub phone_number: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            phone_number: user.phone_number,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<SessionToken> for LoginResponse {
    fn from(session: SessionToken) -> Self {
        Self {
            token: session.token,
            expires_at: session.expires_at,
        }
    }
}
