use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_otp_code;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    #[serde(alias = "phone_number")]
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))]
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    #[serde(alias = "phone_number")]
    #[validate(length(min = 10, max = 15, message = "Phone number must be 10-15 characters"))]
    pub phone: String,

    #[validate(custom = "validate_otp_code")]
    pub code: String,
}

/// Returned by `/otp/send`; the code itself only travels by SMS
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub expires_at: DateTime<Utc>,
}
