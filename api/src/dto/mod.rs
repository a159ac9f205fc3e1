//! Request and response bodies

pub mod auth;
pub mod otp;
pub mod subscription;

use validator::ValidationError;

/// Exactly six ASCII digits
pub fn validate_otp_code(code: &str) -> Result<(), ValidationError> {
    if cf_core::domain::entities::otp_code::is_well_formed_code(code) {
        Ok(())
    } else {
        let mut error = ValidationError::new("otp_format");
        error.message = Some("Verification code must be exactly 6 digits".into());
        Err(error)
    }
}
