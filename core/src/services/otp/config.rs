//! Configuration for the OTP service

use cf_shared::config::OtpConfig;

use crate::domain::entities::otp_code::DEFAULT_EXPIRATION_MINUTES;

#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Code expiration time in minutes
    pub code_expiration_minutes: i64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }
}

impl From<&OtpConfig> for OtpServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: config.expiration_minutes,
        }
    }
}
