//! Types for OTP service results

use crate::domain::entities::otp_code::OtpCode;

/// Result of generating and dispatching a code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The persisted record
    pub otp: OtpCode,
    /// The SMS message ID from the provider
    pub message_id: String,
}
