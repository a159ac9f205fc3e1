//! Error kinds for credentials, one-time codes and input validation

use thiserror::Error;

/// Credential and session errors.
///
/// `InvalidCredentials` and `Unauthenticated` deliberately carry no detail
/// about which check failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// One-time passcode errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    /// Wrong code, already used and expired all collapse into this variant
    #[error("Invalid or expired verification code")]
    InvalidOrExpiredCode,

    /// The code was persisted but the SMS channel rejected the send
    #[error("Failed to dispatch verification code: {reason}")]
    DispatchFailure { reason: String },
}

/// Validation errors carrying the offending field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },

    #[error("Invalid length for field: {field} (min: {min}, max: {max}, actual: {actual})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
        actual: usize,
    },
}

impl ValidationError {
    /// Name of the field that failed validation
    pub fn field(&self) -> &str {
        match self {
            ValidationError::RequiredField { field }
            | ValidationError::InvalidFormat { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidLength { field, .. } => field,
        }
    }
}
