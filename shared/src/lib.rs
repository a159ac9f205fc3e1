//! Shared utilities and common types for the ClarityFin server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Error and success response envelopes
//! - Phone number helpers

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, ConfigError, CorsConfig, DatabaseConfig, Environment, LogFormat,
    LoggingConfig, Msg91Config, OtpConfig, ServerConfig, SmsConfig, SmsProvider, TwilioConfig,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::phone;
