//! # Infrastructure Layer
//!
//! Concrete implementations of the `cf_core` contracts:
//! - **Database**: MySQL repositories using SQLx, plus pool and migrations
//! - **SMS**: Twilio (primary), MSG91 (secondary) and a log sink
//!
//! ## Features
//!
//! - `twilio-sms`: Enable the Twilio SMS provider (default)

/// Database module - MySQL implementations using SQLx
pub mod database;

/// SMS service module - External SMS providers
pub mod sms;

pub use database::{DatabasePool, MySqlOtpRepository, MySqlSubscriptionRepository, MySqlUserRepository};
pub use sms::{create_sms_service, SmsService, SmsServiceAdapter};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
