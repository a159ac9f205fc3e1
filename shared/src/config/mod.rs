//! Configuration module with business-specific sub-modules
//!
//! - `auth` - password hashing and session token settings
//! - `database` - MySQL connection pool
//! - `environment` - environment detection and logging
//! - `otp` - verification code lifetime and housekeeping
//! - `server` - HTTP server and CORS
//! - `sms` - SMS provider selection and credentials
//!
//! Values are layered: built-in defaults, then `config.toml`, then
//! `config.<environment>.toml`, then `CLARITYFIN__SECTION__KEY` variables.

pub mod auth;
pub mod database;
pub mod environment;
pub mod otp;
pub mod server;
pub mod sms;

use ::config::{Config, File};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};
pub use sms::{Msg91Config, SmsConfig, SmsProvider, TwilioConfig};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "CLARITYFIN";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub otp: OtpConfig,
    #[serde(default)]
    pub sms: SmsConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Baseline configuration for an environment before any overrides
    pub fn for_environment(environment: Environment) -> Self {
        let cors = if environment.is_production() {
            CorsConfig::default()
        } else {
            CorsConfig::development()
        };
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            otp: OtpConfig::default(),
            sms: SmsConfig::default(),
            cors,
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load `.env`, config files and environment overrides, then validate
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        let environment = Environment::from_env();

        let config = Config::builder()
            .add_source(Config::try_from(&Self::for_environment(environment))?)
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name(environment.config_file()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut app_config: AppConfig = config.try_deserialize()?;
        app_config.environment = environment;
        app_config.validate()?;
        Ok(app_config)
    }

    /// Reject configurations the server must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must be set".to_string()));
        }

        if self.auth.jwt_secret.is_empty() {
            return Err(ConfigError::Invalid("auth.jwt_secret must be set".to_string()));
        }

        if self.environment.is_production()
            && (self.auth.is_using_default_secret()
                || self.auth.jwt_secret.len() < auth::MIN_PRODUCTION_SECRET_LEN)
        {
            return Err(ConfigError::Invalid(format!(
                "auth.jwt_secret must be a non-default secret of at least {} bytes in production",
                auth::MIN_PRODUCTION_SECRET_LEN
            )));
        }

        if !(4..=31).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::Invalid(
                "auth.bcrypt_cost must be between 4 and 31".to_string(),
            ));
        }

        if self.auth.token_ttl_hours <= 0 {
            return Err(ConfigError::Invalid(
                "auth.token_ttl_hours must be positive".to_string(),
            ));
        }

        if self.otp.expiration_minutes <= 0 {
            return Err(ConfigError::Invalid(
                "otp.expiration_minutes must be positive".to_string(),
            ));
        }

        if self.otp.cleanup_enabled && self.otp.cleanup_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "otp.cleanup_interval_secs must be positive when cleanup is enabled".to_string(),
            ));
        }

        if !self.sms.is_provider_configured() {
            return Err(ConfigError::Invalid(format!(
                "sms provider '{}' is selected but its credentials are missing",
                self.sms.provider
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.auth.token_ttl_hours, 24);
        assert_eq!(config.otp.expiration_minutes, 5);
        assert_eq!(config.sms.provider, SmsProvider::Log);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig::for_environment(Environment::Production);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = config;
        config.auth.jwt_secret = "a".repeat(auth::MIN_PRODUCTION_SECRET_LEN);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_out_of_range_bcrypt_cost() {
        let mut config = AppConfig::default();
        config.auth.bcrypt_cost = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_cleanup_interval() {
        let mut config = AppConfig::default();
        config.otp.cleanup_interval_secs = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.otp.cleanup_enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unconfigured_sms_provider() {
        let mut config = AppConfig::default();
        config.sms.provider = SmsProvider::Msg91;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_environment_variable_override() {
        std::env::set_var("CLARITYFIN__SERVER__PORT", "9191");
        let config = AppConfig::load().unwrap();
        std::env::remove_var("CLARITYFIN__SERVER__PORT");

        assert_eq!(config.server.port, 9191);
    }
}
