//! Credential and session token configuration

use serde::{Deserialize, Serialize};

/// Placeholder secret that must never reach production
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-in-production";

/// Minimum secret length accepted in production
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HMAC secret for signing session tokens
    pub jwt_secret: String,

    /// Session token lifetime in hours
    pub token_ttl_hours: i64,

    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            token_ttl_hours: 24,
            bcrypt_cost: 12,
        }
    }
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
