//! Configuration for the credential service

use cf_shared::config::AuthConfig;

/// Configuration for the credential service
#[derive(Debug, Clone)]
pub struct CredentialServiceConfig {
    /// bcrypt work factor applied to new password hashes
    pub bcrypt_cost: u32,
}

impl Default for CredentialServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialServiceConfig {
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}

impl From<&AuthConfig> for CredentialServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
