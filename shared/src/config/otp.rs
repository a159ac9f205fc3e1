//! One-time passcode configuration

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes a generated code stays valid
    pub expiration_minutes: i64,

    /// Run periodic deletion of expired codes
    #[serde(default = "default_cleanup_enabled")]
    pub cleanup_enabled: bool,

    /// Seconds between cleanup runs
    #[serde(default = "default_cleanup_interval")]
    pub cleanup_interval_secs: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiration_minutes: 5,
            cleanup_enabled: default_cleanup_enabled(),
            cleanup_interval_secs: default_cleanup_interval(),
        }
    }
}

fn default_cleanup_enabled() -> bool {
    true
}

fn default_cleanup_interval() -> u64 {
    900
}
