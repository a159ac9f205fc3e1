//! One-time passcode record for phone verification.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// A persisted one-time code.
///
/// A record is usable only while `is_used` is false and `now < expires_at`.
/// The only mutation after creation is flipping `is_used`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpCode {
    pub id: Uuid,

    /// Phone number the code was issued for
    pub phone_number: String,

    /// Zero-padded 6-digit code
    pub code: String,

    pub expires_at: DateTime<Utc>,

    pub is_used: bool,

    pub created_at: DateTime<Utc>,
}

impl OtpCode {
    /// Creates a pending code with a fresh random value
    pub fn new(phone_number: String, now: DateTime<Utc>, expiration_minutes: i64) -> Self {
        Self::with_code(phone_number, generate_code(), now, expiration_minutes)
    }

    /// Creates a pending code with a known value
    pub fn with_code(
        phone_number: String,
        code: String,
        now: DateTime<Utc>,
        expiration_minutes: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number,
            code,
            expires_at: now + Duration::minutes(expiration_minutes),
            is_used: false,
            created_at: now,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Whether the code can still be consumed at `now`
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        !self.is_used && !self.is_expired(now)
    }
}

/// Generates a uniformly random 6-digit code, leading zeros preserved
pub fn generate_code() -> String {
    let value: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format_code(value)
}

/// Renders a numeric code as a fixed-width decimal string
pub fn format_code(value: u32) -> String {
    format!("{:0width$}", value, width = CODE_LENGTH)
}

/// Checks the shape of a submitted code: exactly six ASCII digits
pub fn is_well_formed_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_format() {
        for _ in 0..200 {
            let code = generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_format_code_zero_pads() {
        assert_eq!(format_code(42), "000042");
        assert_eq!(format_code(0), "000000");
        assert_eq!(format_code(999_999), "999999");
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: std::collections::HashSet<String> = (0..100).map(|_| generate_code()).collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_expiry_boundary() {
        let now = Utc::now();
        let code = OtpCode::new("+15551230000".to_string(), now, DEFAULT_EXPIRATION_MINUTES);

        assert_eq!(code.expires_at, now + Duration::minutes(5));
        assert!(code.is_pending(now + Duration::minutes(4)));
        assert!(!code.is_pending(code.expires_at));
        assert!(code.is_expired(now + Duration::minutes(6)));
    }

    #[test]
    fn test_used_code_is_not_pending() {
        let now = Utc::now();
        let mut code = OtpCode::with_code("+15551230000".to_string(), "123456".to_string(), now, 5);
        code.is_used = true;
        assert!(!code.is_pending(now));
    }

    #[test]
    fn test_is_well_formed_code() {
        assert!(is_well_formed_code("000042"));
        assert!(!is_well_formed_code("12345"));
        assert!(!is_well_formed_code("12345a"));
        assert!(!is_well_formed_code("1234567"));
    }
}
