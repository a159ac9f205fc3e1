//! User entity representing a registered ClarityFin account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity anchored on a unique phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Phone number (unique among non-deleted users)
    pub phone_number: String,

    /// bcrypt hash; never serialized into responses
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Set when the user is soft-deleted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new User instance
    pub fn new(phone_number: String, password_hash: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number,
            password_hash,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Marks the user as deleted without removing the record
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.deleted_at = Some(now);
        self.updated_at = now;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_creation() {
        let now = Utc::now();
        let user = User::new("+15551230000".to_string(), "hash".to_string(), now);

        assert_eq!(user.phone_number, "+15551230000");
        assert_eq!(user.created_at, now);
        assert_eq!(user.updated_at, now);
        assert!(!user.is_deleted());
    }

    #[test]
    fn test_soft_delete() {
        let mut user = User::new("+15551230000".to_string(), "hash".to_string(), Utc::now());
        let later = user.created_at + chrono::Duration::minutes(1);

        user.soft_delete(later);

        assert!(user.is_deleted());
        assert_eq!(user.updated_at, later);
    }

    #[test]
    fn test_password_hash_is_not_serialized() {
        let user = User::new("+15551230000".to_string(), "secret-hash".to_string(), Utc::now());
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("deleted_at"));
    }
}
