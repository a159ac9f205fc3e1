//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainResult;

/// Persistence contract for users.
///
/// Soft-deleted users are invisible to every lookup. Misses fail with
/// `DomainError::NotFound`; constraint and connectivity problems fail with
/// `DomainError::Storage`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// A live user with the same phone number is a constraint violation.
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Find a user by primary key
    async fn find_by_id(&self, id: Uuid) -> DomainResult<User>;

    /// Find a user by phone number
    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<User>;

    /// Check whether a live user holds this phone number
    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool>;

    /// Overwrite the mutable fields of an existing user
    async fn update(&self, user: User) -> DomainResult<User>;

    /// Soft delete a user, stamping `deleted_at` with `now`
    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()>;
}
