//! In-memory implementation of UserRepository for tests and local wiring

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::trait_::UserRepository;

/// Mock user repository backed by a shared map
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows, soft-deleted included
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| !u.is_deleted() && u.phone_number == user.phone_number)
        {
            return Err(DomainError::storage(
                "duplicate entry for users.active_phone",
            ));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<User> {
        let users = self.users.read().await;
        users
            .get(&id)
            .filter(|u| !u.is_deleted())
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<User> {
        let users = self.users.read().await;
        users
            .values()
            .find(|u| !u.is_deleted() && u.phone_number == phone_number)
            .cloned()
            .ok_or_else(|| DomainError::not_found("user"))
    }

    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .any(|u| !u.is_deleted() && u.phone_number == phone_number))
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        match users.get(&user.id) {
            Some(existing) if !existing.is_deleted() => {
                users.insert(user.id, user.clone());
                Ok(user)
            }
            _ => Err(DomainError::not_found("user")),
        }
    }

    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) if !user.is_deleted() => {
                user.soft_delete(now);
                Ok(())
            }
            _ => Err(DomainError::not_found("user")),
        }
    }
}
