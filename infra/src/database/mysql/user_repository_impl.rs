//! MySQL implementation of the UserRepository trait.
//!
//! Users are soft deleted; every lookup filters on `deleted_at IS NULL`.
//! Phone uniqueness among live users is enforced by the unique index on the
//! generated `active_phone` column.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cf_core::domain::entities::user::User;
use cf_core::errors::{DomainError, DomainResult};
use cf_core::repositories::UserRepository;

use super::{column, parse_uuid, storage_error};

const USER_COLUMNS: &str =
    "id, phone_number, password_hash, created_at, updated_at, deleted_at";

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &MySqlRow) -> DomainResult<User> {
        let id: String = column(row, "id")?;

        Ok(User {
            id: parse_uuid("users.id", &id)?,
            phone_number: column(row, "phone_number")?,
            password_hash: column(row, "password_hash")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
            deleted_at: column(row, "deleted_at")?,
        })
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn create(&self, user: User) -> DomainResult<User> {
        let query = r#"
            INSERT INTO users (id, phone_number, password_hash, created_at, updated_at, deleted_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.phone_number)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.deleted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("create user", e))?;

        tracing::debug!(user_id = %user.id, "User row inserted");
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<User> {
        let query = format!(
            "SELECT {} FROM users WHERE id = ? AND deleted_at IS NULL LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find user by id", e))?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::not_found("user")),
        }
    }

    async fn find_by_phone(&self, phone_number: &str) -> DomainResult<User> {
        let query = format!(
            "SELECT {} FROM users WHERE phone_number = ? AND deleted_at IS NULL LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find user by phone", e))?;

        match row {
            Some(row) => Self::row_to_user(&row),
            None => Err(DomainError::not_found("user")),
        }
    }

    async fn exists_by_phone(&self, phone_number: &str) -> DomainResult<bool> {
        let query = r#"
            SELECT COUNT(*) AS count
            FROM users
            WHERE phone_number = ? AND deleted_at IS NULL
        "#;

        let row = sqlx::query(query)
            .bind(phone_number)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("check user phone", e))?;

        let count: i64 = column(&row, "count")?;
        Ok(count > 0)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let query = r#"
            UPDATE users
            SET phone_number = ?, password_hash = ?, updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
        "#;

        let result = sqlx::query(query)
            .bind(&user.phone_number)
            .bind(&user.password_hash)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("update user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }

        Ok(user)
    }

    async fn delete(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE users SET deleted_at = ?, updated_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| storage_error("delete user", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("user"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabasePool;
    use cf_shared::DatabaseConfig;

    async fn repository() -> MySqlUserRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = DatabasePool::new(DatabaseConfig::new(url)).await.unwrap();
        pool.run_migrations().await.unwrap();
        MySqlUserRepository::new(pool.get_pool().clone())
    }

    fn unique_phone() -> String {
        let suffix = Uuid::new_v4().as_u128() % 10_000_000_000;
        format!("+1{:010}", suffix)
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance (DATABASE_URL)"]
    async fn test_create_and_find_by_phone() {
        let repo = repository().await;
        let phone = unique_phone();
        let user = User::new(phone.clone(), "$2b$04$hash".to_string(), Utc::now());

        repo.create(user.clone()).await.unwrap();

        let found = repo.find_by_phone(&phone).await.unwrap();
        assert_eq!(found.id, user.id);
        assert!(repo.exists_by_phone(&phone).await.unwrap());
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance (DATABASE_URL)"]
    async fn test_duplicate_live_phone_is_rejected() {
        let repo = repository().await;
        let phone = unique_phone();

        repo.create(User::new(phone.clone(), "h1".to_string(), Utc::now()))
            .await
            .unwrap();
        let err = repo
            .create(User::new(phone, "h2".to_string(), Utc::now()))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance (DATABASE_URL)"]
    async fn test_soft_deleted_user_frees_phone() {
        let repo = repository().await;
        let phone = unique_phone();
        let user = User::new(phone.clone(), "h1".to_string(), Utc::now());

        repo.create(user.clone()).await.unwrap();
        repo.delete(user.id, Utc::now()).await.unwrap();

        assert!(repo.find_by_id(user.id).await.unwrap_err().is_not_found());
        repo.create(User::new(phone, "h2".to_string(), Utc::now()))
            .await
            .unwrap();
    }
}
