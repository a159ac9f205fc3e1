//! MySQL implementation of the OtpRepository trait.
//!
//! Consumption is a single conditional `UPDATE`; the affected-row count tells
//! concurrent verifiers which one of them won.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use cf_core::domain::entities::otp_code::OtpCode;
use cf_core::errors::{DomainError, DomainResult};
use cf_core::repositories::OtpRepository;

use super::{column, parse_uuid, storage_error};

const OTP_COLUMNS: &str = "id, phone_number, code, expires_at, is_used, created_at";

pub struct MySqlOtpRepository {
    pool: MySqlPool,
}

impl MySqlOtpRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_otp(row: &MySqlRow) -> DomainResult<OtpCode> {
        let id: String = column(row, "id")?;

        Ok(OtpCode {
            id: parse_uuid("otp_codes.id", &id)?,
            phone_number: column(row, "phone_number")?,
            code: column(row, "code")?,
            expires_at: column(row, "expires_at")?,
            is_used: column(row, "is_used")?,
            created_at: column(row, "created_at")?,
        })
    }
}

#[async_trait]
impl OtpRepository for MySqlOtpRepository {
    async fn create(&self, otp: OtpCode) -> DomainResult<OtpCode> {
        let query = r#"
            INSERT INTO otp_codes (id, phone_number, code, expires_at, is_used, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(otp.id.to_string())
            .bind(&otp.phone_number)
            .bind(&otp.code)
            .bind(otp.expires_at)
            .bind(otp.is_used)
            .bind(otp.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("create otp", e))?;

        Ok(otp)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<OtpCode> {
        let query = format!("SELECT {} FROM otp_codes WHERE id = ? LIMIT 1", OTP_COLUMNS);

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find otp", e))?;

        match row {
            Some(row) => Self::row_to_otp(&row),
            None => Err(DomainError::not_found("otp code")),
        }
    }

    async fn find_active(
        &self,
        phone_number: &str,
        code: &str,
        now: DateTime<Utc>,
    ) -> DomainResult<OtpCode> {
        let query = format!(
            r#"SELECT {} FROM otp_codes
               WHERE phone_number = ? AND code = ? AND is_used = FALSE AND expires_at > ?
               ORDER BY created_at DESC
               LIMIT 1"#,
            OTP_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(phone_number)
            .bind(code)
            .bind(now)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("find active otp", e))?;

        match row {
            Some(row) => Self::row_to_otp(&row),
            None => Err(DomainError::not_found("otp code")),
        }
    }

    async fn mark_as_used(&self, id: Uuid, now: DateTime<Utc>) -> DomainResult<bool> {
        let query = r#"
            UPDATE otp_codes
            SET is_used = TRUE
            WHERE id = ? AND is_used = FALSE AND expires_at > ?
        "#;

        let result = sqlx::query(query)
            .bind(id.to_string())
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("mark otp used", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM otp_codes WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("delete expired otps", e))?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DatabasePool;
    use cf_shared::DatabaseConfig;
    use chrono::Duration;

    async fn repository() -> MySqlOtpRepository {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
        let pool = DatabasePool::new(DatabaseConfig::new(url)).await.unwrap();
        pool.run_migrations().await.unwrap();
        MySqlOtpRepository::new(pool.get_pool().clone())
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance (DATABASE_URL)"]
    async fn test_code_is_consumed_once() {
        let repo = repository().await;
        let now = Utc::now();
        let otp = OtpCode::with_code("+15550001111".to_string(), "123456".to_string(), now, 5);
        repo.create(otp.clone()).await.unwrap();

        let found = repo.find_active("+15550001111", "123456", now).await.unwrap();
        assert_eq!(found.id, otp.id);

        assert!(repo.mark_as_used(otp.id, now).await.unwrap());
        assert!(!repo.mark_as_used(otp.id, now).await.unwrap());
        assert!(repo.find_by_id(otp.id).await.unwrap().is_used);
    }

    #[tokio::test]
    #[ignore = "requires a running MySQL instance (DATABASE_URL)"]
    async fn test_expired_code_is_neither_found_nor_consumed() {
        let repo = repository().await;
        let issued = Utc::now() - Duration::minutes(10);
        let otp = OtpCode::with_code("+15550002222".to_string(), "654321".to_string(), issued, 5);
        repo.create(otp.clone()).await.unwrap();

        let now = Utc::now();
        assert!(repo
            .find_active("+15550002222", "654321", now)
            .await
            .unwrap_err()
            .is_not_found());
        assert!(!repo.mark_as_used(otp.id, now).await.unwrap());
        assert!(repo.delete_expired(now).await.unwrap() >= 1);
    }
}
