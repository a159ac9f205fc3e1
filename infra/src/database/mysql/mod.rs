//! MySQL implementations of the repository contracts

mod otp_repository_impl;
mod subscription_repository_impl;
mod user_repository_impl;

pub use otp_repository_impl::MySqlOtpRepository;
pub use subscription_repository_impl::MySqlSubscriptionRepository;
pub use user_repository_impl::MySqlUserRepository;

use cf_core::errors::DomainError;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row};
use uuid::Uuid;

/// Map a SQLx failure to the domain's storage error
pub(crate) fn storage_error(operation: &str, err: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            tracing::warn!(operation, "Unique constraint violated: {}", db_err);
            return DomainError::storage(format!("{}: duplicate entry", operation));
        }
    }

    tracing::error!(operation, "Database error: {}", err);
    DomainError::storage(format!("{}: {}", operation, err))
}

/// Decode a named column, reporting the column on failure
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("failed to read column {}: {}", name, e)))
}

/// Parse a CHAR(36) id column
pub(crate) fn parse_uuid(column: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value)
        .map_err(|e| DomainError::storage(format!("invalid UUID in {}: {}", column, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_uuid_rejects_garbage() {
        let err = parse_uuid("users.id", "not-a-uuid").unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));
    }

    #[test]
    fn test_storage_error_keeps_operation_context() {
        let err = storage_error("find user", sqlx::Error::RowNotFound);
        assert!(err.to_string().contains("find user"));
    }
}
