//! Database module
//!
//! MySQL connection pool, bundled migrations and the SQLx implementations of
//! the `cf_core` repository contracts.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlOtpRepository, MySqlSubscriptionRepository, MySqlUserRepository};
