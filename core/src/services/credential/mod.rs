//! Credential service: password hashing, authentication and session tokens

mod config;
mod service;
mod traits;


pub use config::CredentialServiceConfig;
pub use service::CredentialService;
pub use traits::CredentialServiceTrait;
