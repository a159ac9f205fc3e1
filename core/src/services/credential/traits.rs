//! Contract consumed by the orchestration layer

use async_trait::async_trait;

use crate::domain::entities::session::SessionToken;
use crate::domain::entities::user::User;
use crate::errors::DomainResult;

#[async_trait]
pub trait CredentialServiceTrait: Send + Sync {
    /// Create a user with a freshly hashed password
    ///
    /// Fails with `AuthError::UserAlreadyExists` if a live user holds the phone.
    async fn register(&self, phone_number: &str, password: &str) -> DomainResult<User>;

    /// Check a phone/password pair
    ///
    /// Unknown phone and wrong password both fail with
    /// `AuthError::InvalidCredentials`.
    async fn authenticate(&self, phone_number: &str, password: &str) -> DomainResult<User>;

    /// Sign a session token whose subject is the user's phone number
    fn issue_session_token(&self, user: &User) -> DomainResult<SessionToken>;

    /// Recover the phone number from a session token
    fn verify_session_token(&self, token: &str) -> DomainResult<String>;

    /// Resolve a live user by phone, failing with `AuthError::UserNotFound`
    async fn find_user_by_phone(&self, phone_number: &str) -> DomainResult<User>;
}
