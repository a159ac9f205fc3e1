//! Registration and login flows

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::entities::session::SessionToken;
use crate::domain::entities::user::User;
use crate::errors::DomainResult;
use crate::services::{CredentialServiceTrait, OtpServiceTrait};

#[async_trait]
pub trait AuthUseCase: Send + Sync {
    /// Plain registration without phone verification
    async fn register(&self, phone: &str, password: &str) -> DomainResult<User>;

    /// Consume an OTP for `phone`, then register
    ///
    /// Registration is not attempted when the code is rejected.
    async fn register_with_otp(&self, phone: &str, password: &str, code: &str) -> DomainResult<User>;

    /// Authenticate and issue a session token
    async fn login(&self, phone: &str, password: &str) -> DomainResult<SessionToken>;
}

pub struct AuthInteractor<C: CredentialServiceTrait, O: OtpServiceTrait> {
    credentials: Arc<C>,
    otp: Arc<O>,
}

impl<C: CredentialServiceTrait, O: OtpServiceTrait> AuthInteractor<C, O> {
    pub fn new(credentials: Arc<C>, otp: Arc<O>) -> Self {
        Self { credentials, otp }
    }
}

#[async_trait]
impl<C: CredentialServiceTrait, O: OtpServiceTrait> AuthUseCase for AuthInteractor<C, O> {
    async fn register(&self, phone: &str, password: &str) -> DomainResult<User> {
        self.credentials.register(phone, password).await
    }

    async fn register_with_otp(&self, phone: &str, password: &str, code: &str) -> DomainResult<User> {
        self.otp.verify(phone, code).await?;
        self.credentials.register(phone, password).await
    }

    async fn login(&self, phone: &str, password: &str) -> DomainResult<SessionToken> {
        let user = self.credentials.authenticate(phone, password).await?;
        self.credentials.issue_session_token(&user)
    }
}
