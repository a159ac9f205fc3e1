//! Password-based credential service

use std::sync::Arc;

use async_trait::async_trait;
use cf_shared::utils::phone::mask_phone_number;

use super::config::CredentialServiceConfig;
use super::traits::CredentialServiceTrait;
use crate::clock::Clock;
use crate::domain::entities::session::SessionToken;
use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::token::TokenService;

pub struct CredentialService<U: UserRepository> {
    user_repository: Arc<U>,
    token_service: Arc<TokenService>,
    clock: Arc<dyn Clock>,
    config: CredentialServiceConfig,
}

impl<U: UserRepository> CredentialService<U> {
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        clock: Arc<dyn Clock>,
        config: CredentialServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            clock,
            config,
        }
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_owned();
        let cost = self.config.bcrypt_cost;

        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing task failed: {}", e),
            })?
            .map_err(|e| DomainError::Internal {
                message: format!("password hashing failed: {}", e),
            })
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();

        let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("password verification task failed: {}", e),
            })?;

        match outcome {
            Ok(matches) => Ok(matches),
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                Ok(false)
            }
        }
    }
}

#[async_trait]
impl<U: UserRepository> CredentialServiceTrait for CredentialService<U> {
    async fn register(&self, phone_number: &str, password: &str) -> DomainResult<User> {
        let masked = mask_phone_number(phone_number);

        if self.user_repository.exists_by_phone(phone_number).await? {
            tracing::info!(phone = %masked, event = "registration_rejected", "Phone already registered");
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(password).await?;
        let user = User::new(phone_number.to_string(), password_hash, self.clock.now());
        let user = self.user_repository.create(user).await?;

        tracing::info!(phone = %masked, user_id = %user.id, event = "user_registered", "User registered");
        Ok(user)
    }

    async fn authenticate(&self, phone_number: &str, password: &str) -> DomainResult<User> {
        let user = match self.user_repository.find_by_phone(phone_number).await {
            Ok(user) => user,
            Err(DomainError::NotFound { .. }) => {
                tracing::info!(
                    phone = %mask_phone_number(phone_number),
                    event = "login_failed",
                    "Authentication failed"
                );
                return Err(AuthError::InvalidCredentials.into());
            }
            Err(e) => return Err(e),
        };

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::info!(
                phone = %mask_phone_number(phone_number),
                event = "login_failed",
                "Authentication failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    fn issue_session_token(&self, user: &User) -> DomainResult<SessionToken> {
        self.token_service.issue(&user.phone_number)
    }

    fn verify_session_token(&self, token: &str) -> DomainResult<String> {
        self.token_service.verify_subject(token)
    }

    async fn find_user_by_phone(&self, phone_number: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_phone(phone_number)
            .await
            .map_err(|e| match e {
                DomainError::NotFound { .. } => AuthError::UserNotFound.into(),
                other => other,
            })
    }
}
