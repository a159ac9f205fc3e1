use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::config::TokenServiceConfig;
use crate::clock::Clock;
use crate::domain::entities::session::{Claims, SessionToken};
use crate::errors::{AuthError, DomainError, DomainResult};

/// Issues and verifies stateless HS256 session tokens.
///
/// Expiry is checked against the injected clock rather than inside
/// `jsonwebtoken`, so a token is valid strictly before `exp`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.jwt_secret.as_bytes();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl: Duration::hours(config.ttl_hours),
            clock,
        }
    }

    /// Sign a token asserting `phone_number`, expiring `ttl` from now
    pub fn issue(&self, phone_number: &str) -> DomainResult<SessionToken> {
        let claims = Claims::new(phone_number, self.clock.now(), self.ttl);
        let expires_at = claims
            .expires_at()
            .ok_or(DomainError::Auth(AuthError::TokenGenerationFailed))?;

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to sign session token");
                DomainError::Auth(AuthError::TokenGenerationFailed)
            })?;

        Ok(SessionToken { token, expires_at })
    }

    /// Check signature and expiry; every failure is `Unauthenticated`
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                tracing::debug!(reason = ?e.kind(), "Session token rejected");
                DomainError::Auth(AuthError::Unauthenticated)
            })?;

        let claims = token_data.claims;
        if claims.is_expired_at(self.clock.now()) {
            tracing::debug!("Session token expired");
            return Err(AuthError::Unauthenticated.into());
        }
        if claims.sub.is_empty() {
            return Err(AuthError::Unauthenticated.into());
        }

        Ok(claims)
    }

    /// Verify and return the phone number the token was issued for
    pub fn verify_subject(&self, token: &str) -> DomainResult<String> {
        self.verify(token).map(|claims| claims.sub)
    }
}
