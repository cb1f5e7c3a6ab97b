//! Login, refresh and logout flows

use std::sync::Arc;

use tracing::info;

use crate::clock::Clock;
use crate::domain::entities::revocation::RevocationEntry;
use crate::domain::entities::token::{TokenClass, TokenPair};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::RevocationRepository;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;
use super::issuer::TokenIssuer;
use super::validator::TokenValidator;

/// Issue/refresh/revoke contract consumed by the credential endpoints
pub struct SessionService {
    issuer: TokenIssuer,
    refresh_validator: TokenValidator,
    codec: Arc<TokenCodec>,
    store: Arc<dyn RevocationRepository>,
    clock: Arc<dyn Clock>,
}

impl SessionService {
    pub fn new(
        codec: Arc<TokenCodec>,
        config: TokenServiceConfig,
        clock: Arc<dyn Clock>,
        store: Arc<dyn RevocationRepository>,
    ) -> Self {
        Self {
            issuer: TokenIssuer::new(codec.clone(), config, clock.clone()),
            refresh_validator: TokenValidator::with_revocation(codec.clone(), store.clone()),
            codec,
            store,
            clock,
        }
    }

    /// Issue a pair after a successful login
    pub fn issue(&self, user_id: i64) -> DomainResult<TokenPair> {
        Ok(self.issuer.issue_pair(user_id)?)
    }

    /// Exchange a refresh token for a new pair
    ///
    /// The presented token must not be revoked. It stays usable until it
    /// expires or is logged out.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let user_id = self
            .refresh_validator
            .validate(refresh_token, TokenClass::Refresh)
            .await?;

        self.issue(user_id)
    }

    /// Revoke a refresh token until its own expiry
    ///
    /// Logging out an already revoked token succeeds and leaves the
    /// existing entry as it was.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<RevocationEntry> {
        let claims = self.codec.verify(refresh_token, TokenClass::Refresh)?;
        let user_id = claims.user_id()?;
        let expires_at = claims.expires_at().ok_or_else(|| DomainError::Internal {
            message: format!("refresh token expiry out of range: {}", claims.exp),
        })?;

        self.store.add(refresh_token, user_id, expires_at).await?;
        info!(user_id, %expires_at, "refresh token revoked");

        // The stored row is the first write; a repeat logout reports it as is.
        let entry = self.store.find(refresh_token).await?.unwrap_or_else(|| {
            RevocationEntry::new(refresh_token, user_id, expires_at, self.clock.now())
        });
        Ok(entry)
    }

    /// Refresh TTL in seconds
    pub fn refresh_ttl_seconds(&self) -> DomainResult<i64> {
        Ok(self.issuer.refresh_ttl_seconds()?)
    }
}
