//! Access/refresh pair issuance

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::clock::Clock;
use crate::domain::entities::token::{Claims, TokenClass, TokenPair};
use crate::errors::TokenError;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Mints token pairs for a user
pub struct TokenIssuer {
    codec: Arc<TokenCodec>,
    config: TokenServiceConfig,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(codec: Arc<TokenCodec>, config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            codec,
            config,
            clock,
        }
    }

    /// Issue a fresh pair for `user_id`
    ///
    /// Both tokens share one issuance instant. `expires_in` is the access
    /// token TTL; the refresh expiry is only in the refresh token's claims.
    pub fn issue_pair(&self, user_id: i64) -> Result<TokenPair, TokenError> {
        let now = self.clock.now();
        let access_ttl = self.config.ttl_seconds(TokenClass::Access)?;
        self.config.validate(now)?;

        let access_token = self.issue_token(user_id, TokenClass::Access, now)?;
        let refresh_token = self.issue_token(user_id, TokenClass::Refresh, now)?;

        debug!(user_id, "issued token pair");

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: access_ttl,
        })
    }

    /// Sign a single token of `class` issued at `issued_at`
    pub fn issue_token(
        &self,
        user_id: i64,
        class: TokenClass,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = self.config.expiry(class, issued_at)?;
        let claims = Claims::new(user_id, class, issued_at, expires_at);
        self.codec.sign(&claims)
    }

    /// Refresh TTL, used as the refresh cookie's max age
    pub fn refresh_ttl_seconds(&self) -> Result<i64, TokenError> {
        self.config.ttl_seconds(TokenClass::Refresh)
    }
}
