//! Configuration for the token services

use chrono::{DateTime, Duration, Utc};
use pb_shared::config::JwtConfig;

use crate::domain::entities::token::TokenClass;
use crate::errors::TokenError;

/// Secrets and TTLs for both token classes
///
/// Built once from the loaded [`JwtConfig`] and handed to every component
/// at construction; nothing re-reads the environment afterwards.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    pub access_secret: String,
    pub access_ttl_seconds: String,
    pub refresh_secret: String,
    pub refresh_ttl_seconds: String,
}

impl TokenServiceConfig {
    /// Secret used to sign and verify tokens of `class`
    pub fn secret(&self, class: TokenClass) -> &str {
        match class {
            TokenClass::Access => &self.access_secret,
            TokenClass::Refresh => &self.refresh_secret,
        }
    }

    /// TTL of `class` in whole seconds
    ///
    /// Anything that is not a positive integer is a configuration error.
    pub fn ttl_seconds(&self, class: TokenClass) -> Result<i64, TokenError> {
        match self.raw_ttl(class).1.trim().parse::<i64>() {
            Ok(seconds) if seconds > 0 => Ok(seconds),
            _ => Err(self.invalid_ttl(class)),
        }
    }

    pub fn ttl(&self, class: TokenClass) -> Result<Duration, TokenError> {
        let seconds = self.ttl_seconds(class)?;
        Duration::try_seconds(seconds).ok_or_else(|| self.invalid_ttl(class))
    }

    /// Expiry of a token of `class` issued at `issued_at`
    ///
    /// A TTL that pushes the expiry past the representable range is reported
    /// as a configuration error.
    pub fn expiry(
        &self,
        class: TokenClass,
        issued_at: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, TokenError> {
        let ttl = self.ttl(class)?;
        issued_at
            .checked_add_signed(ttl)
            .ok_or_else(|| self.invalid_ttl(class))
    }

    /// Check both TTLs up front against `now`
    pub fn validate(&self, now: DateTime<Utc>) -> Result<(), TokenError> {
        self.expiry(TokenClass::Access, now)?;
        self.expiry(TokenClass::Refresh, now)?;
        Ok(())
    }

    fn raw_ttl(&self, class: TokenClass) -> (&'static str, &str) {
        match class {
            TokenClass::Access => ("access_ttl_seconds", &self.access_ttl_seconds),
            TokenClass::Refresh => ("refresh_ttl_seconds", &self.refresh_ttl_seconds),
        }
    }

    fn invalid_ttl(&self, class: TokenClass) -> TokenError {
        let (setting, raw) = self.raw_ttl(class);
        TokenError::ConfigurationInvalid {
            setting: setting.to_string(),
            value: raw.to_string(),
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            access_secret: jwt.access_secret.clone(),
            access_ttl_seconds: jwt.access_ttl_seconds.clone(),
            refresh_secret: jwt.refresh_secret.clone(),
            refresh_ttl_seconds: jwt.refresh_ttl_seconds.clone(),
        }
    }
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self::from(&JwtConfig::default())
    }
}
