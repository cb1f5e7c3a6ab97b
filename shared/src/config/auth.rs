//! Token signing and refresh cookie configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration for both token classes
///
/// TTLs are kept as the text they were configured with. They are parsed by the
/// token issuer when a pair is minted, so a bad value is reported to the caller
/// that tried to issue rather than being silently coerced.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// HMAC secret for access tokens
    pub access_secret: String,

    /// Access token lifetime in whole seconds
    pub access_ttl_seconds: String,

    /// HMAC secret for refresh tokens
    pub refresh_secret: String,

    /// Refresh token lifetime in whole seconds
    pub refresh_ttl_seconds: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("access-secret-change-in-production"),
            access_ttl_seconds: String::from("900"),       // 15 minutes
            refresh_secret: String::from("refresh-secret-change-in-production"),
            refresh_ttl_seconds: String::from("604800"),   // 7 days
        }
    }
}

impl JwtConfig {
    /// Create a configuration with explicit secrets and the default TTLs
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token TTL in seconds
    pub fn with_access_ttl(mut self, seconds: i64) -> Self {
        self.access_ttl_seconds = seconds.to_string();
        self
    }

    /// Set refresh token TTL in seconds
    pub fn with_refresh_ttl(mut self, seconds: i64) -> Self {
        self.refresh_ttl_seconds = seconds.to_string();
        self
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret),
            access_ttl_seconds: std::env::var("JWT_ACCESS_TTL_SECONDS")
                .unwrap_or(defaults.access_ttl_seconds),
            refresh_secret: std::env::var("JWT_REFRESH_SECRET")
                .unwrap_or(defaults.refresh_secret),
            refresh_ttl_seconds: std::env::var("JWT_REFRESH_TTL_SECONDS")
                .unwrap_or(defaults.refresh_ttl_seconds),
        }
    }

    /// Check if either secret is still the shipped default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        let defaults = Self::default();
        self.access_secret == defaults.access_secret || self.refresh_secret == defaults.refresh_secret
    }
}

/// Attributes for the `refresh_token` cookie
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie domain; empty means host-only
    #[serde(default)]
    pub domain: String,

    /// Whether the `Secure` flag is set
    #[serde(default)]
    pub secure: bool,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            secure: false,
        }
    }
}

impl CookieConfig {
    /// Create from environment variables; `Secure` follows the environment
    pub fn from_env(secure: bool) -> Self {
        Self {
            domain: std::env::var("COOKIE_DOMAIN").unwrap_or_default(),
            secure,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Refresh cookie configuration
    #[serde(default)]
    pub cookie: CookieConfig,
}
