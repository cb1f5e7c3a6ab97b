//! Token entities for JWT-based sessions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::TokenError;

/// The two kinds of token a session is made of
///
/// The class picks the signing secret and the TTL, and is embedded in the
/// claims so a token of one class can never be accepted as the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenClass {
    /// Short-lived credential for individual API requests
    Access,
    /// Longer-lived credential exchanged for a new pair; the unit of revocation
    Refresh,
}

impl TokenClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenClass::Access => "access",
            TokenClass::Refresh => "refresh",
        }
    }
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenClass {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access" => Ok(TokenClass::Access),
            "refresh" => Ok(TokenClass::Refresh),
            other => Err(TokenError::UnknownTokenType {
                value: other.to_string(),
            }),
        }
    }
}

/// Claims structure for JWT payload
///
/// `token_type` stays a plain string on the wire. Decoding never fails on an
/// unexpected value; the mismatch is reported as a class error instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (decimal user ID)
    pub sub: String,

    /// `"access"` or `"refresh"`
    pub token_type: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp, always equal to `iat`
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token ID, keeps two tokens minted in the same second distinct
    pub jti: String,
}

impl Claims {
    /// Creates claims for `user_id` valid from `issued_at` until `expires_at`
    pub fn new(
        user_id: i64,
        class: TokenClass,
        issued_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        let iat = issued_at.timestamp();
        Self {
            sub: user_id.to_string(),
            token_type: class.as_str().to_string(),
            iat,
            nbf: iat,
            exp: expires_at.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parses the embedded class
    pub fn token_class(&self) -> Result<TokenClass, TokenError> {
        self.token_type.parse()
    }

    /// Parses the subject back into a user ID
    pub fn user_id(&self) -> Result<i64, TokenError> {
        self.sub.parse().map_err(|_| TokenError::MalformedSubject)
    }

    /// Expiry as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Access/refresh pair handed to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,

    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub expires_in: i64,
}
