//! Revoked refresh token record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One blacklisted refresh token
///
/// Keyed by the literal token string. Revoking one token leaves every other
/// token of the same user untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationEntry {
    /// Signed token string
    pub token: String,

    /// Owner of the token
    pub user_id: i64,

    /// After this instant the entry no longer blocks anything
    pub expires_at: DateTime<Utc>,

    /// When the entry was written
    pub created_at: DateTime<Utc>,
}

impl RevocationEntry {
    pub fn new(
        token: impl Into<String>,
        user_id: i64,
        expires_at: DateTime<Utc>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            token: token.into(),
            user_id,
            expires_at,
            created_at,
        }
    }

    /// Whether the entry still blocks its token at `now`
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}
