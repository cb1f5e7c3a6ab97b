//! Revocation list persistence contract.
//!
//! The blacklist is the only state the session layer owns. Implementations
//! must tolerate concurrent readers and writers, and must keep duplicate
//! inserts race-safe through idempotent writes rather than locking.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

#[async_trait]
pub trait RevocationRepository: Send + Sync {
    /// Blacklist `token` until `expires_at`
    ///
    /// Inserting a token that is already present is a no-op: the first
    /// write's metadata is kept and no error is returned.
    async fn add(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError>;

    /// True only if a matching entry exists whose `expires_at` is still in
    /// the future. Stale entries awaiting the sweeper never match.
    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError>;

    /// Delete every entry with `expires_at <= now`, returning how many went
    async fn cleanup_expired(&self) -> Result<usize, DomainError>;

    /// Fetch the stored entry regardless of expiry
    async fn find(&self, token: &str) -> Result<Option<RevocationEntry>, DomainError>;
}
