//! Revocation list held in a concurrent map.
//!
//! Entries are sharded by token, so inserts and lookups on different tokens
//! never contend. Duplicate inserts go through the map's entry API, which
//! keeps the first write without any outer lock.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;

use pb_core::clock::Clock;
use pb_core::domain::entities::revocation::RevocationEntry;
use pb_core::errors::DomainError;
use pb_core::repositories::RevocationRepository;

/// In-memory implementation of RevocationRepository
pub struct InMemoryRevocationRepository {
    entries: DashMap<String, RevocationEntry>,
    clock: Arc<dyn Clock>,
}

impl InMemoryRevocationRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Number of stored entries, expired ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RevocationRepository for InMemoryRevocationRepository {
    async fn add(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        let now = self.clock.now();
        self.entries
            .entry(token.to_string())
            .or_insert_with(|| RevocationEntry::new(token, user_id, expires_at, now));
        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        let now = self.clock.now();
        Ok(self
            .entries
            .get(token)
            .map_or(false, |entry| entry.is_active_at(now)))
    }

    async fn cleanup_expired(&self) -> Result<usize, DomainError> {
        let now = self.clock.now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = entry.is_active_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        debug!(removed, remaining = self.entries.len(), "in-memory blacklist swept");
        Ok(removed)
    }

    async fn find(&self, token: &str) -> Result<Option<RevocationEntry>, DomainError> {
        Ok(self.entries.get(token).map(|entry| entry.value().clone()))
    }
}
