//! Mock implementation of RevocationRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::clock::Clock;
use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;

use super::r#trait::RevocationRepository;

/// Mock revocation repository with a switch to simulate an unreachable store
pub struct MockRevocationRepository {
    entries: Arc<RwLock<HashMap<String, RevocationEntry>>>,
    clock: Arc<dyn Clock>,
    failing: AtomicBool,
    lookups: AtomicUsize,
}

impl MockRevocationRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            clock,
            failing: AtomicBool::new(false),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Make every call fail until switched back
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of `is_blacklisted` calls seen
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::store("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl RevocationRepository for MockRevocationRepository {
    async fn add(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<(), DomainError> {
        self.check_available()?;
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        entries
            .entry(token.to_string())
            .or_insert_with(|| RevocationEntry::new(token, user_id, expires_at, now));
        Ok(())
    }

    async fn is_blacklisted(&self, token: &str) -> Result<bool, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;
        let now = self.clock.now();
        let entries = self.entries.read().await;
        Ok(entries.get(token).map_or(false, |e| e.is_active_at(now)))
    }

    async fn cleanup_expired(&self) -> Result<usize, DomainError> {
        self.check_available()?;
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, e| e.is_active_at(now));
        Ok(before - entries.len())
    }

    async fn find(&self, token: &str) -> Result<Option<RevocationEntry>, DomainError> {
        self.check_available()?;
        let entries = self.entries.read().await;
        Ok(entries.get(token).cloned())
    }
}
