//! Unit tests for the revocation sweeper

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use pb_shared::config::SweeperConfig;
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::clock::Clock;
use crate::domain::entities::revocation::RevocationEntry;
use crate::errors::DomainError;
use crate::repositories::{MockRevocationRepository, RevocationRepository};
use crate::services::token::RevocationSweeper;

use super::fixed_clock;

/// Store that reports each sweep and fails the first `failures` of them
struct SweepProbe {
    calls: AtomicUsize,
    failures: usize,
    tx: mpsc::UnboundedSender<usize>,
}

#[async_trait]
impl RevocationRepository for SweepProbe {
    async fn add(&self, _: &str, _: i64, _: DateTime<Utc>) -> Result<(), DomainError> {
        Ok(())
    }

    async fn is_blacklisted(&self, _: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn cleanup_expired(&self) -> Result<usize, DomainError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let _ = self.tx.send(call);
        if call <= self.failures {
            return Err(DomainError::store("database is down"));
        }
        Ok(0)
    }

    async fn find(&self, _: &str) -> Result<Option<RevocationEntry>, DomainError> {
        Ok(None)
    }
}

#[tokio::test]
async fn test_run_once_removes_expired() {
    let clock = fixed_clock();
    let store = Arc::new(MockRevocationRepository::new(clock.clone()));
    store.add("old", 1, clock.now() + Duration::seconds(10)).await.unwrap();
    store.add("new", 2, clock.now() + Duration::seconds(100)).await.unwrap();
    clock.advance(Duration::seconds(10));

    let sweeper = RevocationSweeper::new(store.clone(), SweeperConfig::default());
    assert_eq!(sweeper.run_once().await.unwrap(), 1);
    assert!(store.find("old").await.unwrap().is_none());
    assert!(store.find("new").await.unwrap().is_some());
    assert_eq!(sweeper.run_once().await.unwrap(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_first_sweep_after_one_interval() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let store = Arc::new(SweepProbe {
        calls: AtomicUsize::new(0),
        failures: 0,
        tx,
    });
    let sweeper = Arc::new(RevocationSweeper::new(
        store,
        SweeperConfig {
            interval_seconds: 60,
        },
    ));

    let started = Instant::now();
    let handle = sweeper.start();

    assert_eq!(rx.recv().await, Some(1));
    assert!(started.elapsed() >= std::time::Duration::from_secs(60));

    assert_eq!(rx.recv().await, Some(2));
    assert!(started.elapsed() >= std::time::Duration::from_secs(120));

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_survives_failures() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let store = Arc::new(SweepProbe {
        calls: AtomicUsize::new(0),
        failures: 2,
        tx,
    });
    let sweeper = Arc::new(RevocationSweeper::new(
        store.clone(),
        SweeperConfig {
            interval_seconds: 5,
        },
    ));

    let handle = sweeper.start();
    for expected in 1..=3 {
        assert_eq!(rx.recv().await, Some(expected));
    }
    assert!(!handle.is_finished());
    assert_eq!(store.calls.load(Ordering::SeqCst), 3);

    handle.abort();
}
