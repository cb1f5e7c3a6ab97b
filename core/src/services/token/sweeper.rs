//! Background removal of expired revocation entries

use std::sync::Arc;
use std::time::Duration;

use pb_shared::config::SweeperConfig;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::errors::DomainError;
use crate::repositories::RevocationRepository;

/// Periodically calls [`RevocationRepository::cleanup_expired`]
///
/// A failed sweep is logged and retried on the next tick. The task runs for
/// the lifetime of the process.
pub struct RevocationSweeper {
    store: Arc<dyn RevocationRepository>,
    config: SweeperConfig,
}

impl RevocationSweeper {
    pub fn new(store: Arc<dyn RevocationRepository>, config: SweeperConfig) -> Self {
        Self { store, config }
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.config.interval_seconds.max(1))
    }

    /// Run a single sweep
    pub async fn run_once(&self) -> Result<usize, DomainError> {
        debug!("running revocation sweep");
        let removed = self.store.cleanup_expired().await?;
        info!(removed, "swept expired revocation entries");
        Ok(removed)
    }

    /// Spawn the sweep loop; the first sweep happens one interval from now
    pub fn start(self: Arc<Self>) -> JoinHandle<()> {
        let period = self.interval();

        tokio::spawn(async move {
            info!(interval_seconds = period.as_secs(), "revocation sweeper started");

            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if let Err(e) = self.run_once().await {
                    error!(error = %e, "revocation sweep failed");
                }
            }
        })
    }
}
