//! Revocation sweeper configuration

use serde::{Deserialize, Serialize};

/// How often expired blacklist rows are purged
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SweeperConfig {
    /// Interval between sweeps, in seconds
    pub interval_seconds: u64,
}

impl Default for SweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 3600, // Run every hour
        }
    }
}

impl SweeperConfig {
    /// Create from environment variables
    ///
    /// A zero or unparsable interval keeps the default, since a zero-period
    /// timer cannot be scheduled.
    pub fn from_env() -> Self {
        let interval_seconds = std::env::var("REVOCATION_SWEEP_INTERVAL_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(Self::default().interval_seconds);
        Self { interval_seconds }
    }
}
