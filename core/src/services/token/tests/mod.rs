mod sweeper_tests;
mod validator_tests;

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::clock::{Clock, ManualClock};
use crate::services::token::{TokenCodec, TokenServiceConfig};

pub(crate) fn test_config() -> TokenServiceConfig {
    TokenServiceConfig {
        access_secret: "test-access-secret".to_string(),
        access_ttl_seconds: "900".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        refresh_ttl_seconds: "604800".to_string(),
    }
}

pub(crate) fn fixed_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
    ))
}

pub(crate) fn codec_with(config: &TokenServiceConfig, clock: Arc<ManualClock>) -> Arc<TokenCodec> {
    let clock: Arc<dyn Clock> = clock;
    Arc::new(TokenCodec::new(config, clock))
}
