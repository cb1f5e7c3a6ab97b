use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

use pb_api::{create_app, telemetry, AppState};
use pb_core::clock::{Clock, SystemClock};
use pb_core::services::token::{RevocationSweeper, TokenServiceConfig};
use pb_infra::{DatabasePool, MySqlRevocationRepository, MySqlUserRepository};
use pb_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    telemetry::init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting PayBuy API server");

    if config.auth.jwt.is_using_default_secret() {
        warn!("JWT secrets are still the shipped defaults; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    TokenServiceConfig::from(&config.auth.jwt)
        .validate(clock.now())
        .context("invalid token configuration")?;

    let db = DatabasePool::new(&config.database)
        .await
        .context("failed to connect to database")?;
    db.health_check()
        .await
        .context("database is not answering")?;
    db.run_migrations().await.context("failed to run migrations")?;

    let revocations = Arc::new(MySqlRevocationRepository::new(
        db.get_pool().clone(),
        clock.clone(),
    ));
    let users = Arc::new(MySqlUserRepository::new(db.get_pool().clone()));

    let sweeper = Arc::new(RevocationSweeper::new(
        revocations.clone(),
        config.sweeper.clone(),
    ));
    let _sweeper_task = sweeper.start();

    let state = web::Data::new(AppState::new(&config.auth, clock, revocations, users));

    let bind_address = config.server.bind_address();
    info!(%bind_address, "Server listening");

    let served = HttpServer::new(move || create_app(state.clone()).wrap(TracingLogger::default()))
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await;

    db.close().await;
    served?;

    Ok(())
}
