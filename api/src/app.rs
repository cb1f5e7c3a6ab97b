//! Application state and factory

use std::sync::Arc;

use actix_web::{web, App};

use pb_core::clock::Clock;
use pb_core::repositories::{RevocationRepository, UserRepository};
use pb_core::services::token::{SessionService, TokenCodec, TokenServiceConfig};
use pb_shared::config::{AuthConfig, CookieConfig};

use crate::middleware::{AuthGate, JwtAuth};
use crate::routes::{auth, health::health_check};

/// Shared state handed to every worker
pub struct AppState {
    pub sessions: Arc<SessionService>,
    pub gate: Arc<AuthGate>,
    pub cookie: CookieConfig,
}

impl AppState {
    /// Wire the session services around one codec and one revocation store
    pub fn new(
        auth: &AuthConfig,
        clock: Arc<dyn Clock>,
        revocations: Arc<dyn RevocationRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let token_config = TokenServiceConfig::from(&auth.jwt);
        let codec = Arc::new(TokenCodec::new(&token_config, clock.clone()));

        Self {
            sessions: Arc::new(SessionService::new(
                codec.clone(),
                token_config,
                clock,
                revocations.clone(),
            )),
            gate: Arc::new(AuthGate::new(codec, revocations, users)),
            cookie: auth.cookie.clone(),
        }
    }
}

/// Create and configure the application
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let gate = app_state.gate.clone();

    App::new()
        .app_data(app_state)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/refresh", web::post().to(auth::refresh))
                    .route("/logout", web::post().to(auth::logout))
                    .service(
                        web::resource("/me")
                            .wrap(JwtAuth::new(gate))
                            .route(web::get().to(auth::me)),
                    ),
            ),
        )
}
