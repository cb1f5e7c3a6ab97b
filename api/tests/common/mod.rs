//! Fixtures shared by the API integration tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use pb_api::AppState;
use pb_core::clock::ManualClock;
use pb_core::domain::entities::user::User;
use pb_core::errors::DomainError;
use pb_core::repositories::UserRepository;
use pb_infra::InMemoryRevocationRepository;
use pb_shared::config::{AuthConfig, CookieConfig, JwtConfig};

/// Fixed user table that counts lookups
pub struct StaticUsers {
    users: HashMap<i64, User>,
    lookups: AtomicUsize,
}

impl StaticUsers {
    pub fn with_ids(ids: &[i64]) -> Self {
        let users = ids
            .iter()
            .map(|&id| {
                (
                    id,
                    User {
                        id,
                        first_name: "Test".to_string(),
                        last_name: format!("User{}", id),
                        email: format!("user{}@example.com", id),
                        created_at: Utc::now(),
                    },
                )
            })
            .collect();

        Self {
            users,
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for StaticUsers {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.get(&id).cloned())
    }
}

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub clock: Arc<ManualClock>,
    pub revocations: Arc<InMemoryRevocationRepository>,
    pub users: Arc<StaticUsers>,
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        jwt: JwtConfig::new("test-access-secret", "test-refresh-secret")
            .with_access_ttl(900)
            .with_refresh_ttl(604800),
        cookie: CookieConfig::default(),
    }
}

pub fn test_context() -> TestContext {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ));
    let revocations = Arc::new(InMemoryRevocationRepository::new(clock.clone()));
    let users = Arc::new(StaticUsers::with_ids(&[42]));

    let state = web::Data::new(AppState::new(
        &auth_config(),
        clock.clone(),
        revocations.clone(),
        users.clone(),
    ));

    TestContext {
        state,
        clock,
        revocations,
        users,
    }
}
