//! Configuration module with business-specific sub-modules
//!
//! - `auth` - token secrets, TTLs and refresh cookie attributes
//! - `database` - database connection and pool configuration
//! - `environment` - environment detection and logging configuration
//! - `server` - HTTP bind address
//! - `sweeper` - revocation list cleanup schedule

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod sweeper;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use server::ServerConfig;
pub use sweeper::SweeperConfig;

/// Complete application configuration combining all sub-configurations
///
/// Loaded once at process start and handed to components by value or `Arc`;
/// nothing downstream re-reads the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Revocation sweeper configuration
    #[serde(default)]
    pub sweeper: SweeperConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            sweeper: SweeperConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from a `.env` file (if present) and the process environment
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig {
                jwt: JwtConfig::from_env(),
                cookie: CookieConfig::from_env(environment.is_production()),
            },
            sweeper: SweeperConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }
}
