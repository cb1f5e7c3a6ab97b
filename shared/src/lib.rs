//! Shared configuration types for the PayBuy server
//!
//! Every crate in the workspace reads its settings from the types defined
//! here. Values are loaded once at startup by [`AppConfig::from_env`].

pub mod config;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CookieConfig, DatabaseConfig, Environment, JwtConfig, LogFormat,
    LoggingConfig, ServerConfig, SweeperConfig,
};
