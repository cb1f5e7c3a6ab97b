//! # Infrastructure Layer
//!
//! Concrete stores behind the `pb_core` repository traits.
//!
//! - **Database**: MySQL pool, migrations and repositories using SQLx
//! - **Memory**: process-local revocation store, used by tests and
//!   single-instance deployments
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// In-memory store implementations
pub mod memory;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlRevocationRepository, MySqlUserRepository};
pub use memory::InMemoryRevocationRepository;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[cfg(feature = "mysql")]
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[cfg(feature = "mysql")]
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
