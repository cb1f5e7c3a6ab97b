//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management and migrations
//! - Revocation list and user lookup repositories

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::{MySqlRevocationRepository, MySqlUserRepository};
