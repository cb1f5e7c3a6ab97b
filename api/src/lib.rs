//! # PayBuy API
//!
//! Actix-web surface for the session layer: the authentication gate, the
//! refresh and logout endpoints, and process bootstrap helpers.

pub mod app;
pub mod cookies;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod telemetry;

pub use app::{create_app, AppState};
