//! Token service module for JWT sessions
//!
//! - HS256 signing and verification keyed by token class
//! - Access/refresh pair issuance
//! - Validation with or without a revocation check
//! - Login, refresh and logout flows
//! - Background sweeping of expired revocation entries

mod codec;
mod config;
mod issuer;
mod session;
mod sweeper;
mod validator;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use issuer::TokenIssuer;
pub use session::SessionService;
pub use sweeper::RevocationSweeper;
pub use validator::{RevocationPolicy, TokenValidator};
