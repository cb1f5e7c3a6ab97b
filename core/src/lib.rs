//! # PayBuy Core
//!
//! Session lifecycle for the PayBuy backend: token pair issuance, signature
//! and claim validation, refresh-token revocation and background sweeping.
//! Persistence and HTTP live in `pb_infra` and `pb_api`; this crate only
//! defines the contracts they plug into.

pub mod clock;
pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use clock::{Clock, ManualClock, SystemClock};
pub use domain::{Claims, RevocationEntry, TokenClass, TokenPair, User};
pub use errors::{DomainError, DomainResult, TokenError};
pub use repositories::{RevocationRepository, UserRepository};
pub use services::{
    RevocationPolicy, RevocationSweeper, SessionService, TokenCodec, TokenIssuer,
    TokenServiceConfig, TokenValidator,
};
