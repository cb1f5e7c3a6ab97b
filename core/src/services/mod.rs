//! Business services containing the session use cases.

pub mod token;

pub use token::{
    RevocationPolicy, RevocationSweeper, SessionService, TokenCodec, TokenIssuer,
    TokenServiceConfig, TokenValidator,
};
