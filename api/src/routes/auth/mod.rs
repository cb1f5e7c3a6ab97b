//! Session endpoints
//!
//! - Token refresh (rotation through the `refresh_token` cookie)
//! - Logout (revocation of the presented refresh token)
//! - Current identity, behind the access token gate

pub mod logout;
pub mod me;
pub mod refresh;

pub use logout::logout;
pub use me::me;
pub use refresh::refresh;
