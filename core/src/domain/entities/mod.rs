//! Domain entities representing core business objects.

pub mod revocation;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

pub use revocation::RevocationEntry;
pub use token::{Claims, TokenClass, TokenPair};
pub use user::User;
