pub mod revocation;
pub mod user;

pub use revocation::RevocationRepository;
pub use user::UserRepository;

#[cfg(test)]
pub use revocation::MockRevocationRepository;
