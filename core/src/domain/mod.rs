//! Domain layer containing the session entities.

pub mod entities;

pub use entities::*;
