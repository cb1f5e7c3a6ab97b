//! Process-local store implementations

mod revocation_store;

pub use revocation_store::InMemoryRevocationRepository;
