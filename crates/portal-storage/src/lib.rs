//! Key store backends for the portal URL shortener.

pub mod memory;

pub use memory::InMemoryKeyStore;
pub use portal_core::KeyStore;
