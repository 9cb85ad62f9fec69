//! Outbound adapters - implementations of domain ports

#[cfg(any(test, feature = "mock"))]
pub mod memory;
pub mod postgres;

#[cfg(any(test, feature = "mock"))]
pub use memory::InMemoryParcelRepo;
pub use postgres::PgParcelRepo;
