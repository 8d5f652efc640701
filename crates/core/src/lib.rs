//! EPARNOVA Core - Domain entities, services, and traits.
//!
//! This crate contains the encours (assets under management) logic of the
//! EPARNOVA advisory dashboard. It is transport-agnostic and defines the
//! repository traits implemented by the `storage-rest` crate.

pub mod clients;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;

// Re-export common types from the holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
