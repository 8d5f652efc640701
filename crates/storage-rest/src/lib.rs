//! REST storage implementation for EPARNOVA.
//!
//! This crate reads clients and holdings from the hosted relational data
//! service over HTTP. It implements the repository traits defined in
//! `eparnova-core` and contains:
//! - The HTTP client and table configuration
//! - Row models for the service's tables and their conversion to domain types
//! - Repository implementations for clients and holdings
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-rest (this crate)
//!              │
//!              ▼
//!     hosted data service
//! ```

pub mod client;
pub mod clients;
pub mod errors;
pub mod holdings;
pub mod utils;

pub use client::{RestClientConfig, RestDataClient, TableNames};
pub use clients::ClientRepository;
pub use errors::{IntoCore, StorageError};
pub use holdings::HoldingRepository;

// Re-export from eparnova-core for convenience
pub use eparnova_core::errors::{DatabaseError, Error, Result};
