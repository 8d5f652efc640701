//! Data service access for the five holding tables.

mod model;
mod repository;

pub use model::HoldingRow;
pub use repository::HoldingRepository;
