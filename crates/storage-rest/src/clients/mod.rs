//! Data service access for client profiles.

mod model;
mod repository;

pub use model::ProfileRow;
pub use repository::ClientRepository;
