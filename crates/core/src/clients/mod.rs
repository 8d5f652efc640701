//! Clients module - domain models, profile scoring, services, and traits.

mod clients_model;
mod clients_service;
mod clients_traits;
mod profile_scoring;

pub use clients_model::{Client, ProfileCompletion, ProfilePriority};
pub use clients_service::ClientService;
pub use clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
pub use profile_scoring::{calculate_profile_completion, priority_for_completion, sort_by_priority};
