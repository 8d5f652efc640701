use crate::clients::clients_model::{Client, ProfileCompletion};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for read-only client repository operations
#[async_trait]
pub trait ClientRepositoryTrait: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>>;
}

/// Trait for client service operations
#[async_trait]
pub trait ClientServiceTrait: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>>;
    async fn get_client(&self, client_id: &str) -> Result<Client>;
    async fn get_profile_completion(&self, client_id: &str) -> Result<ProfileCompletion>;
    /// Completions for every client, most urgent follow-up first.
    async fn list_profile_completions(&self) -> Result<Vec<ProfileCompletion>>;
}
