use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::clients_model::{Client, ProfileCompletion};
use super::clients_traits::{ClientRepositoryTrait, ClientServiceTrait};
use super::profile_scoring::{calculate_profile_completion, sort_by_priority};
use crate::errors::{DatabaseError, Error, Result};

pub struct ClientService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
}

impl ClientService {
    pub fn new(client_repository: Arc<dyn ClientRepositoryTrait>) -> Self {
        ClientService { client_repository }
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    async fn list_clients(&self) -> Result<Vec<Client>> {
        self.client_repository.list_clients().await
    }

    async fn get_client(&self, client_id: &str) -> Result<Client> {
        self.client_repository
            .list_clients()
            .await?
            .into_iter()
            .find(|c| c.id == client_id)
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Client {} not found",
                    client_id
                )))
            })
    }

    async fn get_profile_completion(&self, client_id: &str) -> Result<ProfileCompletion> {
        let client = self.get_client(client_id).await?;
        Ok(calculate_profile_completion(&client))
    }

    async fn list_profile_completions(&self) -> Result<Vec<ProfileCompletion>> {
        let clients = self.client_repository.list_clients().await?;
        debug!("Scoring profile completion for {} clients", clients.len());

        let mut completions: Vec<ProfileCompletion> =
            clients.iter().map(calculate_profile_completion).collect();
        sort_by_priority(&mut completions);
        Ok(completions)
    }
}
