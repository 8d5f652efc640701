use async_trait::async_trait;
use std::sync::Arc;

use eparnova_core::clients::{Client, ClientRepositoryTrait};
use eparnova_core::Result;

use super::model::ProfileRow;
use crate::client::RestDataClient;

pub struct ClientRepository {
    client: Arc<RestDataClient>,
}

impl ClientRepository {
    pub fn new(client: Arc<RestDataClient>) -> Self {
        ClientRepository { client }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    async fn list_clients(&self) -> Result<Vec<Client>> {
        let rows: Vec<ProfileRow> = self
            .client
            .fetch_rows(&self.client.tables().clients)
            .await?;
        Ok(rows.into_iter().map(Client::from).collect())
    }
}
