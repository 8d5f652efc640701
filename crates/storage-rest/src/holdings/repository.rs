use async_trait::async_trait;
use std::sync::Arc;

use eparnova_core::holdings::{Holding, HoldingKind, HoldingRepositoryTrait};
use eparnova_core::Result;

use super::model::HoldingRow;
use crate::client::RestDataClient;

pub struct HoldingRepository {
    client: Arc<RestDataClient>,
}

impl HoldingRepository {
    pub fn new(client: Arc<RestDataClient>) -> Self {
        HoldingRepository { client }
    }
}

#[async_trait]
impl HoldingRepositoryTrait for HoldingRepository {
    async fn list_holdings(&self, kind: HoldingKind) -> Result<Vec<Holding>> {
        let table = self.client.tables().for_kind(kind);
        let rows: Vec<HoldingRow> = self.client.fetch_rows(table).await?;
        rows.into_iter().map(|row| row.into_holding(kind)).collect()
    }
}
