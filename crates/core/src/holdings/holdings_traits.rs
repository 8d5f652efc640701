use crate::errors::Result;
use crate::holdings::holdings_model::{Holding, HoldingKind};
use async_trait::async_trait;

/// Trait for read-only holding repository operations
#[async_trait]
pub trait HoldingRepositoryTrait: Send + Sync {
    /// Loads every holding of the given kind, tagged with that kind.
    async fn list_holdings(&self, kind: HoldingKind) -> Result<Vec<Holding>>;
}
