//! Encours service traits.

use async_trait::async_trait;

use super::encours_model::{
    ClientBreakdown, EncoursOptions, EncoursReport, FetchPolicy, MonthlyEncours, RepartitionItem,
};
use crate::errors::Result;

/// Trait defining the contract for encours service operations.
///
/// Every call fetches clients and holdings afresh and aggregates them; no
/// result is cached between calls.
#[async_trait]
pub trait EncoursServiceTrait: Send + Sync {
    /// Full dashboard report: repartition, client rows, and monthly series.
    ///
    /// `options.limit` restricts the client rows to the largest clients.
    async fn get_encours_report(&self, options: EncoursOptions) -> Result<EncoursReport>;

    /// Total value per holding category, five entries.
    async fn get_repartition(&self, policy: FetchPolicy) -> Result<Vec<RepartitionItem>>;

    /// Per-client breakdown in client order, or the top `options.limit`
    /// clients by total when a limit is given.
    async fn get_client_breakdowns(&self, options: EncoursOptions) -> Result<Vec<ClientBreakdown>>;

    /// Monthly series of holdings by acquisition month, oldest first.
    async fn get_monthly_encours(&self, policy: FetchPolicy) -> Result<Vec<MonthlyEncours>>;
}
