//! Encours service implementation.

use async_trait::async_trait;
use futures::future::{join_all, try_join_all};
use log::{debug, warn};
use std::sync::Arc;

use super::encours_calculator::{
    calculate_client_breakdowns, calculate_encours, calculate_monthly_encours,
    calculate_repartition, top_clients,
};
use super::encours_model::{
    ClientBreakdown, EncoursOptions, EncoursReport, FetchPolicy, MonthlyEncours, RepartitionItem,
};
use super::encours_traits::EncoursServiceTrait;
use crate::clients::{Client, ClientRepositoryTrait};
use crate::constants::CLIENTS_SOURCE_KEY;
use crate::errors::Result;
use crate::holdings::{Holding, HoldingKind, HoldingRepositoryTrait};

/// Everything one fetch cycle produced.
#[derive(Debug, Default)]
struct FetchedData {
    clients: Vec<Client>,
    holdings: Vec<Holding>,
    unavailable_sources: Vec<String>,
}

/// Service that fetches clients and holdings concurrently and aggregates them.
pub struct EncoursService {
    client_repository: Arc<dyn ClientRepositoryTrait>,
    holding_repository: Arc<dyn HoldingRepositoryTrait>,
}

impl EncoursService {
    pub fn new(
        client_repository: Arc<dyn ClientRepositoryTrait>,
        holding_repository: Arc<dyn HoldingRepositoryTrait>,
    ) -> Self {
        Self {
            client_repository,
            holding_repository,
        }
    }

    /// Issues the client fetch and the five holding fetches at once and
    /// waits for all of them before returning.
    async fn fetch(&self, policy: FetchPolicy) -> Result<FetchedData> {
        match policy {
            FetchPolicy::FailFast => self.fetch_all_or_nothing().await,
            FetchPolicy::BestEffort => Ok(self.fetch_best_effort().await),
        }
    }

    async fn fetch_all_or_nothing(&self) -> Result<FetchedData> {
        let repo = &self.holding_repository;
        let holdings = try_join_all(HoldingKind::ALL.into_iter().map(|kind| repo.list_holdings(kind)));

        let (clients, per_kind) = futures::try_join!(self.client_repository.list_clients(), holdings)
            .map_err(|e| {
                warn!("Encours fetch failed, aggregation skipped: {}", e);
                e
            })?;

        let holdings: Vec<Holding> = per_kind.into_iter().flatten().collect();
        debug!(
            "Fetched {} clients and {} holdings",
            clients.len(),
            holdings.len()
        );

        Ok(FetchedData {
            clients,
            holdings,
            unavailable_sources: Vec::new(),
        })
    }

    async fn fetch_best_effort(&self) -> FetchedData {
        let repo = &self.holding_repository;
        let holdings = join_all(
            HoldingKind::ALL
                .into_iter()
                .map(|kind| async move { (kind, repo.list_holdings(kind).await) }),
        );

        let (clients_result, per_kind) =
            futures::join!(self.client_repository.list_clients(), holdings);

        let mut data = FetchedData::default();

        match clients_result {
            Ok(clients) => data.clients = clients,
            Err(e) => {
                warn!("Client list unavailable, continuing without it: {}", e);
                data.unavailable_sources.push(CLIENTS_SOURCE_KEY.to_string());
            }
        }

        for (kind, result) in per_kind {
            match result {
                Ok(rows) => data.holdings.extend(rows),
                Err(e) => {
                    warn!("Holdings '{}' unavailable, continuing without them: {}", kind, e);
                    data.unavailable_sources.push(kind.key().to_string());
                }
            }
        }

        debug!(
            "Fetched {} clients and {} holdings ({} sources unavailable)",
            data.clients.len(),
            data.holdings.len(),
            data.unavailable_sources.len()
        );
        data
    }
}

#[async_trait]
impl EncoursServiceTrait for EncoursService {
    async fn get_encours_report(&self, options: EncoursOptions) -> Result<EncoursReport> {
        let data = self.fetch(options.fetch_policy).await?;
        let mut report = calculate_encours(&data.clients, &data.holdings, options.grouping)?;

        if let Some(limit) = options.limit {
            report.clients = top_clients(&report.clients, limit);
        }
        report.unavailable_sources = data.unavailable_sources;
        Ok(report)
    }

    async fn get_repartition(&self, policy: FetchPolicy) -> Result<Vec<RepartitionItem>> {
        let data = self.fetch(policy).await?;
        calculate_repartition(&data.holdings)
    }

    async fn get_client_breakdowns(&self, options: EncoursOptions) -> Result<Vec<ClientBreakdown>> {
        let data = self.fetch(options.fetch_policy).await?;
        let rows = calculate_client_breakdowns(&data.clients, &data.holdings, options.grouping)?;

        Ok(match options.limit {
            Some(limit) => top_clients(&rows, limit),
            None => rows,
        })
    }

    async fn get_monthly_encours(&self, policy: FetchPolicy) -> Result<Vec<MonthlyEncours>> {
        let data = self.fetch(policy).await?;
        calculate_monthly_encours(&data.holdings)
    }
}
