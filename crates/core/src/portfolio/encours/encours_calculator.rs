//! Pure aggregation of holdings into the encours views.
//!
//! Every function here is synchronous and side-effect free: the same input
//! always produces the same output, and inputs are never mutated. Sums are
//! overflow-checked and surface as `ValidationError::InvalidInput`.

use chrono::Datelike;
use log::debug;
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

use super::encours_model::{
    add_amounts, ClientBreakdown, EncoursReport, KindTotals, MonthlyEncours, RealEstateGrouping,
    RepartitionItem,
};
use crate::clients::Client;
use crate::constants::MONTH_LABEL_FORMAT;
use crate::errors::Result;
use crate::holdings::{Holding, HoldingKind};

/// Sums holding values per kind. Always returns five entries, in
/// `HoldingKind::ALL` order.
pub fn calculate_repartition(holdings: &[Holding]) -> Result<Vec<RepartitionItem>> {
    let mut totals = KindTotals::default();
    for holding in holdings {
        totals.add(holding.kind, holding.value)?;
    }

    Ok(HoldingKind::ALL
        .iter()
        .map(|kind| RepartitionItem {
            name: kind.display_name().to_string(),
            value: totals.get(*kind),
        })
        .collect())
}

fn build_breakdown(
    client: &Client,
    totals: &KindTotals,
    grouping: RealEstateGrouping,
) -> Result<ClientBreakdown> {
    let real_estate = totals.get(HoldingKind::RealEstateAsset);
    let bank = totals.get(HoldingKind::BankAccount);

    let (immobilier, autre) = match grouping {
        RealEstateGrouping::FoldIntoOther => (None, add_amounts(bank, real_estate)?),
        RealEstateGrouping::Separate => (Some(real_estate), bank),
    };

    // Both groupings cover all five kinds.
    let total = totals.total()?;

    Ok(ClientBreakdown {
        id: client.id.clone(),
        last_name: client.last_name.clone(),
        first_name: client.first_name.clone(),
        assurance_vie: totals.get(HoldingKind::InsuranceContract),
        per: totals.get(HoldingKind::CapitalizationContract),
        immobilier,
        scpi: totals.get(HoldingKind::BusinessParticipation),
        autre,
        total,
    })
}

/// One row per input client, in input order.
///
/// Holdings whose `user_id` matches no client are left out of this view
/// (they still count in the repartition and monthly series).
pub fn calculate_client_breakdowns(
    clients: &[Client],
    holdings: &[Holding],
    grouping: RealEstateGrouping,
) -> Result<Vec<ClientBreakdown>> {
    let mut by_client: HashMap<&str, KindTotals> = clients
        .iter()
        .map(|c| (c.id.as_str(), KindTotals::default()))
        .collect();

    let mut orphans = 0usize;
    for holding in holdings {
        match by_client.get_mut(holding.user_id.as_str()) {
            Some(totals) => totals.add(holding.kind, holding.value)?,
            None => orphans += 1,
        }
    }
    if orphans > 0 {
        debug!(
            "{} holdings reference no known client and are excluded from the client view",
            orphans
        );
    }

    clients
        .iter()
        .map(|client| {
            let totals = by_client
                .get(client.id.as_str())
                .copied()
                .unwrap_or_default();
            build_breakdown(client, &totals, grouping)
        })
        .collect()
}

/// Buckets holdings by acquisition month, oldest month first.
pub fn calculate_monthly_encours(holdings: &[Holding]) -> Result<Vec<MonthlyEncours>> {
    let mut months: BTreeMap<(i32, u32), (String, KindTotals)> = BTreeMap::new();

    for holding in holdings {
        let date = holding.date_acquisition;
        let (_, totals) = months
            .entry((date.year(), date.month()))
            .or_insert_with(|| (date.format(MONTH_LABEL_FORMAT).to_string(), KindTotals::default()));
        totals.add(holding.kind, holding.value)?;
    }

    Ok(months
        .into_values()
        .map(|(month, totals)| MonthlyEncours {
            month,
            assurance_vie: totals.get(HoldingKind::InsuranceContract),
            per: totals.get(HoldingKind::CapitalizationContract),
            immobilier: totals.get(HoldingKind::RealEstateAsset),
            scpi: totals.get(HoldingKind::BusinessParticipation),
            autre: totals.get(HoldingKind::BankAccount),
        })
        .collect())
}

/// The `limit` largest clients by total, largest first. Ties keep their
/// relative input order.
pub fn top_clients(breakdowns: &[ClientBreakdown], limit: usize) -> Vec<ClientBreakdown> {
    let mut sorted = breakdowns.to_vec();
    sorted.sort_by(|a, b| b.total.cmp(&a.total));
    sorted.truncate(limit);
    sorted
}

/// Runs the whole pipeline over already-fetched data.
pub fn calculate_encours(
    clients: &[Client],
    holdings: &[Holding],
    grouping: RealEstateGrouping,
) -> Result<EncoursReport> {
    let repartition = calculate_repartition(holdings)?;
    let total = repartition
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| add_amounts(acc, item.value))?;

    Ok(EncoursReport {
        repartition,
        clients: calculate_client_breakdowns(clients, holdings, grouping)?,
        encours: calculate_monthly_encours(holdings)?,
        total,
        unavailable_sources: Vec::new(),
    })
}
