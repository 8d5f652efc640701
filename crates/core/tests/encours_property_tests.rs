//! Property-based integration tests for the encours aggregation pipeline.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use chrono::{Datelike, NaiveDate};
use eparnova_core::clients::Client;
use eparnova_core::holdings::{Holding, HoldingKind};
use eparnova_core::portfolio::encours::{
    calculate_client_breakdowns, calculate_encours, calculate_monthly_encours,
    calculate_repartition, RealEstateGrouping,
};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

// =============================================================================
// Generators
// =============================================================================

fn arb_kind() -> impl Strategy<Value = HoldingKind> {
    prop_oneof![
        Just(HoldingKind::InsuranceContract),
        Just(HoldingKind::CapitalizationContract),
        Just(HoldingKind::RealEstateAsset),
        Just(HoldingKind::BusinessParticipation),
        Just(HoldingKind::BankAccount),
    ]
}

fn arb_grouping() -> impl Strategy<Value = RealEstateGrouping> {
    prop_oneof![
        Just(RealEstateGrouping::FoldIntoOther),
        Just(RealEstateGrouping::Separate),
    ]
}

/// Generates a holding owned by one of `u0..u5` (u5 is never a known client).
fn arb_holding() -> impl Strategy<Value = Holding> {
    (
        0usize..6,
        arb_kind(),
        0i64..100_000_000, // value in cents
        2015i32..2026,
        1u32..=12,
        1u32..=28,
    )
        .prop_map(|(user, kind, cents, year, month, day)| {
            Holding::new(
                format!("u{}", user),
                kind,
                Decimal::new(cents, 2),
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            )
        })
}

fn arb_holdings(max_count: usize) -> impl Strategy<Value = Vec<Holding>> {
    proptest::collection::vec(arb_holding(), 0..=max_count)
}

fn known_clients() -> Vec<Client> {
    (0..5).map(|i| Client::new(format!("u{}", i))).collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Each repartition entry equals the sum of its kind's values.
    #[test]
    fn prop_category_sums_are_exact(holdings in arb_holdings(60)) {
        let repartition = calculate_repartition(&holdings).unwrap();
        prop_assert_eq!(repartition.len(), 5);

        for (item, kind) in repartition.iter().zip(HoldingKind::ALL) {
            let expected: Decimal = holdings
                .iter()
                .filter(|h| h.kind == kind)
                .map(|h| h.value)
                .sum();
            prop_assert_eq!(item.value, expected);
            prop_assert_eq!(item.name.as_str(), kind.display_name());
        }
    }

    /// Each client row's total equals the sum of its category fields.
    #[test]
    fn prop_client_total_is_sum_of_fields(
        holdings in arb_holdings(60),
        grouping in arb_grouping(),
    ) {
        let rows = calculate_client_breakdowns(&known_clients(), &holdings, grouping).unwrap();
        for row in &rows {
            let sum = row.assurance_vie
                + row.per
                + row.immobilier.unwrap_or(Decimal::ZERO)
                + row.scpi
                + row.autre;
            prop_assert_eq!(row.total, sum);
            prop_assert_eq!(
                row.immobilier.is_some(),
                grouping == RealEstateGrouping::Separate
            );
        }
    }

    /// Every input client appears once, in input order.
    #[test]
    fn prop_every_client_appears_once_in_order(holdings in arb_holdings(40)) {
        let clients = known_clients();
        let rows = calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::default()).unwrap();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = clients.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(ids, expected);
    }

    /// Monthly buckets match the distinct acquisition months, sorted, without duplicates.
    #[test]
    fn prop_monthly_buckets_are_exhaustive_and_sorted(holdings in arb_holdings(60)) {
        let series = calculate_monthly_encours(&holdings).unwrap();

        let expected: HashSet<String> = holdings
            .iter()
            .map(|h| h.date_acquisition.format("%b %Y").to_string())
            .collect();
        let labels: Vec<String> = series.iter().map(|m| m.month.clone()).collect();
        let unique: HashSet<String> = labels.iter().cloned().collect();
        prop_assert_eq!(unique.len(), labels.len());
        prop_assert_eq!(unique, expected);

        let mut months: Vec<(i32, u32)> = holdings
            .iter()
            .map(|h| (h.date_acquisition.year(), h.date_acquisition.month()))
            .collect();
        months.sort();
        months.dedup();
        let expected_order: Vec<String> = months
            .iter()
            .map(|(y, m)| NaiveDate::from_ymd_opt(*y, *m, 1).unwrap().format("%b %Y").to_string())
            .collect();
        prop_assert_eq!(labels, expected_order);
    }

    /// Running the pipeline twice yields identical output.
    #[test]
    fn prop_pipeline_is_idempotent(
        holdings in arb_holdings(40),
        grouping in arb_grouping(),
    ) {
        let clients = known_clients();
        let first = calculate_encours(&clients, &holdings, grouping).unwrap();
        let second = calculate_encours(&clients, &holdings, grouping).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The report total equals the sum of every holding, orphans included.
    #[test]
    fn prop_report_total_covers_every_holding(holdings in arb_holdings(60)) {
        let report = calculate_encours(&known_clients(), &holdings, RealEstateGrouping::Separate).unwrap();
        let expected: Decimal = holdings.iter().map(|h| h.value).sum();
        prop_assert_eq!(report.total, expected);

        let monthly_total: Decimal = report
            .encours
            .iter()
            .map(|m| m.assurance_vie + m.per + m.immobilier + m.scpi + m.autre)
            .sum();
        prop_assert_eq!(monthly_total, expected);
    }
}

#[test]
fn empty_inputs_produce_empty_views() {
    let report = calculate_encours(&[], &[], RealEstateGrouping::default()).unwrap();
    assert_eq!(report.repartition.len(), 5);
    assert!(report.repartition.iter().all(|r| r.value.is_zero()));
    assert!(report.clients.is_empty());
    assert!(report.encours.is_empty());
}
