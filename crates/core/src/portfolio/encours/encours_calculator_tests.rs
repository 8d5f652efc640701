//! Unit tests for the encours calculator.

use super::encours_calculator::*;
use super::encours_model::RealEstateGrouping;
use crate::errors::{Error, ValidationError};
use crate::clients::Client;
use crate::holdings::{Holding, HoldingKind};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holding(user_id: &str, kind: HoldingKind, value: Decimal, acquired: NaiveDate) -> Holding {
    Holding::new(user_id, kind, value, acquired)
}

fn sample_holdings() -> Vec<Holding> {
    vec![
        holding("u1", HoldingKind::InsuranceContract, dec!(1000), date(2024, 3, 15)),
        holding("u1", HoldingKind::RealEstateAsset, dec!(250000), date(2023, 11, 2)),
        holding("u1", HoldingKind::BankAccount, dec!(1500.50), date(2024, 3, 1)),
        holding("u2", HoldingKind::CapitalizationContract, dec!(12000), date(2024, 1, 20)),
        holding("u2", HoldingKind::BusinessParticipation, dec!(30000), date(2022, 6, 30)),
        holding("ghost", HoldingKind::InsuranceContract, dec!(99), date(2024, 3, 31)),
    ]
}

#[test]
fn single_insurance_contract_example() {
    let clients = vec![Client::new("U1").with_name("Jeanne", "Durand")];
    let holdings = vec![holding(
        "U1",
        HoldingKind::InsuranceContract,
        dec!(1000),
        date(2024, 3, 15),
    )];

    let report = calculate_encours(&clients, &holdings, RealEstateGrouping::default()).unwrap();

    let names: Vec<&str> = report.repartition.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Assurance Vie", "PER", "Immobilier", "SCPI", "Autre"]);
    assert_eq!(report.repartition[0].value, dec!(1000));
    assert!(report.repartition[1..].iter().all(|r| r.value.is_zero()));

    assert_eq!(report.clients.len(), 1);
    let row = &report.clients[0];
    assert_eq!(row.id, "U1");
    assert_eq!(row.last_name.as_deref(), Some("Durand"));
    assert_eq!(row.first_name.as_deref(), Some("Jeanne"));
    assert_eq!(row.assurance_vie, dec!(1000));
    assert_eq!(row.per, Decimal::ZERO);
    assert_eq!(row.scpi, Decimal::ZERO);
    assert_eq!(row.autre, Decimal::ZERO);
    assert_eq!(row.immobilier, None);
    assert_eq!(row.total, dec!(1000));

    assert_eq!(report.encours.len(), 1);
    assert_eq!(report.encours[0].month, "Mar 2024");
    assert_eq!(report.encours[0].assurance_vie, dec!(1000));
    assert_eq!(report.total, dec!(1000));
}

#[test]
fn repartition_includes_orphan_holdings() {
    let repartition = calculate_repartition(&sample_holdings()).unwrap();
    assert_eq!(repartition[0].value, dec!(1099));
    assert_eq!(repartition[1].value, dec!(12000));
    assert_eq!(repartition[2].value, dec!(250000));
    assert_eq!(repartition[3].value, dec!(30000));
    assert_eq!(repartition[4].value, dec!(1500.50));
}

#[test]
fn real_estate_folds_into_other_by_default() {
    let clients = vec![Client::new("u1"), Client::new("u2")];
    let rows = calculate_client_breakdowns(
        &clients,
        &sample_holdings(),
        RealEstateGrouping::FoldIntoOther,
    )
    .unwrap();

    assert_eq!(rows[0].autre, dec!(251500.50));
    assert_eq!(rows[0].immobilier, None);
    assert_eq!(rows[0].total, dec!(252500.50));
    assert_eq!(rows[1].per, dec!(12000));
    assert_eq!(rows[1].scpi, dec!(30000));
    assert_eq!(rows[1].total, dec!(42000));
}

#[test]
fn real_estate_kept_separate_when_requested() {
    let clients = vec![Client::new("u1")];
    let rows = calculate_client_breakdowns(
        &clients,
        &sample_holdings(),
        RealEstateGrouping::Separate,
    )
    .unwrap();

    assert_eq!(rows[0].immobilier, Some(dec!(250000)));
    assert_eq!(rows[0].autre, dec!(1500.50));
    assert_eq!(rows[0].total, dec!(252500.50));
}

#[test]
fn orphan_holdings_are_excluded_from_client_rows() {
    let clients = vec![Client::new("u1"), Client::new("u2")];
    let holdings = sample_holdings();
    let rows = calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::Separate).unwrap();

    let client_sum: Decimal = rows.iter().map(|r| r.total).sum();
    let all_sum: Decimal = holdings.iter().map(|h| h.value).sum();
    assert_eq!(all_sum - client_sum, dec!(99));
}

#[test]
fn clients_without_holdings_get_zero_rows_in_input_order() {
    let clients = vec![Client::new("z"), Client::new("u2"), Client::new("a")];
    let rows = calculate_client_breakdowns(
        &clients,
        &sample_holdings(),
        RealEstateGrouping::FoldIntoOther,
    )
    .unwrap();
    let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["z", "u2", "a"]);
    assert!(rows[0].total.is_zero());
    assert!(rows[2].total.is_zero());
}

#[test]
fn monthly_series_is_chronological_across_years() {
    let series = calculate_monthly_encours(&sample_holdings()).unwrap();
    let months: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["Jun 2022", "Nov 2023", "Jan 2024", "Mar 2024"]);

    let march = &series[3];
    assert_eq!(march.assurance_vie, dec!(1099));
    assert_eq!(march.autre, dec!(1500.50));
    assert_eq!(march.immobilier, Decimal::ZERO);
}

#[test]
fn same_month_different_years_are_distinct_buckets() {
    let holdings = vec![
        holding("u", HoldingKind::BankAccount, dec!(1), date(2024, 12, 1)),
        holding("u", HoldingKind::BankAccount, dec!(2), date(2023, 12, 31)),
        holding("u", HoldingKind::BankAccount, dec!(3), date(2024, 1, 5)),
    ];
    let series = calculate_monthly_encours(&holdings).unwrap();
    let months: Vec<&str> = series.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["Dec 2023", "Jan 2024", "Dec 2024"]);
}

#[test]
fn empty_input_gives_zero_repartition_and_empty_views() {
    let report = calculate_encours(&[], &[], RealEstateGrouping::default()).unwrap();
    assert_eq!(report.repartition.len(), 5);
    assert!(report.repartition.iter().all(|r| r.value.is_zero()));
    assert!(report.clients.is_empty());
    assert!(report.encours.is_empty());
    assert!(report.total.is_zero());
}

#[test]
fn top_clients_sorts_by_total_and_keeps_ties_stable() {
    let clients = vec![
        Client::new("small"),
        Client::new("u2"),
        Client::new("tie"),
        Client::new("u1"),
    ];
    let mut holdings = sample_holdings();
    holdings.push(holding("tie", HoldingKind::BankAccount, dec!(42000), date(2020, 1, 1)));
    holdings.push(holding("small", HoldingKind::BankAccount, dec!(5), date(2020, 1, 1)));

    let rows = calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::default()).unwrap();
    let top = top_clients(&rows, 3);
    let ids: Vec<&str> = top.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2", "tie"]);
    assert!(top_clients(&rows, 0).is_empty());
    assert_eq!(top_clients(&rows, 10).len(), 4);
}

#[test]
fn pipeline_is_idempotent() {
    let clients = vec![Client::new("u1"), Client::new("u2")];
    let holdings = sample_holdings();
    let first = calculate_encours(&clients, &holdings, RealEstateGrouping::Separate).unwrap();
    let second = calculate_encours(&clients, &holdings, RealEstateGrouping::Separate).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overflowing_amounts_fail_instead_of_panicking() {
    let holdings = vec![
        holding("u1", HoldingKind::BankAccount, Decimal::MAX, date(2024, 1, 1)),
        holding("u1", HoldingKind::BankAccount, Decimal::MAX, date(2024, 1, 2)),
    ];
    let clients = vec![Client::new("u1")];

    let err = calculate_repartition(&holdings).unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::InvalidInput(_))));
    assert!(calculate_monthly_encours(&holdings).is_err());
    assert!(calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::Separate).is_err());
    assert!(calculate_encours(&clients, &holdings, RealEstateGrouping::default()).is_err());
}

#[test]
fn overflow_across_kinds_is_caught_in_totals() {
    // each kind fits on its own, the sums across kinds do not
    let holdings = vec![
        holding("u1", HoldingKind::RealEstateAsset, Decimal::MAX, date(2024, 1, 1)),
        holding("u1", HoldingKind::BankAccount, Decimal::MAX, date(2024, 2, 1)),
    ];
    let clients = vec![Client::new("u1")];

    assert!(calculate_repartition(&holdings).is_ok());
    assert!(calculate_monthly_encours(&holdings).is_ok());
    assert!(calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::Separate).is_err());
    assert!(calculate_client_breakdowns(&clients, &holdings, RealEstateGrouping::FoldIntoOther).is_err());
    assert!(calculate_encours(&[], &holdings, RealEstateGrouping::default()).is_err());
}
