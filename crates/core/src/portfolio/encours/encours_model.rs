//! Encours domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{Error, ValidationError};
use crate::holdings::HoldingKind;

/// Where real estate lands in the per-client view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealEstateGrouping {
    /// Real estate is added to `autre`; `immobilier` is omitted.
    #[default]
    FoldIntoOther,
    /// Real estate is reported in its own `immobilier` field.
    Separate,
}

impl FromStr for RealEstateGrouping {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "other" | "fold_into_other" => Ok(RealEstateGrouping::FoldIntoOther),
            "separate" => Ok(RealEstateGrouping::Separate),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown real estate grouping '{}' (expected 'other' or 'separate')",
                other
            )))),
        }
    }
}

/// What to do when one of the concurrent sub-fetches fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// The first failing fetch fails the whole request.
    #[default]
    FailFast,
    /// Failed fetches are treated as empty and reported as unavailable.
    BestEffort,
}

impl FromStr for FetchPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail_fast" => Ok(FetchPolicy::FailFast),
            "best_effort" => Ok(FetchPolicy::BestEffort),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown fetch policy '{}' (expected 'fail_fast' or 'best_effort')",
                other
            )))),
        }
    }
}

/// Options for an encours request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncoursOptions {
    pub grouping: RealEstateGrouping,
    pub fetch_policy: FetchPolicy,
    /// When set, only the `limit` largest clients by total are returned.
    pub limit: Option<usize>,
}

/// Total value held in one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RepartitionItem {
    pub name: String,
    pub value: Decimal,
}

/// One client's holdings summed by category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientBreakdown {
    pub id: String,
    #[serde(rename = "nom")]
    pub last_name: Option<String>,
    #[serde(rename = "prenom")]
    pub first_name: Option<String>,
    pub assurance_vie: Decimal,
    pub per: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub immobilier: Option<Decimal>,
    pub scpi: Decimal,
    pub autre: Decimal,
    /// Sum of the category fields above
    pub total: Decimal,
}

/// Holdings acquired in one calendar month, summed by category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyEncours {
    /// "MMM YYYY", e.g. "Mar 2024"
    #[serde(rename = "mois")]
    pub month: String,
    pub assurance_vie: Decimal,
    pub per: Decimal,
    pub immobilier: Decimal,
    pub scpi: Decimal,
    pub autre: Decimal,
}

/// Everything the encours dashboard renders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EncoursReport {
    pub repartition: Vec<RepartitionItem>,
    pub clients: Vec<ClientBreakdown>,
    pub encours: Vec<MonthlyEncours>,
    /// Sum of all repartition values
    pub total: Decimal,
    /// Sources that could not be fetched under `FetchPolicy::BestEffort`
    #[serde(default)]
    pub unavailable_sources: Vec<String>,
}

/// Overflow-checked `Decimal` addition. Amounts from the data service are
/// unbounded.
pub fn add_amounts(a: Decimal, b: Decimal) -> crate::errors::Result<Decimal> {
    a.checked_add(b).ok_or_else(|| {
        Error::Validation(ValidationError::InvalidInput(format!(
            "amount overflow adding {} to {}",
            b, a
        )))
    })
}

/// Running per-kind sums.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KindTotals([Decimal; 5]);

impl KindTotals {
    pub fn add(&mut self, kind: HoldingKind, value: Decimal) -> crate::errors::Result<()> {
        let slot = &mut self.0[kind.index()];
        *slot = add_amounts(*slot, value)?;
        Ok(())
    }

    pub fn get(&self, kind: HoldingKind) -> Decimal {
        self.0[kind.index()]
    }

    /// Sum over all five kinds.
    pub fn total(&self) -> crate::errors::Result<Decimal> {
        self.0
            .iter()
            .try_fold(Decimal::ZERO, |acc, value| add_amounts(acc, *value))
    }
}
