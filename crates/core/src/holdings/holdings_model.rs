//! Holdings domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five holding categories tracked by the dashboard.
///
/// The category is a stored fact assigned when a row is read from its
/// table, never inferred from which optional columns happen to be filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HoldingKind {
    /// Life insurance contract (assurance vie)
    InsuranceContract,
    /// Capitalization / retirement contract (PER)
    CapitalizationContract,
    /// Real estate asset
    RealEstateAsset,
    /// Business participation (SCPI and company shares)
    BusinessParticipation,
    /// Bank account, the catch-all category
    BankAccount,
}

impl HoldingKind {
    /// All kinds, in repartition order.
    pub const ALL: [HoldingKind; 5] = [
        HoldingKind::InsuranceContract,
        HoldingKind::CapitalizationContract,
        HoldingKind::RealEstateAsset,
        HoldingKind::BusinessParticipation,
        HoldingKind::BankAccount,
    ];

    /// Position of this kind in `ALL`.
    pub fn index(self) -> usize {
        match self {
            HoldingKind::InsuranceContract => 0,
            HoldingKind::CapitalizationContract => 1,
            HoldingKind::RealEstateAsset => 2,
            HoldingKind::BusinessParticipation => 3,
            HoldingKind::BankAccount => 4,
        }
    }

    /// Output bucket key used in client and monthly rows.
    pub fn key(self) -> &'static str {
        match self {
            HoldingKind::InsuranceContract => "assuranceVie",
            HoldingKind::CapitalizationContract => "per",
            HoldingKind::RealEstateAsset => "immobilier",
            HoldingKind::BusinessParticipation => "scpi",
            HoldingKind::BankAccount => "autre",
        }
    }

    /// Display name used in the repartition chart.
    pub fn display_name(self) -> &'static str {
        match self {
            HoldingKind::InsuranceContract => "Assurance Vie",
            HoldingKind::CapitalizationContract => "PER",
            HoldingKind::RealEstateAsset => "Immobilier",
            HoldingKind::BusinessParticipation => "SCPI",
            HoldingKind::BankAccount => "Autre",
        }
    }
}

impl fmt::Display for HoldingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single asset record belonging to a client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub id: Option<String>,
    pub user_id: String,
    pub kind: HoldingKind,
    pub value: Decimal,
    pub date_acquisition: NaiveDate,
}

impl Holding {
    pub fn new(
        user_id: impl Into<String>,
        kind: HoldingKind,
        value: Decimal,
        date_acquisition: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            kind,
            value,
            date_acquisition,
        }
    }
}
