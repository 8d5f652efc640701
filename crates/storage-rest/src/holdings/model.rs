//! Data service models for holdings.

use eparnova_core::holdings::{Holding, HoldingKind};
use eparnova_core::Result;
use log::warn;
use serde::Deserialize;
use serde_json::Value;

use crate::utils::{parse_amount, parse_date};

/// Row of any of the five holding tables.
///
/// Columns specific to one table are kept only to cross-check the table a
/// row was read from.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct HoldingRow {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub valeur: Option<Value>,
    #[serde(default)]
    pub montant: Option<Value>,
    #[serde(default)]
    pub date_acquisition: Option<String>,
    #[serde(default)]
    pub type_assurance: Option<Value>,
    #[serde(default)]
    pub regime: Option<Value>,
    #[serde(default)]
    pub type_immobilier: Option<Value>,
    #[serde(default)]
    pub type_entreprise: Option<Value>,
}

fn present(field: &Option<Value>) -> bool {
    !matches!(field, None | Some(Value::Null))
}

impl HoldingRow {
    /// Kind implied by a table-specific column, first match wins. `None`
    /// when the row carries none of them.
    pub fn discriminated_kind(&self) -> Option<HoldingKind> {
        if present(&self.type_assurance) {
            Some(HoldingKind::InsuranceContract)
        } else if present(&self.regime) {
            Some(HoldingKind::CapitalizationContract)
        } else if present(&self.type_immobilier) {
            Some(HoldingKind::RealEstateAsset)
        } else if present(&self.type_entreprise) {
            Some(HoldingKind::BusinessParticipation)
        } else {
            None
        }
    }

    /// First non-null of the `value`, `valeur` and `montant` columns.
    pub fn amount(&self) -> Option<&Value> {
        [&self.value, &self.valeur, &self.montant]
            .into_iter()
            .find(|column| present(column))
            .and_then(Option::as_ref)
    }

    fn id_string(&self) -> Option<String> {
        match &self.id {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Converts the row into a holding of `kind`, the kind of the table it
    /// was read from.
    pub fn into_holding(self, kind: HoldingKind) -> Result<Holding> {
        if let Some(detected) = self.discriminated_kind() {
            if detected != kind {
                warn!(
                    "Row {:?} read as {} but its columns look like {}",
                    self.id_string(),
                    kind,
                    detected
                );
            }
        }

        let user_id = self
            .user_id
            .clone()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| {
                eparnova_core::Error::Validation(
                    eparnova_core::errors::ValidationError::MissingField("user_id".to_string()),
                )
            })?;

        Ok(Holding {
            id: self.id_string(),
            user_id,
            kind,
            value: parse_amount(self.amount(), "value")?,
            date_acquisition: parse_date(self.date_acquisition.as_deref(), "date_acquisition")?,
        })
    }
}
