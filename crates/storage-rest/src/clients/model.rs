//! Data service models for client profiles.

use eparnova_core::clients::Client;
use log::warn;
use serde::Deserialize;

use crate::utils::parse_date;

/// Row of the profiles table.
///
/// Some columns exist under an English and a French name depending on the
/// schema version. Both are read and the first non-blank one wins.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ProfileRow {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub date_naissance: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub adresse: Option<String>,
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub risk_profile: Option<String>,
    #[serde(default)]
    pub profil_risque: Option<String>,
}

fn first_filled(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .filter(|v| !v.trim().is_empty())
        .or(fallback.filter(|v| !v.trim().is_empty()))
}

impl From<ProfileRow> for Client {
    fn from(row: ProfileRow) -> Self {
        // Only used for profile scoring, so a bad value counts as missing.
        let date_of_birth = first_filled(row.date_of_birth, row.date_naissance).and_then(|raw| {
            match parse_date(Some(&raw), "date_of_birth") {
                Ok(date) => Some(date),
                Err(e) => {
                    warn!("Ignoring birth date of profile {}: {}", row.id, e);
                    None
                }
            }
        });

        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: first_filled(row.phone, row.telephone),
            date_of_birth,
            address: first_filled(row.address, row.adresse),
            profession: row.profession,
            risk_profile: first_filled(row.risk_profile, row.profil_risque),
        }
    }
}
