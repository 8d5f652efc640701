//! HTTP client for the hosted relational data service.
//!
//! The service exposes each table through a PostgREST-style endpoint
//! (`GET /rest/v1/<table>?select=*`). Only reads are issued.

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::errors::{IntoCore, StorageError};
use eparnova_core::errors::{Error, Result};
use eparnova_core::holdings::HoldingKind;

/// Default timeout for data service requests.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path prefix of the table endpoints.
const REST_PREFIX: &str = "/rest/v1";

/// Table names of the data service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    pub clients: String,
    pub insurance_contracts: String,
    pub capitalization_contracts: String,
    pub real_estate_assets: String,
    pub business_participations: String,
    pub bank_accounts: String,
}

impl Default for TableNames {
    fn default() -> Self {
        Self {
            clients: "profiles".to_string(),
            insurance_contracts: "contrats_assurance_vie".to_string(),
            capitalization_contracts: "contrats_capitalisation".to_string(),
            real_estate_assets: "biens_immobiliers".to_string(),
            business_participations: "participations_entreprises".to_string(),
            bank_accounts: "comptes_bancaires".to_string(),
        }
    }
}

impl TableNames {
    /// The table holding rows of the given kind.
    pub fn for_kind(&self, kind: HoldingKind) -> &str {
        match kind {
            HoldingKind::InsuranceContract => &self.insurance_contracts,
            HoldingKind::CapitalizationContract => &self.capitalization_contracts,
            HoldingKind::RealEstateAsset => &self.real_estate_assets,
            HoldingKind::BusinessParticipation => &self.business_participations,
            HoldingKind::BankAccount => &self.bank_accounts,
        }
    }
}

/// Connection settings for [`RestDataClient`].
#[derive(Debug, Clone)]
pub struct RestClientConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
    pub tables: TableNames,
}

impl RestClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            tables: TableNames::default(),
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct ServiceErrorResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Read-only client for the data service.
///
/// # Example
///
/// ```ignore
/// let client = RestDataClient::new(RestClientConfig::new("https://db.example.com"))?;
/// let rows: Vec<ProfileRow> = client.fetch_rows("profiles").await?;
/// ```
#[derive(Debug, Clone)]
pub struct RestDataClient {
    client: reqwest::Client,
    base_url: String,
    tables: TableNames,
}

impl RestDataClient {
    /// Create a new data service client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key cannot be used as a header value or
    /// the HTTP client cannot be initialized.
    pub fn new(config: RestClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = config.api_key.as_deref() {
            let api_key = HeaderValue::from_str(key)
                .map_err(|e| Error::InvalidConfigValue(format!("Invalid API key format: {}", e)))?;
            let bearer = HeaderValue::from_str(&format!("Bearer {}", key))
                .map_err(|e| Error::InvalidConfigValue(format!("Invalid API key format: {}", e)))?;
            headers.insert("apikey", api_key);
            headers.insert(AUTHORIZATION, bearer);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Unexpected(format!("Failed to initialize HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tables: config.tables,
        })
    }

    pub fn tables(&self) -> &TableNames {
        &self.tables
    }

    /// URL selecting every row of `table`.
    pub fn table_url(&self, table: &str) -> String {
        format!("{}{}/{}?select=*", self.base_url, REST_PREFIX, table)
    }

    /// Fetch every row of `table`.
    pub async fn fetch_rows<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let url = self.table_url(table);
        debug!("[DataService] GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(StorageError::from)
            .into_core()?;

        let rows: Vec<T> = Self::parse_response(response).await.into_core()?;
        debug!("[DataService] {} rows from {}", rows.len(), table);
        Ok(rows)
    }

    async fn parse_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> std::result::Result<T, StorageError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(StorageError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Best human-readable message from an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ServiceErrorResponse>(body)
        .ok()
        .and_then(|err| err.message.or(err.error))
        .unwrap_or_else(|| body.chars().take(200).collect())
}
