use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use eparnova_core::portfolio::encours::{FetchPolicy, RealEstateGrouping};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_url: String,
    pub data_key: Option<String>,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub fetch_policy: FetchPolicy,
    pub real_estate_grouping: RealEstateGrouping,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            data_url: "http://localhost:54321".to_string(),
            data_key: None,
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            fetch_policy: FetchPolicy::default(),
            real_estate_grouping: RealEstateGrouping::default(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Config::default();

        let listen_addr = match env_var("EPARNOVA_LISTEN_ADDR") {
            Some(v) => v
                .parse::<SocketAddr>()
                .with_context(|| format!("Invalid EPARNOVA_LISTEN_ADDR '{}'", v))?,
            None => defaults.listen_addr,
        };
        let data_url = env_var("EPARNOVA_DATA_URL").unwrap_or(defaults.data_url);
        let data_key = env_var("EPARNOVA_DATA_KEY");
        let cors_allow = env_var("EPARNOVA_CORS_ALLOW_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.cors_allow);
        let request_timeout = match env_var("EPARNOVA_REQUEST_TIMEOUT_MS") {
            Some(v) => Duration::from_millis(
                v.parse::<u64>()
                    .with_context(|| format!("Invalid EPARNOVA_REQUEST_TIMEOUT_MS '{}'", v))?,
            ),
            None => defaults.request_timeout,
        };
        let fetch_policy = match env_var("EPARNOVA_FETCH_POLICY") {
            Some(v) => v.parse::<FetchPolicy>().context("Invalid EPARNOVA_FETCH_POLICY")?,
            None => defaults.fetch_policy,
        };
        let real_estate_grouping = match env_var("EPARNOVA_REAL_ESTATE_GROUPING") {
            Some(v) => v
                .parse::<RealEstateGrouping>()
                .context("Invalid EPARNOVA_REAL_ESTATE_GROUPING")?,
            None => defaults.real_estate_grouping,
        };

        Ok(Self {
            listen_addr,
            data_url,
            data_key,
            cors_allow,
            request_timeout,
            fetch_policy,
            real_estate_grouping,
        })
    }
}
