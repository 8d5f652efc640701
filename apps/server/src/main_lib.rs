use std::sync::Arc;

use crate::config::Config;
use eparnova_core::{
    clients::{ClientService, ClientServiceTrait},
    portfolio::encours::{EncoursOptions, EncoursService, EncoursServiceTrait},
};
use eparnova_storage_rest::{ClientRepository, HoldingRepository, RestClientConfig, RestDataClient};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub encours_service: Arc<dyn EncoursServiceTrait>,
    pub client_service: Arc<dyn ClientServiceTrait>,
    /// Grouping and fetch policy used when a request does not specify them.
    pub default_options: EncoursOptions,
}

impl AppState {
    pub fn new(
        encours_service: Arc<dyn EncoursServiceTrait>,
        client_service: Arc<dyn ClientServiceTrait>,
        default_options: EncoursOptions,
    ) -> Self {
        Self {
            encours_service,
            client_service,
            default_options,
        }
    }
}

pub fn init_tracing() {
    let log_format = std::env::var("EPARNOVA_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let mut client_config = RestClientConfig::new(config.data_url.clone());
    client_config.api_key = config.data_key.clone();
    client_config.timeout = config.request_timeout;

    let data_client = Arc::new(RestDataClient::new(client_config)?);
    tracing::info!("Data service in use: {}", config.data_url);

    let client_repository = Arc::new(ClientRepository::new(data_client.clone()));
    let holding_repository = Arc::new(HoldingRepository::new(data_client));

    let encours_service = Arc::new(EncoursService::new(
        client_repository.clone(),
        holding_repository,
    ));
    let client_service = Arc::new(ClientService::new(client_repository));

    let default_options = EncoursOptions {
        grouping: config.real_estate_grouping,
        fetch_policy: config.fetch_policy,
        limit: None,
    };

    Ok(Arc::new(AppState::new(
        encours_service,
        client_service,
        default_options,
    )))
}
