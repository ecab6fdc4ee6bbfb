//! Application state management

use crate::api_client::ApiClient;
use storefront_core::Config;

/// Application state holding configuration and the backend client
#[derive(Clone, Debug)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::from_config(&config.backend);
        Self { config, api_client }
    }

    /// Whether the data-driven reports are enabled
    #[must_use]
    pub const fn reports_enabled(&self) -> bool {
        self.config.reports.enabled
    }
}
