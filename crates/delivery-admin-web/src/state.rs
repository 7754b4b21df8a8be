//! Application state management

use crate::api_client::ApiClient;
use delivery_admin_core::Config;
use leptos::prelude::*;

/// Application state holding configuration and clients
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// API client for backend communication
    pub api_client: ApiClient,
}

impl AppState {
    /// Create new application state
    #[must_use]
    pub fn new(config: Config) -> Self {
        let api_client = ApiClient::from_config(&config);
        Self { config, api_client }
    }
}

/// API client of the state provided by the app
#[must_use]
pub fn use_api() -> ApiClient {
    expect_context::<AppState>().api_client
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_follows_configured_origin() {
        let mut config = Config::default();
        config.api.base_url = "http://api.internal:8080/".to_string();

        let state = AppState::new(config);
        assert_eq!(state.api_client.base_url(), "http://api.internal:8080");
    }
}
