//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use delivery_admin_core::Config;
use delivery_admin_web::api_client::ApiClient;
use wiremock::MockServer;

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

/// Test configuration builder
pub struct TestConfigBuilder {
    config: Config,
}

impl TestConfigBuilder {
    /// Create a new test configuration builder
    pub fn new() -> Self {
        let mut config = Config::default();
        config.logging.level = "debug".to_string();
        Self { config }
    }

    /// Point the console at a mock backend
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.api.base_url = url.into();
        self
    }

    /// Set a request timeout
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api.request_timeout_secs = Some(secs);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mock backend plus a client wired to it
pub struct TestBackend {
    pub server: MockServer,
    pub client: ApiClient,
}

impl TestBackend {
    /// Start a mock server and build a client from a test configuration
    pub async fn start() -> Self {
        init_test_logging();
        let server = MockServer::start().await;
        let config = TestConfigBuilder::new()
            .with_base_url(server.uri())
            .with_timeout_secs(10)
            .build();

        Self {
            client: ApiClient::from_config(&config),
            server,
        }
    }
}
