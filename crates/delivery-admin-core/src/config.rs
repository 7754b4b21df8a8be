//! Configuration management for the delivery admin console

use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Defaults compiled into every build, browser included
const DEFAULTS: &str = r#"
[api]
base_url = "http://localhost:3001"

[ui]
toast_duration_ms = 4000
locale = "pt-BR"
currency_symbol = "R$"

[logging]
level = "info"
"#;

/// Environment variable prefix, e.g. `DELIVERY_ADMIN__API__BASE_URL`
const ENV_PREFIX: &str = "DELIVERY_ADMIN";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend API configuration
    #[serde(default)]
    pub api: ApiConfig,

    /// User interface configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend API configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin every request is sent to
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Optional request timeout in seconds; unset means requests never time out
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

/// User interface configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a notification stays on screen
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,

    /// Display locale
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Currency symbol prefixed to monetary values
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

const fn default_toast_duration_ms() -> u64 {
    4000
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_currency_symbol() -> String {
    "R$".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: default_toast_duration_ms(),
            locale: default_locale(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from the embedded defaults, an optional
    /// `delivery-admin` file in the working directory and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or parsed.
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::with_name("delivery-admin").required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        tracing::debug!(base_url = %config.api.base_url, "configuration loaded");
        Ok(config)
    }

    /// Load configuration from the embedded defaults layered with a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or cannot be parsed.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .add_source(File::from(path.as_ref()).required(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Configuration for the browser build.
    ///
    /// There is no filesystem or process environment in the browser, so the
    /// only override is an API origin baked in at compile time through
    /// `DELIVERY_ADMIN_API_URL`.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded defaults cannot be parsed.
    pub fn embedded() -> crate::Result<Self> {
        Self::embedded_with(option_env!("DELIVERY_ADMIN_API_URL"))
    }

    fn embedded_with(api_url: Option<&str>) -> crate::Result<Self> {
        let builder = config::Config::builder()
            .add_source(File::from_str(DEFAULTS, FileFormat::Toml))
            .set_override_option("api.base_url", api_url.map(str::to_string))?;

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the console cannot work with
    ///
    /// # Errors
    ///
    /// Returns an error if the API origin is not an http(s) URL.
    pub fn validate(&self) -> crate::Result<()> {
        let url = self.api.base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(crate::Error::Configuration {
                message: format!("api.base_url must be an http(s) URL, got '{url}'"),
            });
        }
        Ok(())
    }
}
