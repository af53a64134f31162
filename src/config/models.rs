//! Configuration data structures for the Contentful client.
//!
//! This module defines the schema for the client settings (endpoint, token,
//! deadlines, cache freshness) and the logging output.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The root configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Contentful endpoint and request settings.
    #[serde(default)]
    pub client: ClientConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the Contentful GraphQL connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Full GraphQL endpoint, including space and environment.
    /// Default: empty (must be supplied)
    #[serde(default)]
    pub url: String,

    /// Delivery or preview API token sent as a bearer credential.
    /// Default: empty (must be supplied)
    #[serde(default)]
    pub token: String,

    /// Per-request HTTP timeout in seconds.
    /// Default: `30`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Deadline for a whole cache-or-fetch operation in seconds.
    /// Default: `30`
    #[serde(default = "default_timeout")]
    pub operation_timeout_seconds: u64,

    /// Cached entries older than this are refetched. `None` keeps them forever.
    /// Default: `None`
    #[serde(default)]
    pub cache_max_age_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn operation_timeout(&self) -> Duration {
        Duration::from_secs(self.operation_timeout_seconds)
    }

    pub fn cache_max_age(&self) -> Option<Duration> {
        self.cache_max_age_seconds.map(Duration::from_secs)
    }
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            token: String::new(),
            timeout_seconds: default_timeout(),
            operation_timeout_seconds: default_timeout(),
            cache_max_age_seconds: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
