// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{ContentfulError, Result};
use config::{Config, Environment, File, Map};
use std::path::{Path, PathBuf};

/// Prefix shared by every environment variable the client reads.
pub const ENV_PREFIX: &str = "CONTENTFUL";
/// GraphQL endpoint, e.g. `https://graphql.contentful.com/content/v1/spaces/<space>/environments/master`.
pub const ENV_URL: &str = "CONTENTFUL_URL";
/// Delivery (or preview) API token.
pub const ENV_TOKEN: &str = "CONTENTFUL_TOKEN";

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `CONTENTFUL_URL` / `CONTENTFUL_TOKEN` (highest)
    /// 2. Environment variables (prefix: CONTENTFUL_, nesting: `__`)
    /// 3. Config file
    /// 4. Defaults (lowest)
    pub fn load() -> Result<Self> {
        Self::load_from(Self::default_config_path())
    }

    /// Same as [`AppConfig::load`] with an explicit config file path.
    /// A missing file is not an error.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        Self::build(path.as_ref(), None)
    }

    fn build(path: &Path, env: Option<Map<String, String>>) -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::from(path).required(false))
            // CONTENTFUL_CLIENT__TIMEOUT_SECONDS -> client.timeout_seconds
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env.clone()),
            )
            .set_override_option("client.url", lookup(&env, ENV_URL))?
            .set_override_option("client.token", lookup(&env, ENV_TOKEN))?
            .build()
            .map_err(|e| ContentfulError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ContentfulError::Config(e.to_string()))
    }

    fn default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".contentful")
            .join("config.toml")
    }
}

impl ClientConfig {
    /// Read the client settings from `CONTENTFUL_*` environment variables:
    ///
    ///   CONTENTFUL_URL   - the GraphQL endpoint
    ///   CONTENTFUL_TOKEN - the published (or preview) api token
    ///
    /// plus the optional `CONTENTFUL_TIMEOUT_SECONDS`,
    /// `CONTENTFUL_OPERATION_TIMEOUT_SECONDS` and `CONTENTFUL_CACHE_MAX_AGE_SECONDS`.
    /// Missing values fall back to the defaults; nothing is validated here.
    pub fn from_env() -> Result<Self> {
        Self::from_env_source(None)
    }

    /// Like [`ClientConfig::from_env`], reading `env` instead of the process
    /// environment when it is given.
    pub fn from_env_source(env: Option<Map<String, String>>) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(env),
            )
            .build()
            .map_err(|e| ContentfulError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ContentfulError::Config(e.to_string()))
    }
}

fn lookup(env: &Option<Map<String, String>>, name: &str) -> Option<String> {
    match env {
        Some(map) => map.get(name).cloned(),
        None => std::env::var(name).ok(),
    }
}
