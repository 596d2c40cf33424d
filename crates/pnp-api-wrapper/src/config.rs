/*
[INPUT]:  PNP_* environment variables
[OUTPUT]: Parsed connection settings and derived ClientConfig
[POS]:    Configuration layer - client construction parameters
[UPDATE]: When adding new configuration options
*/

use std::sync::Arc;
use std::time::Duration;

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::http::client::LICENSE_BASE_URL;
use crate::http::{ClientConfig, PnpError, ResponseObserver, Result};

const ENV_PREFIX: &str = "PNP";

/// Connection settings for a deployment
///
/// Read from `PNP_ENDPOINT`, `PNP_API_KEY`, `PNP_LICENSE_URL`,
/// `PNP_TIMEOUT_SECS` and `PNP_CONNECT_TIMEOUT_SECS`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    /// Base URL of the deployment API, e.g. `https://111.111.111.111:9100`
    pub endpoint: String,
    /// License key, sent as `X-API-KEY`
    pub api_key: String,
    #[serde(default = "default_license_url")]
    pub license_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_source(Environment::with_prefix(ENV_PREFIX))
    }

    /// Load from an explicit environment source (e.g. one built with `Environment::source`)
    pub fn from_source(source: Environment) -> Result<Self> {
        Config::builder()
            .add_source(source)
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| PnpError::Config(format!("Failed to load settings: {e}")))
    }

    pub fn client_config(&self, observer: Arc<dyn ResponseObserver>) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout_secs.map(Duration::from_secs),
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            user_agent: None,
            license_base_url: self.license_url.clone(),
            observer,
        }
    }
}

fn default_license_url() -> String {
    LICENSE_BASE_URL.to_string()
}
