/*
[INPUT]:  Deployment endpoint, license key, optional ClientConfig or transports
[OUTPUT]: One handle exposing every resource registry
[POS]:    Crate entry point - composes transports and registries
[UPDATE]: When adding registries or construction options
*/

use std::sync::Arc;

use tracing::debug;

use crate::config::Settings;
use crate::http::{
    ClientConfig, HttpClient, LicenseRegistry, ProxyGroupRegistry, ProxyNetworkRegistry,
    ProxyProviderRegistry, Result, ServerRegistry, Transport, UserRegistry,
};

/// Client for a proxy network deployment and its license service
///
/// ```no_run
/// # async fn run() -> pnp_api_wrapper::Result<()> {
/// let client = pnp_api_wrapper::PnpClient::new("https://111.111.111.111:9100", "license-key")?;
/// let _servers = client.servers.list_servers().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PnpClient {
    pub servers: ServerRegistry,
    pub proxy_networks: ProxyNetworkRegistry,
    pub proxy_providers: ProxyProviderRegistry,
    pub proxy_groups: ProxyGroupRegistry,
    pub users: UserRegistry,
    pub license: LicenseRegistry,
}

impl PnpClient {
    /// Create a client with default configuration
    pub fn new(endpoint_base_url: &str, api_key: &str) -> Result<Self> {
        Self::with_config(endpoint_base_url, api_key, ClientConfig::default())
    }

    /// Create a client with custom configuration
    ///
    /// Builds two transports sharing the API key: one for the deployment,
    /// one for `config.license_base_url`.
    pub fn with_config(endpoint_base_url: &str, api_key: &str, config: ClientConfig) -> Result<Self> {
        let api = HttpClient::new(endpoint_base_url, api_key, &config)?;
        let license = HttpClient::new(&config.license_base_url, api_key, &config)?;
        debug!(
            endpoint = %api.base_url(),
            license = %license.base_url(),
            "pnp client configured"
        );
        Ok(Self::from_transports(Arc::new(api), Arc::new(license)))
    }

    /// Create a client from loaded settings; `config` supplies the observer and user agent
    pub fn from_settings(settings: &Settings, config: ClientConfig) -> Result<Self> {
        let mut merged = settings.client_config(config.observer.clone());
        merged.user_agent = config.user_agent;
        Self::with_config(&settings.endpoint, &settings.api_key, merged)
    }

    /// Wire registries to caller-provided transports
    pub fn from_transports(api: Arc<dyn Transport>, license: Arc<dyn Transport>) -> Self {
        Self {
            servers: ServerRegistry::new(api.clone()),
            proxy_networks: ProxyNetworkRegistry::new(api.clone()),
            proxy_providers: ProxyProviderRegistry::new(api.clone()),
            proxy_groups: ProxyGroupRegistry::new(api.clone()),
            users: UserRegistry::new(api),
            license: LicenseRegistry::new(license),
        }
    }
}
