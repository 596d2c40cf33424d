/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod license;
pub mod observer;
pub mod proxy_groups;
pub mod proxy_networks;
pub mod proxy_providers;
pub mod servers;
pub mod users;

pub use error::{PnpError, Result};
pub use observer::{FailedRequest, LogObserver, NoopObserver, ResponseObserver};

pub use client::{ApiRequest, ClientConfig, HttpClient, Transport};
pub use license::LicenseRegistry;
pub use proxy_groups::ProxyGroupRegistry;
pub use proxy_networks::ProxyNetworkRegistry;
pub use proxy_providers::ProxyProviderRegistry;
pub use servers::ServerRegistry;
pub use users::UserRegistry;
