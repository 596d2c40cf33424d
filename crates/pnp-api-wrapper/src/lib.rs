/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public PNP API wrapper crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod config;
pub mod http;
pub mod types;
pub mod wrapper;

pub use crate::config::Settings;

// Re-export commonly used types from http
pub use http::{
    ApiRequest,
    ClientConfig,
    FailedRequest,
    HttpClient,
    LicenseRegistry,
    LogObserver,
    NoopObserver,
    PnpError,
    ProxyGroupRegistry,
    ProxyNetworkRegistry,
    ProxyProviderRegistry,
    ResponseObserver,
    Result,
    ServerRegistry,
    Transport,
    UserRegistry,
};

// Re-export all types
pub use types::*;

pub use wrapper::PnpClient;
