/*
[INPUT]:  Domain names
[OUTPUT]: Authorized domain list of the license
[POS]:    HTTP layer - license-management /authorized-domains endpoints
[UPDATE]: When license endpoints or payloads change
*/

use std::sync::Arc;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::Result;
use crate::types::AuthorizedDomainRequest;

/// Domains authorized under the license key
///
/// Talks to the license-management service, not the deployment API.
#[derive(Clone)]
pub struct LicenseRegistry {
    transport: Arc<dyn Transport>,
}

impl LicenseRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// GET /authorized-domains
    pub async fn get_authorized_domains(&self) -> Result<Vec<String>> {
        decode(self.transport.execute(ApiRequest::get("authorized-domains")).await?)
    }

    /// POST /authorized-domains
    pub async fn add_authorized_domain(&self, domain: &str) -> Result<()> {
        let body = AuthorizedDomainRequest {
            domain: domain.to_string(),
        };
        let request = ApiRequest::post("authorized-domains").json(serde_json::to_value(body)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    /// DELETE /authorized-domains?domain={domain}
    pub async fn delete_authorized_domain(&self, domain: &str) -> Result<()> {
        let request = ApiRequest::delete("authorized-domains").query("domain", domain);
        self.transport.execute(request).await?;
        Ok(())
    }
}
