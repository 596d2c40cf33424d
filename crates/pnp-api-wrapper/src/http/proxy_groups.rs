/*
[INPUT]:  Provider ids, proxy strings (ip:port:username:password), regions
[OUTPUT]: Proxy group records
[POS]:    HTTP layer - /proxy-groups endpoints
[UPDATE]: When proxy group endpoints or payloads change
*/

use std::sync::Arc;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::Result;
use crate::types::{CreateProxyGroupRequest, CreatedResponse, Id, ProxyGroup, Region};

/// Groups of literal proxy strings, each owned by one provider
#[derive(Clone)]
pub struct ProxyGroupRegistry {
    transport: Arc<dyn Transport>,
}

impl ProxyGroupRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `exclude_proxies` drops the `proxies` key to shrink the response
    ///
    /// GET /proxy-groups?exclude_proxies={bool}&proxy_provider_id={id}
    pub async fn list_proxy_groups(
        &self,
        provider_id: Option<Id>,
        exclude_proxies: bool,
    ) -> Result<Vec<ProxyGroup>> {
        let mut request = ApiRequest::get("proxy-groups").query("exclude_proxies", exclude_proxies);
        if let Some(id) = provider_id {
            request = request.query("proxy_provider_id", id);
        }
        decode(self.transport.execute(request).await?)
    }

    /// Attach proxies to a provider
    ///
    /// `rotating` states whether the upstream proxies already rotate on every
    /// request. Proxy strings are sent verbatim.
    ///
    /// POST /proxy-groups/{provider_id}
    pub async fn create_proxy_group(
        &self,
        provider_id: impl Into<Id>,
        name: &str,
        proxies: Vec<String>,
        region: Region,
        rotating: bool,
    ) -> Result<Id> {
        let body = CreateProxyGroupRequest {
            name: name.to_string(),
            proxies,
            region,
            rotating,
        };
        let request = ApiRequest::post("proxy-groups")
            .segment(provider_id.into())
            .json(serde_json::to_value(body)?);
        let created: CreatedResponse = decode(self.transport.execute(request).await?)?;
        Ok(created.id)
    }

    /// DELETE /proxy-groups/{id}
    pub async fn delete_proxy_group(&self, id: impl Into<Id>) -> Result<()> {
        let request = ApiRequest::delete("proxy-groups").segment(id.into());
        self.transport.execute(request).await?;
        Ok(())
    }
}
