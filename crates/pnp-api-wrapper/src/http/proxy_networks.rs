/*
[INPUT]:  Network names, provider ids and partial updates
[OUTPUT]: Proxy network records
[POS]:    HTTP layer - /proxy-networks endpoints
[UPDATE]: When proxy network endpoints or payloads change
*/

use std::sync::Arc;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::Result;
use crate::types::{CreateProxyNetworkRequest, CreatedResponse, Id, ProxyNetwork, ProxyNetworkUpdate};

/// Named groupings of proxy providers
#[derive(Clone)]
pub struct ProxyNetworkRegistry {
    transport: Arc<dyn Transport>,
}

impl ProxyNetworkRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// List proxy networks, optionally only those containing a provider
    ///
    /// GET /proxy-networks?proxy_provider_id={id}
    pub async fn list_proxy_networks(&self, provider_id: Option<Id>) -> Result<Vec<ProxyNetwork>> {
        let mut request = ApiRequest::get("proxy-networks");
        if let Some(id) = provider_id {
            request = request.query("proxy_provider_id", id);
        }
        decode(self.transport.execute(request).await?)
    }

    /// POST /proxy-networks
    pub async fn create_proxy_network(
        &self,
        name: &str,
        provider_ids: Option<Vec<Id>>,
    ) -> Result<Id> {
        let body = CreateProxyNetworkRequest {
            name: name.to_string(),
            proxy_providers: provider_ids,
        };
        let request = ApiRequest::post("proxy-networks").json(serde_json::to_value(body)?);
        let created: CreatedResponse = decode(self.transport.execute(request).await?)?;
        Ok(created.id)
    }

    /// The server does not require the API key here; it is sent anyway.
    ///
    /// GET /proxy-networks/{id}
    pub async fn get_proxy_network(&self, id: impl Into<Id>) -> Result<ProxyNetwork> {
        let request = ApiRequest::get("proxy-networks").segment(id.into());
        decode(self.transport.execute(request).await?)
    }

    /// Change the name and/or provider list; only supplied fields are sent
    ///
    /// PATCH /proxy-networks/{id}
    pub async fn update_proxy_network(
        &self,
        id: impl Into<Id>,
        update: ProxyNetworkUpdate,
    ) -> Result<()> {
        update.validate()?;
        let request = ApiRequest::patch("proxy-networks")
            .segment(id.into())
            .json(serde_json::to_value(update)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    /// Associated providers are left in place
    ///
    /// DELETE /proxy-networks/{id}
    pub async fn delete_proxy_network(&self, id: impl Into<Id>) -> Result<()> {
        let request = ApiRequest::delete("proxy-networks").segment(id.into());
        self.transport.execute(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ClientConfig, HttpClient};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registry(server: &MockServer) -> ProxyNetworkRegistry {
        let client = HttpClient::new(&server.uri(), "test-key", &ClientConfig::default())
            .expect("client init");
        ProxyNetworkRegistry::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_list_proxy_networks_filtered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proxy-networks"))
            .and(query_param("proxy_provider_id", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "net-1", "name": "residential", "proxy_providers": [4, 5]}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let networks = registry(&server)
            .list_proxy_networks(Some(Id::from(4)))
            .await
            .expect("list_proxy_networks failed");

        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].name, "residential");
        assert_eq!(networks[0].proxy_providers, vec![Id::from(4), Id::from(5)]);
    }

    #[tokio::test]
    async fn test_create_proxy_network_without_providers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/proxy-networks"))
            .and(body_json(json!({"name": "datacenter"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "net-2"})))
            .expect(1)
            .mount(&server)
            .await;

        let id = registry(&server)
            .create_proxy_network("datacenter", None)
            .await
            .expect("create_proxy_network failed");
        assert_eq!(id, Id::from("net-2"));
    }

    #[tokio::test]
    async fn test_get_proxy_network() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proxy-networks/net-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(
                {"id": "net-1", "name": "residential", "proxy_providers": [], "public": true}
            )))
            .expect(1)
            .mount(&server)
            .await;

        let network = registry(&server)
            .get_proxy_network("net-1")
            .await
            .expect("get_proxy_network failed");
        assert_eq!(network.id, Id::from("net-1"));
        assert_eq!(network.extra.get("public"), Some(&json!(true)));
    }

    #[tokio::test]
    async fn test_update_proxy_network_sends_only_supplied_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/proxy-networks/net-1"))
            .and(body_json(json!({"proxy_providers": [1, "p-2"]})))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        registry(&server)
            .update_proxy_network(
                "net-1",
                ProxyNetworkUpdate::new().proxy_providers([Id::from(1), Id::from("p-2")]),
            )
            .await
            .expect("update_proxy_network failed");
    }

    #[tokio::test]
    async fn test_update_proxy_network_without_fields_fails_locally() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = registry(&server)
            .update_proxy_network("net-1", ProxyNetworkUpdate::new())
            .await
            .expect_err("empty update must fail");
        assert!(err.is_argument_error());
    }

    #[tokio::test]
    async fn test_delete_proxy_network() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/proxy-networks/net-1"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        registry(&server)
            .delete_proxy_network("net-1")
            .await
            .expect("delete_proxy_network failed");
    }

    #[tokio::test]
    async fn test_network_records_with_null_or_float_fields() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/proxy-networks"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": "n1", "name": "x", "proxy_providers": null}
            ])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/proxy-networks/7"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1.5, "name": "y"})),
            )
            .mount(&server)
            .await;

        let registry = registry(&server);
        let networks = registry
            .list_proxy_networks(None)
            .await
            .expect("list_proxy_networks failed");
        assert!(networks[0].proxy_providers.is_empty());

        let network = registry
            .get_proxy_network(7)
            .await
            .expect("get_proxy_network failed");
        assert_eq!(network.id.to_string(), "1.5");
        assert!(network.proxy_providers.is_empty());
    }
}
