/*
[INPUT]:  Server IPs and ids
[OUTPUT]: Server records (id, ip)
[POS]:    HTTP layer - /servers endpoints
[UPDATE]: When server endpoints or payloads change
*/

use std::sync::Arc;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::Result;
use crate::types::{AddServerRequest, CreatedResponse, Id, Server};

/// Physical servers known to the deployment
#[derive(Clone)]
pub struct ServerRegistry {
    transport: Arc<dyn Transport>,
}

impl ServerRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Register a server so proxies can be generated for it
    ///
    /// POST /servers
    pub async fn add_server(&self, ip: &str) -> Result<Id> {
        let body = AddServerRequest { ip: ip.to_string() };
        let request = ApiRequest::post("servers").json(serde_json::to_value(body)?);
        let created: CreatedResponse = decode(self.transport.execute(request).await?)?;
        Ok(created.id)
    }

    /// GET /servers
    pub async fn list_servers(&self) -> Result<Vec<Server>> {
        decode(self.transport.execute(ApiRequest::get("servers")).await?)
    }

    /// Delete a server; deleting an unknown id surfaces the server's error
    ///
    /// DELETE /servers/{id}
    pub async fn delete_server(&self, id: impl Into<Id>) -> Result<()> {
        let request = ApiRequest::delete("servers").segment(id.into());
        self.transport.execute(request).await?;
        Ok(())
    }
}
