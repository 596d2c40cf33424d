/*
[INPUT]:  User emails, retrieval keys, per-network bandwidth allotments
[OUTPUT]: User records and generated proxy credentials
[POS]:    HTTP layer - /users endpoints
[UPDATE]: When user endpoints or payloads change
*/

use std::sync::Arc;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::Result;
use crate::types::{CreateUserRequest, CreatedUser, Id, NetworkAllotment, UpdateUserRequest, User};

/// End users and their proxy network allotments
#[derive(Clone)]
pub struct UserRegistry {
    transport: Arc<dyn Transport>,
}

impl UserRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// GET /users
    pub async fn get_users(&self) -> Result<Vec<User>> {
        decode(self.transport.execute(ApiRequest::get("users")).await?)
    }

    /// Create a user and receive its proxy credentials
    ///
    /// The retrieval key allows fetching the user later without the API key;
    /// without one, lookups always need the API key.
    ///
    /// POST /users
    pub async fn create_user(&self, email: &str, retrieval_key: Option<&str>) -> Result<CreatedUser> {
        let body = CreateUserRequest {
            email: email.to_string(),
            retrieval_key: retrieval_key.map(str::to_string),
        };
        let request = ApiRequest::post("users").json(serde_json::to_value(body)?);
        decode(self.transport.execute(request).await?)
    }

    /// Lookup authenticated by the user's retrieval key instead of the API key
    ///
    /// GET /users/{email}/{retrieval_key}
    pub async fn get_single_user(&self, email: &str, retrieval_key: &str) -> Result<User> {
        let request = ApiRequest::get("users").segment(email).segment(retrieval_key);
        decode(self.transport.execute(request).await?)
    }

    /// GET /users/{id}
    pub async fn get_single_user_by_id(&self, id: impl Into<Id>) -> Result<User> {
        let request = ApiRequest::get("users").segment(id.into());
        decode(self.transport.execute(request).await?)
    }

    /// Replace the retrieval key
    ///
    /// PATCH /users/{id}
    pub async fn update_user(&self, id: impl Into<Id>, retrieval_key: &str) -> Result<()> {
        let body = UpdateUserRequest {
            retrieval_key: retrieval_key.to_string(),
        };
        let request = ApiRequest::patch("users")
            .segment(id.into())
            .json(serde_json::to_value(body)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    /// DELETE /users/{id}
    pub async fn delete_user(&self, id: impl Into<Id>) -> Result<()> {
        let request = ApiRequest::delete("users").segment(id.into());
        self.transport.execute(request).await?;
        Ok(())
    }

    /// Grant a network to the user or overwrite its bandwidth figures
    ///
    /// PUT /users/{user_id}/proxy-networks
    pub async fn update_proxy_networks(
        &self,
        user_id: impl Into<Id>,
        allotment: NetworkAllotment,
    ) -> Result<()> {
        allotment.validate()?;
        let request = ApiRequest::put("users")
            .segment(user_id.into())
            .segment("proxy-networks")
            .json(serde_json::to_value(allotment)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    /// The user can no longer use proxies of this network
    ///
    /// DELETE /users/{user_id}/proxy-networks/{network_id}
    pub async fn remove_proxy_network(
        &self,
        user_id: impl Into<Id>,
        network_id: impl Into<Id>,
    ) -> Result<()> {
        let request = ApiRequest::delete("users")
            .segment(user_id.into())
            .segment("proxy-networks")
            .segment(network_id.into());
        self.transport.execute(request).await?;
        Ok(())
    }
}
