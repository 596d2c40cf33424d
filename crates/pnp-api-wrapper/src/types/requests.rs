/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs, including partial-update builders with presence checks
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::{Id, Region};
use crate::http::{PnpError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddServerRequest {
    pub ip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProxyNetworkRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_providers: Option<Vec<Id>>,
}

/// Partial update of a proxy network; at least one field must be set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyNetworkUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_providers: Option<Vec<Id>>,
}

impl ProxyNetworkUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn proxy_providers<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.proxy_providers = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.is_none() && self.proxy_providers.is_none() {
            return Err(PnpError::invalid_argument(
                "Must pass either name or proxy providers",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProxyProviderRequest {
    pub name: String,
    pub max_static_minutes: u32,
}

/// Partial update of a proxy provider
///
/// Valid when `name` is non-empty or `max_static_minutes` is set; `Some(0)`
/// counts as set. Empty names are never sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyProviderUpdate {
    #[serde(skip_serializing_if = "is_blank")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_static_minutes: Option<u32>,
}

impl ProxyProviderUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn max_static_minutes(mut self, minutes: u32) -> Self {
        self.max_static_minutes = Some(minutes);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.name) && self.max_static_minutes.is_none() {
            return Err(PnpError::invalid_argument(
                "Either name or max_static_minutes must be passed to update_proxy_provider",
            ));
        }
        Ok(())
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProxyGroupRequest {
    pub name: String,
    pub proxies: Vec<String>,
    pub region: Region,
    pub rotating: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrieval_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub retrieval_key: String,
}

/// Bandwidth allotment of one user on one proxy network
///
/// Every field is required; zero is a legitimate value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkAllotment {
    pub proxy_network_id: Option<Id>,
    pub used: Option<f64>,
    pub allotted: Option<f64>,
}

impl NetworkAllotment {
    pub fn new(proxy_network_id: impl Into<Id>, gb_used: f64, gb_allotted: f64) -> Self {
        Self {
            proxy_network_id: Some(proxy_network_id.into()),
            used: Some(gb_used),
            allotted: Some(gb_allotted),
        }
    }

    pub fn proxy_network_id(mut self, id: impl Into<Id>) -> Self {
        self.proxy_network_id = Some(id.into());
        self
    }

    pub fn used(mut self, gb: f64) -> Self {
        self.used = Some(gb);
        self
    }

    pub fn allotted(mut self, gb: f64) -> Self {
        self.allotted = Some(gb);
        self
    }

    pub fn validate(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.proxy_network_id.is_none() {
            missing.push("proxy_network_id");
        }
        if self.used.is_none() {
            missing.push("used");
        }
        if self.allotted.is_none() {
            missing.push("allotted");
        }
        if !missing.is_empty() {
            return Err(PnpError::invalid_argument(format!(
                "Missing arguments: {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorizedDomainRequest {
    pub domain: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_network_update_requires_a_field() {
        assert!(ProxyNetworkUpdate::new().validate().is_err());
        assert!(ProxyNetworkUpdate::new().name("").validate().is_ok());
        assert!(
            ProxyNetworkUpdate::new()
                .proxy_providers(Vec::<Id>::new())
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn test_provider_update_ignores_empty_name() {
        let update = ProxyProviderUpdate::new().name("");
        assert!(update.validate().unwrap_err().is_argument_error());

        let update = update.max_static_minutes(0);
        assert!(update.validate().is_ok());
        assert_eq!(
            serde_json::to_value(&update).expect("ser"),
            json!({"max_static_minutes": 0})
        );
    }

    #[test]
    fn test_allotment_lists_missing_fields() {
        let err = NetworkAllotment::default().used(0.0).validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument: Missing arguments: proxy_network_id, allotted"
        );
        assert!(NetworkAllotment::new(3, 0.0, 0.0).validate().is_ok());
    }
}
