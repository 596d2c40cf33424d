/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs for remote records (servers, networks, providers, groups, users)
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Server-assigned identifier, passed through exactly as received
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Id {
    Number(Number),
    Text(String),
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Id::Number(n) => write!(f, "{n}"),
            Id::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Id {
    fn from(value: i64) -> Self {
        Id::Number(value.into())
    }
}

impl From<i32> for Id {
    fn from(value: i32) -> Self {
        Id::Number(value.into())
    }
}

impl From<u32> for Id {
    fn from(value: u32) -> Self {
        Id::Number(value.into())
    }
}

impl From<Number> for Id {
    fn from(value: Number) -> Self {
        Id::Number(value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Id::Text(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Id::Text(value)
    }
}

impl From<&Id> for Id {
    fn from(value: &Id) -> Self {
        value.clone()
    }
}

/// Reads `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Physical host usable for proxy generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Named grouping of proxy providers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyNetwork {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxy_providers: Vec<Id>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyProvider {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Upper bound before a static proxy rotates
    #[serde(default)]
    pub max_static_minutes: Option<u32>,
    /// Present only when requested with `include_groups`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_groups: Option<Vec<ProxyGroup>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Region names; both are expected to be unique across the deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    #[serde(
        rename = "longName",
        alias = "longname",
        default,
        deserialize_with = "null_as_default"
    )]
    pub long_name: String,
    #[serde(
        rename = "shortName",
        alias = "shortname",
        default,
        deserialize_with = "null_as_default"
    )]
    pub short_name: String,
}

impl Region {
    pub fn new(long_name: impl Into<String>, short_name: impl Into<String>) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: short_name.into(),
        }
    }
}

/// Container of literal proxy strings (`ip:port:username:password`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProxyGroup {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy_provider_id: Option<Id>,
    /// Absent when listed with `exclude_proxies`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxies: Option<Vec<String>>,
    #[serde(default)]
    pub region: Option<Region>,
    /// Whether the upstream proxies already rotate on every request
    #[serde(default, deserialize_with = "null_as_default")]
    pub rotating: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Bandwidth in GB for one proxy network; fractions allowed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bandwidth {
    #[serde(default, deserialize_with = "null_as_default")]
    pub used: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub allotted: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Id,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retrieval_key: Option<String>,
    #[serde(default)]
    pub proxy_username: Option<String>,
    #[serde(default)]
    pub proxy_password: Option<String>,
    /// Keyed by proxy network id
    #[serde(default, deserialize_with = "null_as_default")]
    pub proxy_networks: HashMap<String, Bandwidth>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
