/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities: mock server, in-memory backend, recording observer
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for pnp-api-wrapper tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use pnp_api_wrapper::{ApiRequest, FailedRequest, PnpError, ResponseObserver, Result, Transport};
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// License key used by every test client
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "test-license-key";

/// Observer that keeps every reported failure
#[allow(dead_code)]
pub fn recording_observer() -> (impl ResponseObserver + 'static, Arc<Mutex<Vec<FailedRequest>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let observer = move |failure: &FailedRequest| {
        sink.lock().unwrap().push(failure.clone());
    };
    (observer, seen)
}

#[derive(Default)]
struct BackendState {
    next_id: u64,
    records: HashMap<String, Vec<Value>>,
    requests: Vec<ApiRequest>,
}

/// In-memory stand-in for the remote API
///
/// Supports list, create and delete on every top-level resource. Created
/// records get string ids of the form `{resource}-{n}`.
#[derive(Default)]
pub struct MemoryBackend {
    state: Mutex<BackendState>,
}

#[allow(dead_code)]
impl MemoryBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn records(&self, resource: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .records
            .get(resource)
            .cloned()
            .unwrap_or_default()
    }
}

fn not_found(request: &ApiRequest) -> PnpError {
    PnpError::Api {
        method: request.method().clone(),
        url: request.path(),
        status: StatusCode::NOT_FOUND,
        message: Some("not found".to_string()),
        headers: Default::default(),
        body: r#"{"error":"not found"}"#.to_string(),
    }
}

fn record_key(record: &Value) -> Option<&str> {
    match record {
        Value::String(domain) => Some(domain),
        other => other.get("id").and_then(Value::as_str),
    }
}

#[async_trait]
impl Transport for MemoryBackend {
    async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let mut state = self.state.lock().unwrap();
        state.requests.push(request.clone());

        let segments = request.segments().to_vec();
        let resource = segments[0].clone();

        let method = request.method().clone();

        if method == Method::GET && segments.len() == 1 {
            return Ok(Value::Array(
                state.records.get(&resource).cloned().unwrap_or_default(),
            ));
        }

        if method == Method::POST && resource == "authorized-domains" {
            let domain = request
                .body()
                .and_then(|b| b.get("domain"))
                .cloned()
                .unwrap_or(Value::Null);
            state.records.entry(resource).or_default().push(domain);
            return Ok(Value::Null);
        }

        if method == Method::POST {
            state.next_id += 1;
            let id = format!("{resource}-{}", state.next_id);

            let mut record = request.body().cloned().unwrap_or_else(|| json!({}));
            record["id"] = json!(id);
            if let Some(provider_id) = segments.get(1) {
                record["proxy_provider_id"] = json!(provider_id);
            }

            let mut response = json!({ "id": id });
            if resource == "users" {
                response["proxy_username"] = json!(format!("pu-{id}"));
                response["proxy_password"] = json!(format!("pp-{id}"));
                record["proxy_username"] = response["proxy_username"].clone();
                record["proxy_password"] = response["proxy_password"].clone();
            }

            state.records.entry(resource).or_default().push(record);
            return Ok(response);
        }

        if method == Method::DELETE {
            let key = match segments.get(1) {
                Some(id) => id.clone(),
                None => request
                    .query_pairs()
                    .iter()
                    .find(|(k, _)| k == "domain")
                    .map(|(_, v)| v.clone())
                    .ok_or_else(|| not_found(&request))?,
            };

            let records = state.records.entry(resource).or_default();
            let before = records.len();
            records.retain(|record| record_key(record) != Some(key.as_str()));
            if records.len() == before {
                return Err(not_found(&request));
            }
            return Ok(Value::Null);
        }

        Err(not_found(&request))
    }
}
