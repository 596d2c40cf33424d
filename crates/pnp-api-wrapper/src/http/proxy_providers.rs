/*
[INPUT]:  Provider names, rotation limits, usage windows
[OUTPUT]: Proxy provider records and bandwidth usage in GB
[POS]:    HTTP layer - /proxy-providers endpoints
[UPDATE]: When proxy provider endpoints or payloads change
*/

use std::sync::Arc;

use chrono::NaiveDate;

use crate::http::client::{ApiRequest, Transport, decode};
use crate::http::{PnpError, Result};
use crate::types::{
    BandwidthUsageResponse, CreateProxyProviderRequest, CreatedResponse, Id, ProxyProvider,
    ProxyProviderUpdate, TimePeriod,
};

const DEFAULT_MAX_STATIC_MINUTES: u32 = 60;
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Proxy providers and their usage
#[derive(Clone)]
pub struct ProxyProviderRegistry {
    transport: Arc<dyn Transport>,
}

impl ProxyProviderRegistry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// `include_groups` embeds each provider's proxy groups under `proxy_groups`
    ///
    /// GET /proxy-providers?include_proxy_groups={bool}
    pub async fn list_proxy_providers(&self, include_groups: bool) -> Result<Vec<ProxyProvider>> {
        let request = ApiRequest::get("proxy-providers").query("include_proxy_groups", include_groups);
        decode(self.transport.execute(request).await?)
    }

    /// Create a provider with no proxies; groups are attached separately
    ///
    /// POST /proxy-providers
    pub async fn create_proxy_provider(
        &self,
        name: &str,
        max_static_minutes: Option<u32>,
    ) -> Result<Id> {
        let body = CreateProxyProviderRequest {
            name: name.to_string(),
            max_static_minutes: max_static_minutes.unwrap_or(DEFAULT_MAX_STATIC_MINUTES),
        };
        let request = ApiRequest::post("proxy-providers").json(serde_json::to_value(body)?);
        let created: CreatedResponse = decode(self.transport.execute(request).await?)?;
        Ok(created.id)
    }

    /// Same request as [`Self::list_proxy_providers`]: the endpoint takes no id.
    ///
    /// GET /proxy-providers?include_proxy_groups={bool}
    pub async fn get_proxy_provider(&self, include_groups: bool) -> Result<Vec<ProxyProvider>> {
        self.list_proxy_providers(include_groups).await
    }

    /// PATCH /proxy-providers/{id}
    pub async fn update_proxy_provider(
        &self,
        id: impl Into<Id>,
        update: ProxyProviderUpdate,
    ) -> Result<()> {
        update.validate()?;
        let request = ApiRequest::patch("proxy-providers")
            .segment(id.into())
            .json(serde_json::to_value(update)?);
        self.transport.execute(request).await?;
        Ok(())
    }

    /// The server also deletes every proxy group of the provider
    ///
    /// DELETE /proxy-providers/{id}
    pub async fn delete_proxy_provider(&self, id: impl Into<Id>) -> Result<()> {
        let request = ApiRequest::delete("proxy-providers").segment(id.into());
        self.transport.execute(request).await?;
        Ok(())
    }

    /// Bandwidth used by a provider in GB
    ///
    /// `TimePeriod::Custom` requires both `from` and `to`.
    ///
    /// GET /proxy-providers/{id}/bandwidth-usage?time_period={period}&from={date}&to={date}
    pub async fn get_proxy_provider_bandwidth_usage(
        &self,
        id: impl Into<Id>,
        time_period: TimePeriod,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<f64> {
        if time_period == TimePeriod::Custom && (from.is_none() || to.is_none()) {
            return Err(PnpError::invalid_argument(
                "If 'custom' is passed as the time period, 'from' and 'to' must also be provided",
            ));
        }

        let mut request = ApiRequest::get("proxy-providers")
            .segment(id.into())
            .segment("bandwidth-usage")
            .query("time_period", time_period);
        if let Some(from) = from {
            request = request.query("from", from.format(DATE_FORMAT));
        }
        if let Some(to) = to {
            request = request.query("to", to.format(DATE_FORMAT));
        }

        let usage: BandwidthUsageResponse = decode(self.transport.execute(request).await?)?;
        Ok(usage.gb_used)
    }
}
