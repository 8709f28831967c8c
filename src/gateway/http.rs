//! HTTP-backed status lookup capability.
//!
//! Queries the environment's order-status endpoint with the client
//! credentials from [`crate::config::SdkConfig`]. Timeout policy lives in
//! the `reqwest` client, not in the core.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::config::schema::SdkConfig;
use crate::gateway::capabilities::StatusCapability;
use crate::gateway::types::{GatewayError, IntentStatusRecord, TrackingId};
use crate::intent::IntentKind;

const ORDERS_PATH: &str = "api/oc/v1/orders";

/// Status lookup over the gateway REST API.
pub struct HttpStatusCapability {
    client: reqwest::Client,
    base_url: Url,
    client_key: String,
    client_id: String,
}

impl HttpStatusCapability {
    pub fn new(config: &SdkConfig) -> Result<Self, GatewayError> {
        let base_url = Url::parse(config.gateway_url())
            .map_err(|e| GatewayError::Transport(format!("invalid gateway URL: {e}")))?;

        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            client_key: config.client_key.clone(),
            client_id: config.client_id.clone(),
        })
    }
}

/// Envelope the order-status endpoint wraps its records in.
#[derive(Debug, Deserialize)]
struct OrdersResponse {
    #[serde(default)]
    data: Vec<IntentStatusRecord>,
}

#[async_trait]
impl StatusCapability for HttpStatusCapability {
    async fn fetch_status(
        &self,
        tracking_id: &TrackingId,
        kind: IntentKind,
    ) -> Result<Vec<IntentStatusRecord>, GatewayError> {
        let url = self
            .base_url
            .join(ORDERS_PATH)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let response = self
            .client
            .get(url)
            .query(&[
                ("intentId", tracking_id.as_str()),
                ("intentType", kind.as_str()),
            ])
            .header("x-api-key", &self.client_key)
            .header("x-client-id", &self.client_id)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GatewayError::Backend(format!(
                "order lookup returned {}",
                response.status()
            )));
        }

        let body: OrdersResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(body.data)
    }
}
