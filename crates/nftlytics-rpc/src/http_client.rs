//! HTTP client for the ledger node's view endpoint.
//!
//! Speaks the fullnode REST API: view calls are a POST of the request
//! body to `{node_url}/view`.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{RpcError, RpcResult};
use crate::view::{BoxFuture, ViewClient, ViewRequest};

/// Default timeout for view requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// View client backed by a fullnode REST endpoint.
///
/// Construct once at startup and share. The client is stateless; it holds
/// only the connection pool, so no teardown is required.
pub struct HttpViewClient {
    /// HTTP client.
    client: Client,
    /// Resolved view endpoint URL.
    view_url: String,
}

impl HttpViewClient {
    /// Create a new client against a node base URL
    /// (e.g. "https://fullnode.testnet.aptoslabs.com/v1").
    pub fn new(node_url: impl Into<String>) -> RpcResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| RpcError::Network(format!("Failed to create HTTP client: {e}")))?;

        let base = node_url.into();
        Ok(Self {
            client,
            view_url: format!("{}/view", base.trim_end_matches('/')),
        })
    }

    async fn execute(&self, request: ViewRequest) -> RpcResult<Value> {
        debug!(function = %request.function, "Executing view query");

        let response = self
            .client
            .post(&self.view_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RpcError::Network(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Network(format!("HTTP {status}: {body}")));
        }

        response.json().await.map_err(|e| {
            RpcError::MalformedResponse(format!("Response body is not valid JSON: {e}"))
        })
    }
}

impl ViewClient for HttpViewClient {
    fn view(&self, request: ViewRequest) -> BoxFuture<'_, RpcResult<Value>> {
        Box::pin(self.execute(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_request_serialization() {
        let request = ViewRequest {
            function: "0x1::NFTMarketplace::get_marketplace_analytics".to_string(),
            type_arguments: Vec::new(),
            arguments: vec![json!("0x1")],
        };
        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(
            body,
            r#"{"function":"0x1::NFTMarketplace::get_marketplace_analytics","type_arguments":[],"arguments":["0x1"]}"#
        );
    }

    #[test]
    fn test_view_url_resolution() {
        let client = HttpViewClient::new("https://fullnode.testnet.aptoslabs.com/v1").unwrap();
        assert_eq!(
            client.view_url,
            "https://fullnode.testnet.aptoslabs.com/v1/view"
        );

        // A trailing slash on the base URL must not double up.
        let client = HttpViewClient::new("https://fullnode.testnet.aptoslabs.com/v1/").unwrap();
        assert_eq!(
            client.view_url,
            "https://fullnode.testnet.aptoslabs.com/v1/view"
        );
    }
}
