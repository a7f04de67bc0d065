//! Analytics acquisition pipeline.
//!
//! One view call per fetch: shape the request, validate the payload,
//! rescale revenue into display currency. No retries; a fetch is an
//! idempotent read and the caller decides when to try again.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use nftlytics_core::{to_display_amount, AnalyticsSnapshot, NftSaleInfo};

use crate::error::RpcResult;
use crate::parser::parse_analytics;
use crate::view::{ViewClient, ViewRequest};

/// View function path on the marketplace module.
const ANALYTICS_FUNCTION: &str = "NFTMarketplace::get_marketplace_analytics";

/// Fetches and normalizes marketplace analytics.
#[derive(Clone)]
pub struct AnalyticsFetcher {
    client: Arc<dyn ViewClient>,
}

impl AnalyticsFetcher {
    /// Create a fetcher over a shared view client.
    pub fn new(client: Arc<dyn ViewClient>) -> Self {
        Self { client }
    }

    /// Fetch the analytics snapshot for a marketplace address.
    ///
    /// Issues exactly one view query, scoping the function id to the
    /// address and passing the address as sole argument. Either the whole
    /// tuple parses and converts, or the call fails; no partial snapshot
    /// is ever returned.
    pub async fn fetch(&self, marketplace_address: &str) -> RpcResult<AnalyticsSnapshot> {
        let request = ViewRequest {
            function: format!("{marketplace_address}::{ANALYTICS_FUNCTION}"),
            type_arguments: Vec::new(),
            arguments: vec![Value::String(marketplace_address.to_string())],
        };

        let raw = self.client.view(request).await?;
        let parsed = parse_analytics(&raw)?;

        let popular_nfts = parsed
            .nfts
            .into_iter()
            .map(|nft| NftSaleInfo::new(nft.name, nft.sales, to_display_amount(nft.revenue)))
            .collect();

        let snapshot = AnalyticsSnapshot::new(parsed.total_sales, popular_nfts);

        debug!(
            total_sales = snapshot.total_sales,
            nft_count = snapshot.popular_nfts.len(),
            "Fetched marketplace analytics"
        );

        Ok(snapshot)
    }
}
