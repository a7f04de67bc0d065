//! Application orchestration.
//!
//! Wires the single shared HTTP view client into the analytics store,
//! drives refreshes, and renders store events as plain text. The
//! rendering here stands in for the dashboard's chart and table widgets,
//! which are outside the core.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info};

use nftlytics_core::{Amount, AnalyticsSnapshot, FetchStatus, NftSaleInfo};
use nftlytics_rpc::HttpViewClient;
use nftlytics_store::{AnalyticsStore, StoreEvent};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Main application.
pub struct Application {
    config: AppConfig,
    store: AnalyticsStore,
    marketplace_address: String,
    inspect: Option<String>,
}

impl Application {
    /// Create the application.
    ///
    /// The view client is constructed once here and shared for the
    /// process lifetime; it is stateless and needs no teardown.
    pub fn new(
        config: AppConfig,
        marketplace_address: String,
        inspect: Option<String>,
    ) -> AppResult<Self> {
        if marketplace_address.is_empty() {
            return Err(AppError::Config(
                "Marketplace address must not be empty".to_string(),
            ));
        }

        let client = Arc::new(HttpViewClient::new(&config.node_url)?);
        let store = AnalyticsStore::new(client);

        Ok(Self {
            config,
            store,
            marketplace_address,
            inspect,
        })
    }

    /// Run: fetch once and render; in watch mode, keep refreshing.
    pub async fn run(&self) -> AppResult<()> {
        let mut events = self.store.subscribe();
        self.store.refresh(self.marketplace_address.clone());

        if self.config.watch_interval_secs == 0 {
            self.wait_for_outcome(&mut events).await?;
            return Ok(());
        }

        let mut ticker =
            tokio::time::interval(Duration::from_secs(self.config.watch_interval_secs));
        ticker.tick().await; // first tick fires immediately
        loop {
            self.wait_for_outcome(&mut events).await?;
            ticker.tick().await;
            info!(address = %self.marketplace_address, "Refreshing analytics");
            self.store.refresh(self.marketplace_address.clone());
        }
    }

    /// Drain events until the in-flight fetch settles, rendering as we go.
    async fn wait_for_outcome(
        &self,
        events: &mut broadcast::Receiver<StoreEvent>,
    ) -> AppResult<()> {
        loop {
            match events.recv().await {
                Ok(StoreEvent::StatusChanged(FetchStatus::Ready(snapshot))) => {
                    println!("{}", render_snapshot(&snapshot));
                    self.inspect_row(&snapshot);
                    return Ok(());
                }
                Ok(StoreEvent::StatusChanged(FetchStatus::Failed(reason))) => {
                    println!("{reason}");
                    return Ok(());
                }
                Ok(event) => debug!(?event, "Store event"),
                Err(RecvError::Lagged(skipped)) => {
                    debug!(skipped, "Event subscriber lagged");
                }
                Err(RecvError::Closed) => return Err(AppError::StoreClosed),
            }
        }
    }

    /// Select the requested row, render its detail view, then dismiss.
    fn inspect_row(&self, snapshot: &AnalyticsSnapshot) {
        let Some(name) = &self.inspect else {
            return;
        };

        match snapshot.popular_nfts.iter().find(|nft| &nft.name == name) {
            Some(row) => {
                self.store.select(row.clone());
                if let Some(selected) = self.store.selection() {
                    println!("{}", render_detail(&selected));
                }
                self.store.clear_selection();
            }
            None => println!("No NFT named {name:?} in the current snapshot"),
        }
    }
}

/// Render the Ready snapshot as plain text.
fn render_snapshot(snapshot: &AnalyticsSnapshot) -> String {
    let mut out = String::new();
    out.push_str("NFT Marketplace Analytics\n");
    out.push_str(&format!("Total sales: {}\n", snapshot.total_sales));

    if snapshot.is_empty() {
        out.push_str("No NFT sales recorded.\n");
        return out;
    }

    let total_revenue = snapshot
        .popular_nfts
        .iter()
        .fold(Amount::ZERO, |acc, nft| acc + nft.revenue);
    out.push_str(&format!("Total revenue: {} APT\n\n", format_amount(total_revenue)));

    let width = snapshot
        .popular_nfts
        .iter()
        .map(|nft| nft.name.len())
        .max()
        .unwrap_or(0)
        .max(4);
    out.push_str(&format!(
        "{:<width$}  {:>7}  {:>13}\n",
        "Name", "Sales", "Revenue (APT)"
    ));
    for nft in &snapshot.popular_nfts {
        out.push_str(&format!(
            "{:<width$}  {:>7}  {:>13}\n",
            nft.name,
            nft.sales,
            format_amount(nft.revenue)
        ));
    }
    out
}

/// Render the detail view for a selected row (the dashboard's modal).
fn render_detail(nft: &NftSaleInfo) -> String {
    format!(
        "NFT Details\n  Name:    {}\n  Sales:   {}\n  Revenue: {} APT\n",
        nft.name,
        nft.sales,
        format_amount(nft.revenue)
    )
}

/// Two-decimal display formatting; the stored amount stays exact.
fn format_amount(amount: Amount) -> String {
    format!("{:.2}", amount.inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nftlytics_core::to_display_amount;

    fn sample_snapshot() -> AnalyticsSnapshot {
        AnalyticsSnapshot::new(
            3,
            vec![
                NftSaleInfo::new("Art1", 2, to_display_amount(150_000_000)),
                NftSaleInfo::new("LongerName", 1, to_display_amount(25_000_000)),
            ],
        )
    }

    #[test]
    fn test_render_snapshot_lists_all_rows() {
        let out = render_snapshot(&sample_snapshot());

        assert!(out.contains("Total sales: 3"));
        assert!(out.contains("Total revenue: 1.75 APT"));
        assert!(out.contains("Art1"));
        assert!(out.contains("LongerName"));
        assert!(out.contains("1.50"));
        assert!(out.contains("0.25"));
    }

    #[test]
    fn test_render_empty_snapshot() {
        let out = render_snapshot(&AnalyticsSnapshot::new(0, Vec::new()));
        assert!(out.contains("Total sales: 0"));
        assert!(out.contains("No NFT sales recorded."));
    }

    #[test]
    fn test_render_detail() {
        let nft = NftSaleInfo::new("Art1", 2, to_display_amount(150_000_000));
        let out = render_detail(&nft);

        assert!(out.contains("Name:    Art1"));
        assert!(out.contains("Sales:   2"));
        assert!(out.contains("Revenue: 1.50 APT"));
    }

    #[test]
    fn test_format_amount_two_decimals() {
        assert_eq!(format_amount(to_display_amount(150_000_000)), "1.50");
        assert_eq!(format_amount(to_display_amount(0)), "0.00");
    }

    #[test]
    fn test_new_rejects_empty_address() {
        let result = Application::new(AppConfig::default(), String::new(), None);
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
