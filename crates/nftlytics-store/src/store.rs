//! Analytics store state machine.
//!
//! Holds the current fetch status and drives the acquisition pipeline.
//! Transitions: `Idle -> Loading -> {Ready | Failed} -> Loading -> ...`,
//! re-entrant on every refresh, no terminal state.
//!
//! Out-of-order completion is resolved with a request-sequence counter:
//! only the most recently issued request may publish its outcome
//! (last-request-wins). Arrival order alone is never trusted.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use nftlytics_core::{AnalyticsSnapshot, FetchStatus, NftSaleInfo};
use nftlytics_rpc::{AnalyticsFetcher, DynViewClient, RpcResult};

use crate::event::StoreEvent;
use crate::selection::{Selection, SelectionController};

/// Capacity of the event channel; a lagging subscriber loses oldest
/// events, never current state (`status()` is always authoritative).
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// Presentation-facing analytics store.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct AnalyticsStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    fetcher: AnalyticsFetcher,
    status: RwLock<FetchStatus>,
    selection: SelectionController,
    /// Sequence id of the most recently issued fetch.
    latest_request: AtomicU64,
    events: broadcast::Sender<StoreEvent>,
}

impl AnalyticsStore {
    /// Create a store over a shared view client.
    pub fn new(client: DynViewClient) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(StoreInner {
                fetcher: AnalyticsFetcher::new(client),
                status: RwLock::new(FetchStatus::Idle),
                selection: SelectionController::new(),
                latest_request: AtomicU64::new(0),
                events,
            }),
        }
    }

    /// Current fetch status.
    pub fn status(&self) -> FetchStatus {
        self.inner.status.read().clone()
    }

    /// Current snapshot, when `Ready`.
    pub fn snapshot(&self) -> Option<AnalyticsSnapshot> {
        self.inner.status.read().snapshot().cloned()
    }

    /// Current detail-view selection.
    pub fn selection(&self) -> Selection {
        self.inner.selection.current()
    }

    /// Subscribe to store events.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// Re-enter `Loading` and fetch analytics for the address.
    ///
    /// Unconditional for a non-empty address, so a failed fetch can be
    /// retried with the same address. An empty address is ignored: a
    /// non-empty address gates the initial fetch.
    pub fn refresh(&self, marketplace_address: impl Into<String>) {
        let address = marketplace_address.into();
        let Some(seq) = self.begin(&address) else {
            return;
        };

        // The task keeps only a weak handle on the store; if the consumer
        // tears down while the fetch is in flight, the completion is
        // dropped on the floor.
        let fetcher = self.inner.fetcher.clone();
        let weak = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            let result = fetcher.fetch(&address).await;
            match weak.upgrade() {
                Some(inner) => inner.complete(seq, result),
                None => debug!(seq, "Store dropped before fetch completed; discarding result"),
            }
        });
    }

    /// Record a detail-view selection from a rendered row.
    pub fn select(&self, item: NftSaleInfo) {
        if self.inner.selection.select(item.clone()) {
            let _ = self.inner.events.send(StoreEvent::SelectionChanged(Some(item)));
        }
    }

    /// Dismiss the detail view.
    pub fn clear_selection(&self) {
        if self.inner.selection.clear() {
            let _ = self.inner.events.send(StoreEvent::SelectionChanged(None));
        }
    }

    /// Begin a fetch: bump the sequence counter and enter `Loading`.
    ///
    /// Returns the request id, or `None` when the address is empty.
    fn begin(&self, address: &str) -> Option<u64> {
        if address.is_empty() {
            warn!("Ignoring refresh with empty marketplace address");
            return None;
        }

        let seq = self.inner.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        info!(seq, address = %address, "Entering Loading");
        self.inner.set_status(FetchStatus::Loading);
        Some(seq)
    }
}

impl StoreInner {
    /// Publish a fetch outcome, unless a newer request has been issued.
    fn complete(&self, seq: u64, result: RpcResult<AnalyticsSnapshot>) {
        if self.latest_request.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding superseded fetch result");
            return;
        }

        match result {
            Ok(snapshot) => {
                info!(
                    seq,
                    total_sales = snapshot.total_sales,
                    nft_count = snapshot.popular_nfts.len(),
                    "Fetch succeeded"
                );
                self.set_status(FetchStatus::Ready(snapshot));
            }
            Err(err) => {
                error!(seq, error = %err, "Fetch failed");
                self.set_status(FetchStatus::Failed(err.user_message().to_string()));
            }
        }
    }

    /// Swap in a new status, apply selection policy, publish the event.
    fn set_status(&self, status: FetchStatus) {
        // A selection is only meaningful against a Ready snapshot.
        if !status.is_ready() && self.selection.clear() {
            let _ = self.events.send(StoreEvent::SelectionChanged(None));
        }

        debug!(status = %status, "Status changed");
        *self.status.write() = status.clone();
        let _ = self.events.send(StoreEvent::StatusChanged(status));
    }
}
