//! Store events published to presentation subscribers.

use nftlytics_core::{FetchStatus, NftSaleInfo};

/// Event published on every externally visible state change.
///
/// Replaces implicit re-render-on-change: the presentation layer
/// subscribes and redraws on each event, so the state machine is
/// observable without any rendering framework.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// The fetch lifecycle moved to a new status.
    StatusChanged(FetchStatus),
    /// The detail-view selection changed.
    SelectionChanged(Option<NftSaleInfo>),
}
