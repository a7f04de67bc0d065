//! Presentation-facing data model for marketplace analytics.
//!
//! A snapshot is an immutable, fully-formed result of one successful
//! fetch; a new snapshot always replaces the previous one wholesale, never
//! a partial merge.

use crate::units::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Aggregate sales data for a single NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSaleInfo {
    /// Display name. Non-empty, not guaranteed unique.
    pub name: String,
    /// Completed sale count.
    pub sales: u64,
    /// Revenue in display currency.
    pub revenue: Amount,
}

impl NftSaleInfo {
    pub fn new(name: impl Into<String>, sales: u64, revenue: Amount) -> Self {
        Self {
            name: name.into(),
            sales,
            revenue,
        }
    }
}

/// Immutable result of one successful analytics fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Marketplace-wide sale count.
    pub total_sales: u64,
    /// Per-NFT aggregates, in RPC response order (not guaranteed sorted).
    pub popular_nfts: Vec<NftSaleInfo>,
    /// Timestamp when this snapshot was produced.
    pub fetched_at: DateTime<Utc>,
}

impl AnalyticsSnapshot {
    /// Create a new snapshot stamped with the current time.
    pub fn new(total_sales: u64, popular_nfts: Vec<NftSaleInfo>) -> Self {
        Self {
            total_sales,
            popular_nfts,
            fetched_at: Utc::now(),
        }
    }

    /// Check whether the snapshot carries any per-NFT rows.
    pub fn is_empty(&self) -> bool {
        self.popular_nfts.is_empty()
    }

    /// Age of this snapshot in milliseconds.
    pub fn age_ms(&self) -> i64 {
        (Utc::now() - self.fetched_at).num_milliseconds()
    }
}

/// Fetch lifecycle state. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    /// No marketplace address supplied yet.
    Idle,
    /// A fetch is in flight.
    Loading,
    /// The last fetch succeeded.
    Ready(AnalyticsSnapshot),
    /// The last fetch failed; carries the user-facing reason.
    Failed(String),
}

impl FetchStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Snapshot carried by a `Ready` status.
    pub fn snapshot(&self) -> Option<&AnalyticsSnapshot> {
        match self {
            Self::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Reason carried by a `Failed` status.
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

impl std::fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "IDLE"),
            Self::Loading => write!(f, "LOADING"),
            Self::Ready(_) => write!(f, "READY"),
            Self::Failed(_) => write!(f, "FAILED"),
        }
    }
}
