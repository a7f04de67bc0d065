//! Core domain types for the NFT marketplace analytics dashboard.
//!
//! This crate provides the fundamental types shared by the fetch pipeline
//! and the presentation-facing store:
//! - `NftSaleInfo`, `AnalyticsSnapshot`: normalized analytics data
//! - `FetchStatus`: fetch lifecycle state
//! - `Amount`: precision-safe display-currency amount

pub mod types;
pub mod units;

pub use types::{AnalyticsSnapshot, FetchStatus, NftSaleInfo};
pub use units::{to_display_amount, Amount, OCTAS_PER_COIN};
