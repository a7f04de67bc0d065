//! Ledger-node RPC boundary for marketplace analytics.
//!
//! - `ViewClient`: transport trait with HTTP and scripted implementations
//! - `parse_analytics`: strict validation of the raw view result
//! - `AnalyticsFetcher`: one-shot acquisition pipeline

pub mod error;
pub mod fetcher;
pub mod http_client;
pub mod parser;
pub mod view;

pub use error::{RpcError, RpcResult};
pub use fetcher::AnalyticsFetcher;
pub use http_client::HttpViewClient;
pub use parser::{parse_analytics, RawAnalytics, RawNftEntry};
pub use view::{BoxFuture, DynViewClient, MockViewClient, ViewClient, ViewRequest};
