//! View-query client trait for the ledger node.
//!
//! Provides a trait-based abstraction over the node's read-only view
//! endpoint. This allows for:
//! - Dependency injection for testing
//! - Separation of request shaping from transport

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RpcError, RpcResult};

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// A read-only view function call.
///
/// Executes contract logic on the node without mutating state and without
/// a signed transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewRequest {
    /// Fully qualified function id,
    /// e.g. `0x1::NFTMarketplace::get_marketplace_analytics`.
    pub function: String,
    /// Generic type arguments. Empty for the analytics view.
    pub type_arguments: Vec<String>,
    /// Positional arguments, JSON-encoded.
    pub arguments: Vec<Value>,
}

/// Trait for executing view queries against a ledger node.
///
/// Abstracts the transport so the fetch pipeline can run against a
/// scripted double in tests.
pub trait ViewClient: Send + Sync {
    /// Execute a view call and return the raw JSON result.
    fn view(&self, request: ViewRequest) -> BoxFuture<'_, RpcResult<Value>>;
}

/// Arc wrapper for ViewClient trait objects.
pub type DynViewClient = Arc<dyn ViewClient>;

/// Scripted view client for testing.
#[derive(Debug, Default)]
pub struct MockViewClient {
    /// Recorded requests for verification.
    requests: Mutex<Vec<ViewRequest>>,
    /// Scripted results, consumed in order.
    responses: Mutex<VecDeque<RpcResult<Value>>>,
}

impl MockViewClient {
    /// Create a new mock client with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next raw result to return.
    pub fn push_response(&self, response: RpcResult<Value>) {
        self.responses.lock().push_back(response);
    }

    /// Requests seen so far.
    pub fn recorded_requests(&self) -> Vec<ViewRequest> {
        self.requests.lock().clone()
    }
}

impl ViewClient for MockViewClient {
    fn view(&self, request: ViewRequest) -> BoxFuture<'_, RpcResult<Value>> {
        Box::pin(async move {
            self.requests.lock().push(request);
            self.responses
                .lock()
                .pop_front()
                .unwrap_or_else(|| Err(RpcError::Network("mock: no scripted response".to_string())))
        })
    }
}
