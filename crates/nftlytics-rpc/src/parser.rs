//! Response validation for the marketplace analytics view.
//!
//! The view function returns a two-element tuple: the marketplace-wide
//! sale count and the per-NFT aggregates. Shapes that do not match exactly
//! are rejected rather than coerced; downstream currency math depends on
//! `revenue` being a raw integer unit count.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{RpcError, RpcResult};

/// One NFT aggregate entry, still in raw on-chain units.
///
/// `deny_unknown_fields` keeps silently-wrong payloads (renamed or extra
/// fields) from slipping through as zeros.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawNftEntry {
    pub name: String,
    pub sales: u64,
    pub revenue: u64,
}

/// Decoded analytics tuple, still in raw on-chain units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAnalytics {
    pub total_sales: u64,
    pub nfts: Vec<RawNftEntry>,
}

/// Validate and decode the raw view result.
///
/// Accepts exactly `[total_sales, [{name, sales, revenue}, ...]]` with
/// non-negative integer counts and non-empty names. Anything else is
/// `MalformedResponse`. No side effects.
pub fn parse_analytics(raw: &Value) -> RpcResult<RawAnalytics> {
    let elements = raw
        .as_array()
        .ok_or_else(|| malformed("result is not an array"))?;

    if elements.len() != 2 {
        return Err(malformed(format!(
            "expected a two-element tuple, got {} elements",
            elements.len()
        )));
    }

    let total_sales = elements[0]
        .as_u64()
        .ok_or_else(|| malformed("total sales is not a non-negative integer"))?;

    let entries = elements[1]
        .as_array()
        .ok_or_else(|| malformed("NFT list is not an array"))?;

    let mut nfts = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let nft: RawNftEntry = serde_json::from_value(entry.clone())
            .map_err(|e| malformed(format!("NFT entry {idx}: {e}")))?;

        if nft.name.is_empty() {
            return Err(malformed(format!("NFT entry {idx}: empty name")));
        }

        nfts.push(nft);
    }

    Ok(RawAnalytics { total_sales, nfts })
}

fn malformed(detail: impl Into<String>) -> RpcError {
    RpcError::MalformedResponse(detail.into())
}
