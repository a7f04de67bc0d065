//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] nftlytics_rpc::RpcError),

    #[error("Store event channel closed")]
    StoreClosed,
}

pub type AppResult<T> = Result<T, AppError>;
