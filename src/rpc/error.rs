// Errors
use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    #[error("Could not reach RPC: {0}")]
    Unresponsive(#[from] reqwest::Error),

    #[error("Could not build HTTP client: {0}")]
    ClientBuild(reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),

    #[error("Could not parse RPC response: {0}")]
    Parse(#[from] simd_json::Error),

    #[error("RPC returned error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    #[error("Invalid hex quantity: {0}")]
    InvalidHex(#[from] ParseIntError),

    #[error("Block {0} not found")]
    BlockNotFound(u64),

    #[error("Probe task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
