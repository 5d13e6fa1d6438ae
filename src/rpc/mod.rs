//! # `rpc` module
//!
//! Minimal JSON-RPC client used to talk to the node being probed.

pub mod error;
pub mod method;
#[cfg(test)]
pub mod mock;
pub mod types;
