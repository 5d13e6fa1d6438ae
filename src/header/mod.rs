//! # `header` module
//!
//! Turns raw `eth_getBlockByNumber` results into the fixed block header
//! shape used by the prober and the chain head follower.

pub mod normalize;
