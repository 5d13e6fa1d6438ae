//! # `probe` module
//!
//! Decides whether an endpoint is something Otterscan can work with.
//!
//! Three probes go out at the same time: `eth_blockNumber`, the genesis block
//! header and the Otterscan API level. If all of them come back fine the
//! endpoint is good to use. If not, the results are checked one by one in that
//! order and the first failure decides how the endpoint gets reported:
//!
//! | failing probe      | status                                   |
//! |--------------------|------------------------------------------|
//! | `eth_blockNumber`  | [`ConnectionStatus::NotEthNode`]         |
//! | genesis header     | [`ConnectionStatus::NotErigon`]          |
//! | API level          | [`ConnectionStatus::NotOtterscanPatched`]|
//!
//! [`ConnectionStatus::NotEthNode`]: error::ConnectionStatus::NotEthNode
//! [`ConnectionStatus::NotErigon`]: error::ConnectionStatus::NotErigon
//! [`ConnectionStatus::NotOtterscanPatched`]: error::ConnectionStatus::NotOtterscanPatched

pub mod connect;
pub mod error;
