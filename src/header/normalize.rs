use crate::{
    log_dbg,
    rpc::types::hex_to_decimal,
};

use serde::Serialize;
use serde_json::Value;

// Erigon doesn't hand us these, so every header gets the same values
pub const BASE_FEE_PER_GAS: &str = "0x3b9aca00";
pub const BLOB_GAS_USED: &str = "0x0";
pub const EXCESS_BLOB_GAS: &str = "0x0";
pub const TOTAL_DIFFICULTY: &str = "0x0";

/// Block header in the fixed shape the rest of otterprobe expects.
///
/// Fields the node reports are carried over untouched as raw JSON. The fee,
/// blob gas and total difficulty fields are placeholders and the
/// transaction and uncle lists are always empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub base_fee_per_gas: &'static str,
    pub blob_gas_used: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Value>,
    pub excess_blob_gas: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_used: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logs_bloom: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub miner: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_hash: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipts_root: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha3_uncles: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_root: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Value>,
    pub total_difficulty: &'static str,
    pub transactions: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions_root: Option<Value>,
    pub uncles: Vec<Value>,
}

impl BlockHeader {
    pub fn number(&self) -> Option<u64> {
        quantity(&self.number)
    }

    // Seconds since the unix epoch
    pub fn timestamp(&self) -> Option<u64> {
        quantity(&self.timestamp)
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_ref().and_then(Value::as_str)
    }
}

fn quantity(field: &Option<Value>) -> Option<u64> {
    field
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|hex| hex_to_decimal(hex).ok())
}

/// Map whatever `eth_getBlockByNumber` returned into a [`BlockHeader`].
///
/// Works on any JSON value. Anything that isn't an object, or an object
/// missing some fields, just ends up with `None` in those places.
pub fn extract_block_header(block: &Value) -> BlockHeader {
    let field = |name: &str| block.get(name).cloned();

    let header = BlockHeader {
        base_fee_per_gas: BASE_FEE_PER_GAS,
        blob_gas_used: BLOB_GAS_USED,
        difficulty: field("difficulty"),
        excess_blob_gas: EXCESS_BLOB_GAS,
        extra_data: field("extraData"),
        gas_limit: field("gasLimit"),
        gas_used: field("gasUsed"),
        hash: field("hash"),
        logs_bloom: field("logsBloom"),
        miner: field("miner"),
        mix_hash: field("mixHash"),
        nonce: field("nonce"),
        number: field("number"),
        parent_hash: field("parentHash"),
        receipts_root: field("receiptsRoot"),
        sha3_uncles: field("sha3Uncles"),
        size: field("size"),
        state_root: field("stateRoot"),
        timestamp: field("timestamp"),
        total_difficulty: TOTAL_DIFFICULTY,
        transactions: Vec::new(),
        transactions_root: field("transactionsRoot"),
        uncles: Vec::new(),
    };

    log_dbg!("Full block object: {}", block);
    log_dbg!("Normalized header: {:?}", header);

    header
}
