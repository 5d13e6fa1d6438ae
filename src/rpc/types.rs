use crate::{
    header::normalize::{
        extract_block_header,
        BlockHeader,
    },
    log_dbg,
    rpc::{
        error::RpcError,
        method::EthRpcMethod,
    },
};
use reqwest::Client;
use serde_json::{
    json,
    Value,
};
use std::time::Duration;
use url::Url;

/// Handle to a single JSON-RPC endpoint.
///
/// Creating one does not touch the network, the first request does.
#[derive(Debug, Clone)]
pub struct Rpc {
    pub name: String, // sanitized name for appearing in logs
    url: String,      // url of the node we're sending requests to.
    client: Client,   // Reqwest client
}

// Sanitizes URLs so secrets don't get outputed.
//
// For example, if we have a URL: https://eth-mainnet.g.alchemy.com/v2/api-key
// as input, we output: https://eth-mainnet.g.alchemy.com/
fn sanitize_url(url: &str) -> Result<String, url::ParseError> {
    let parsed_url = Url::parse(url)?;

    // Build a new URL with the scheme, host, and port (if any), but without the path or query
    let sanitized = Url::parse(&format!(
        "{}://{}{}",
        parsed_url.scheme(),
        parsed_url.host_str().unwrap_or_default(),
        match parsed_url.port() {
            Some(port) => format!(":{}", port),
            None => String::new(),
        }
    ))?;

    Ok(sanitized.to_string())
}

impl Rpc {
    pub fn new(url: String, ttl: Duration) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(ttl)
            .build()
            .map_err(RpcError::ClientBuild)?;

        Ok(Self {
            name: sanitize_url(&url).unwrap_or(url.clone()),
            url,
            client,
        })
    }

    // Explicitly get the url of the Rpc, potentially dangerous as it can expose basic auth
    #[cfg(test)]
    pub fn get_url(&self) -> String {
        self.url.clone()
    }

    // Generic fn to send rpc. Returns the contents of `result`.
    pub async fn send_request(&self, tx: Value) -> Result<Value, RpcError> {
        log_dbg!("Sending request to {}: {}", self.name, tx);

        let response = self.client.post(&self.url).json(&tx).send().await?;
        let mut body = response.bytes().await?.to_vec();

        log_dbg!("Response: {}", String::from_utf8_lossy(&body));

        let json: Value = simd_json::serde::from_slice(&mut body)?;
        extract_result(json)
    }

    async fn call(&self, method: EthRpcMethod, params: Value) -> Result<Value, RpcError> {
        let request = json!({
            "method": method,
            "params": params,
            "id": 1,
            "jsonrpc": "2.0".to_string(),
        });

        self.send_request(request).await
    }

    // Request blocknumber and return its value
    pub async fn block_number(&self) -> Result<u64, RpcError> {
        let number = self.call(EthRpcMethod::BlockNumber, json!([])).await?;

        match number.as_str() {
            Some(number) => Ok(hex_to_decimal(number)?),
            None => Err(RpcError::InvalidResponse(format!(
                "eth_blockNumber returned {}",
                number
            ))),
        }
    }

    /// Raw `eth_getBlockByNumber`. A `null` block is reported as
    /// [`RpcError::BlockNotFound`] instead of being handed back.
    pub async fn get_block_by_number(
        &self,
        number: u64,
        full_transactions: bool,
    ) -> Result<Value, RpcError> {
        let block = self
            .call(
                EthRpcMethod::GetBlockByNumber,
                json!([decimal_to_hex(number), full_transactions]),
            )
            .await?;

        if block.is_null() {
            return Err(RpcError::BlockNotFound(number));
        }

        Ok(block)
    }

    pub async fn block_header_by_number(
        &self,
        number: u64,
        full_transactions: bool,
    ) -> Result<BlockHeader, RpcError> {
        let block = self.get_block_by_number(number, full_transactions).await?;
        Ok(extract_block_header(&block))
    }
}

// Pull `result` out of a JSON-RPC response, or turn `error` into an RpcError
fn extract_result(mut json: Value) -> Result<Value, RpcError> {
    if let Some(error) = json.get("error").filter(|error| !error.is_null()) {
        let code = error["code"].as_i64().unwrap_or_default();
        let message = error["message"].as_str().unwrap_or_default().to_string();
        return Err(RpcError::JsonRpc { code, message });
    }

    match json.get_mut("result") {
        Some(result) => Ok(result.take()),
        None => Err(RpcError::InvalidResponse(
            "error: Extracting response from request failed!".to_string(),
        )),
    }
}

pub fn hex_to_decimal(hex_string: &str) -> Result<u64, std::num::ParseIntError> {
    // Some nodes hand back quoted quantities, strip those
    let hex_string: &str = &hex_string.replace('\"', "");

    // Remove `0x` prefix if it exists
    let hex_string = hex_string.trim_start_matches("0x");

    u64::from_str_radix(hex_string, 16)
}

pub fn decimal_to_hex(number: u64) -> String {
    format!("0x{:x}", number)
}
