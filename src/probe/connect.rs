use crate::{
    config::system::MIN_API_LEVEL,
    log_err,
    log_info,
    probe::error::{
        ConnectionStatus,
        ProbeError,
    },
    rpc::{
        error::RpcError,
        types::Rpc,
    },
};

use std::time::Duration;

use tokio::task::JoinHandle;

// Otterscan patch level of the node. There is no call for this yet, so it is
// always the minimum we support.
// TODO: probe `ots_getApiLevel` once we settle on how old nodes should be reported
async fn probe_api_level() -> Result<u32, RpcError> {
    Ok(MIN_API_LEVEL)
}

// A panicked probe task counts as a failed probe
async fn settle<T>(handle: JoinHandle<Result<T, RpcError>>) -> Result<T, RpcError> {
    handle.await?
}

/// Connect to `erigon_url` and make sure it is an Otterscan-patched Erigon node.
///
/// `None` fails right away, without touching the network. An empty string means
/// `default_url`. On success the returned [`Rpc`] is ready to use, otherwise the
/// error says which of the checks the endpoint didn't pass.
pub async fn create_and_probe_provider(
    erigon_url: Option<&str>,
    default_url: &str,
    ttl: Duration,
) -> Result<Rpc, ProbeError> {
    let erigon_url = match erigon_url {
        Some("") => {
            log_info!("Using default erigon URL: {}", default_url);
            default_url
        }
        Some(url) => {
            log_info!("Using configured erigon URL: {}", url);
            url
        }
        None => {
            return Err(ProbeError::classified(
                ConnectionStatus::NotEthNode,
                "",
                None,
            ))
        }
    };

    let provider = match Rpc::new(erigon_url.to_string(), ttl) {
        Ok(provider) => provider,
        Err(err) => {
            log_err!("Could not create a client for {}: {}", erigon_url, err);
            return Err(ProbeError::classified(
                ConnectionStatus::NotEthNode,
                erigon_url,
                Some(err),
            ));
        }
    };

    // Fire all probes at once, each on its own task
    let rpc = provider.clone();
    let probe_block_number = tokio::task::spawn(async move { rpc.block_number().await });

    let rpc = provider.clone();
    let probe_header = tokio::task::spawn(async move { rpc.block_header_by_number(0, false).await });

    let probe_ots_api = tokio::task::spawn(probe_api_level());

    let (block_number, header, api_level) = tokio::join!(
        settle(probe_block_number),
        settle(probe_header),
        settle(probe_ots_api)
    );

    if block_number.is_ok() && header.is_ok() && api_level.is_ok() {
        return Ok(provider);
    }

    // Something was rejected, go through them in order to narrow down the cause

    // Is it at least a regular ETH node?
    if let Err(err) = block_number {
        log_err!("eth_blockNumber failed on {}: {}", provider.name, err);
        return Err(ProbeError::classified(
            ConnectionStatus::NotEthNode,
            erigon_url,
            Some(err),
        ));
    }

    // Is it an Erigon node? Genesis header is cheap enough to find out
    if let Err(err) = header {
        log_err!("Fetching the genesis header failed on {}: {}", provider.name, err);
        return Err(ProbeError::classified(
            ConnectionStatus::NotErigon,
            erigon_url,
            Some(err),
        ));
    }

    // Does it have the Otterscan patches?
    if let Err(err) = api_level {
        log_err!("Otterscan API level probe failed on {}: {}", provider.name, err);
        return Err(ProbeError::classified(
            ConnectionStatus::NotOtterscanPatched,
            erigon_url,
            Some(err),
        ));
    }

    Err(ProbeError::Inconsistent {
        endpoint: erigon_url.to_string(),
    })
}
