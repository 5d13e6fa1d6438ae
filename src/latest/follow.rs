use crate::{
    header::normalize::BlockHeader,
    log_info,
    log_wrn,
    rpc::{
        error::RpcError,
        types::Rpc,
    },
};

use std::time::Duration;

use tokio::{
    sync::watch,
    time::{
        interval,
        MissedTickBehavior,
    },
};

// Polls the head every `poll_interval` and calls `on_new_block` whenever the
// number differs from the last one we saw. The first tick fires right away so
// the current head gets reported immediately.
//
// Stops as soon as every receiver of `tx` is gone, without waiting for the
// next tick.
async fn poll_new_blocks<T, F, Fut>(
    rpc: &Rpc,
    poll_interval: Duration,
    tx: &watch::Sender<T>,
    mut on_new_block: F,
) where
    F: FnMut(u64) -> Fut,
    Fut: std::future::Future<Output = Result<(), RpcError>>,
{
    let mut ticker = interval(poll_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_seen: Option<u64> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tx.closed() => break,
        }

        let number = match rpc.block_number().await {
            Ok(number) => number,
            Err(err) => {
                log_wrn!("Could not get latest block from {}: {}", rpc.name, err);
                continue;
            }
        };

        if last_seen == Some(number) {
            continue;
        }

        match on_new_block(number).await {
            Ok(()) => last_seen = Some(number),
            Err(err) => {
                log_wrn!("Could not process block {} from {}: {}", number, rpc.name, err);
            }
        }
    }
}

/// Publish the latest block number on `tx`, immediately and then every time
/// the head moves. Returns once every receiver has been dropped.
pub async fn follow_block_number(
    rpc: Rpc,
    poll_interval: Duration,
    tx: watch::Sender<u64>,
) -> Result<(), RpcError> {
    log_info!("Following block numbers on {}", rpc.name);

    poll_new_blocks(
        &rpc,
        poll_interval,
        &tx,
        |number| {
            tx.send_replace(number);
            async { Ok::<(), RpcError>(()) }
        },
    )
    .await;

    Ok(())
}

/// Same as [`follow_block_number`], but publishes the normalized header of
/// every new block instead.
pub async fn follow_block_header(
    rpc: Rpc,
    poll_interval: Duration,
    tx: watch::Sender<Option<BlockHeader>>,
) -> Result<(), RpcError> {
    log_info!("Following block headers on {}", rpc.name);

    poll_new_blocks(
        &rpc,
        poll_interval,
        &tx,
        |number| {
            let rpc = &rpc;
            let tx = &tx;
            async move {
                let header = rpc.block_header_by_number(number, true).await?;
                tx.send_replace(Some(header));
                Ok::<(), RpcError>(())
            }
        },
    )
    .await;

    Ok(())
}
