mod config;
mod header;
mod latest;
mod probe;
mod rpc;

use crate::{
    config::{
        cli_args::{
            Follow,
            Otterprobe,
        },
        system::{
            TAGLINE,
            VERSION_STR,
        },
        types::Settings,
    },
    header::normalize::BlockHeader,
    latest::follow::{
        follow_block_header,
        follow_block_number,
    },
    probe::{
        connect::create_and_probe_provider,
        error::ConnectionStatus,
    },
    rpc::types::Rpc,
};

use chrono::{
    DateTime,
    Utc,
};
use clap::Parser;
use tokio::sync::watch;

// One line per new block when following headers
fn header_summary(header: &BlockHeader) -> String {
    let number = header
        .number()
        .map(|n| n.to_string())
        .unwrap_or_else(|| "?".to_string());
    let hash = header.hash().unwrap_or("?");
    let time = header
        .timestamp()
        .and_then(|ts| i64::try_from(ts).ok())
        .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0))
        .map(|ts| ts.to_rfc3339())
        .unwrap_or_else(|| "?".to_string());

    format!("block {} {} at {}", number, hash, time)
}

async fn follow(rpc: Rpc, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    match settings.follow {
        Follow::Off => {}
        Follow::Number => {
            let (tx, mut rx) = watch::channel(0);
            let follower = tokio::task::spawn(follow_block_number(rpc, settings.poll_interval, tx));

            while rx.changed().await.is_ok() {
                let number = *rx.borrow_and_update();
                println!("{}", number);
            }

            // The sender only goes away when the follower stopped, find out why
            follower.await??;
        }
        Follow::Header => {
            let (tx, mut rx) = watch::channel(None);
            let follower = tokio::task::spawn(follow_block_header(rpc, settings.poll_interval, tx));

            while rx.changed().await.is_ok() {
                if let Some(header) = rx.borrow_and_update().as_ref() {
                    println!("{}", header_summary(header));
                }
            }

            follower.await??;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    log_info!("{} {}", VERSION_STR, TAGLINE);

    // Get all the cli args and set them
    let settings = Settings::new(Otterprobe::parse())?;

    log_info!("Status: {}", ConnectionStatus::Connecting);
    let rpc = match create_and_probe_provider(
        settings.url.as_deref(),
        &settings.default_url,
        settings.ttl,
    )
    .await
    {
        Ok(rpc) => {
            log_info!("{}: {}", rpc.name, ConnectionStatus::Connected);
            rpc
        }
        Err(err) => {
            log_err!("{}", err);
            if err.status() == Some(ConnectionStatus::NotEthNode) && settings.url.is_none() {
                log_wrn!("No endpoint configured. Pass `--url \"\"` to use {}", settings.default_url);
            }
            std::process::exit(1);
        }
    };

    if settings.genesis {
        let genesis = rpc.block_header_by_number(0, false).await?;
        println!("{}", serde_json::to_string_pretty(&genesis)?);
    }

    follow(rpc, &settings).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::normalize::extract_block_header;
    use serde_json::json;

    #[test]
    fn summary_of_full_header() {
        let header = extract_block_header(&json!({
            "number": "0x10",
            "hash": "0xabc",
            "timestamp": "0x0",
        }));

        assert_eq!(
            header_summary(&header),
            "block 16 0xabc at 1970-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn summary_of_out_of_range_timestamp() {
        let header = extract_block_header(&json!({
            "number": "0x1",
            "hash": "0xabc",
            "timestamp": "0xffffffffffffffff",
        }));

        assert_eq!(header_summary(&header), "block 1 0xabc at ?");
    }

    #[test]
    fn summary_of_empty_header() {
        let header = extract_block_header(&json!({}));
        assert_eq!(header_summary(&header), "block ? ? at ?");
    }
}
