//! In-process JSON-RPC node for tests.

use crate::rpc::method::EthRpcMethod;

use std::{
    convert::Infallible,
    sync::{
        atomic::{
            AtomicUsize,
            Ordering,
        },
        Arc,
    },
    time::Duration,
};

use http_body_util::{
    BodyExt,
    Full,
};
use hyper::{
    body::{
        Bytes,
        Incoming,
    },
    server::conn::http1,
    service::service_fn,
    Request,
    Response,
};
use hyper_util_blutgang::rt::TokioIo;
use serde_json::{
    json,
    Value,
};
use tokio::net::TcpListener;

pub const MOCK_HEAD: u64 = 0x10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehaviour {
    // Answers everything like an Erigon node would
    Healthy,
    // Doesn't know `eth_blockNumber`
    NoBlockNumber,
    // Knows `eth_blockNumber` but errors on `eth_getBlockByNumber`
    NoBlockByNumber,
    // Returns `null` for every block
    NullGenesis,
    // Healthy, but takes this long to answer each request
    Slow(Duration),
}

pub struct MockNode {
    pub url: String,
    pub requests: Arc<AtomicUsize>,
}

pub fn genesis_block() -> Value {
    json!({
        "difficulty": "0x400000000",
        "extraData": "0x11bbe8db4e347b4e8c937c1c8370e4b5ed33adb3db69cbdb7a38e1e50b1b82fa",
        "gasLimit": "0x1388",
        "gasUsed": "0x0",
        "hash": "0xd4e56740f876aef8c010b86a40d5f56745a118d0906a34e69aec8c0db1cb8fa3",
        "logsBloom": format!("0x{}", "0".repeat(512)),
        "miner": "0x0000000000000000000000000000000000000000",
        "mixHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "nonce": "0x0000000000000042",
        "number": "0x0",
        "parentHash": "0x0000000000000000000000000000000000000000000000000000000000000000",
        "receiptsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "sha3Uncles": "0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347",
        "size": "0x21c",
        "stateRoot": "0xd7f8974fb5ac78d9ac099b9ad5018bedc2ce0a72dad1827a1709da30580f0544",
        "timestamp": "0x0",
        "totalDifficulty": "0x400000000",
        "transactions": [],
        "transactionsRoot": "0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421",
        "uncles": []
    })
}

fn respond(request: &Value, behaviour: MockBehaviour) -> Value {
    let id = request["id"].clone();
    let method = EthRpcMethod::try_from(request["method"].as_str());

    let not_found = |method: &str| {
        json!({
            "jsonrpc": "2.0",
            "id": id,
            "error": {
                "code": -32601,
                "message": format!("the method {} does not exist/is not available", method)
            }
        })
    };

    let result = match (method, behaviour) {
        (Ok(EthRpcMethod::BlockNumber), MockBehaviour::NoBlockNumber) => {
            return not_found("eth_blockNumber")
        }
        (Ok(EthRpcMethod::BlockNumber), _) => json!(format!("0x{:x}", MOCK_HEAD)),
        (Ok(EthRpcMethod::GetBlockByNumber), MockBehaviour::NoBlockByNumber) => {
            return not_found("eth_getBlockByNumber")
        }
        (Ok(EthRpcMethod::GetBlockByNumber), MockBehaviour::NullGenesis) => Value::Null,
        (Ok(EthRpcMethod::GetBlockByNumber), _) => {
            let mut block = genesis_block();
            block["number"] = request["params"][0].clone();
            block
        }
        (Err(_), _) => return not_found(request["method"].as_str().unwrap_or_default()),
    };

    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

async fn handle(
    request: Request<Incoming>,
    behaviour: MockBehaviour,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let body = match request.into_body().collect().await {
        Ok(body) => body.to_bytes(),
        Err(_) => Bytes::new(),
    };
    if let MockBehaviour::Slow(delay) = behaviour {
        tokio::time::sleep(delay).await;
    }

    let request: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    let response = respond(&request, behaviour);

    Ok(Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::from(response.to_string())))
        .unwrap())
}

// Bind to a random local port and answer JSON-RPC requests until the test ends
pub async fn spawn_mock_node(behaviour: MockBehaviour) -> MockNode {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    let requests = Arc::new(AtomicUsize::new(0));
    let requests_node = Arc::clone(&requests);

    tokio::task::spawn(async move {
        loop {
            let (stream, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => break,
            };

            // Use an adapter to access something implementing `tokio::io` traits as if they implement
            // `hyper::rt` IO traits.
            let io = TokioIo::new(stream);
            let requests = Arc::clone(&requests_node);

            tokio::task::spawn(async move {
                let service = service_fn(move |request| {
                    requests.fetch_add(1, Ordering::SeqCst);
                    handle(request, behaviour)
                });

                if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                    println!("\x1b[31mErr:\x1b[0m Error serving connection: {:?}", err);
                }
            });
        }
    });

    MockNode {
        url: format!("http://{}", address),
        requests,
    }
}
