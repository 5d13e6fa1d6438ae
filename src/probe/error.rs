// Errors
use crate::rpc::error::RpcError;
use std::fmt;

/// Where we are with a given endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connecting,
    NotEthNode,
    NotErigon,
    NotOtterscanPatched,
    Connected,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConnectionStatus::Connecting => write!(f, "connecting"),
            ConnectionStatus::NotEthNode => write!(f, "not an Ethereum node"),
            ConnectionStatus::NotErigon => write!(f, "not an Erigon node"),
            ConnectionStatus::NotOtterscanPatched => {
                write!(f, "Erigon node without the Otterscan patches")
            }
            ConnectionStatus::Connected => write!(f, "connected"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// One of the probes failed and we know which one.
    #[error("'{endpoint}' is {status}")]
    Classified {
        status: ConnectionStatus,
        endpoint: String,
        #[source]
        source: Option<RpcError>,
    },

    /// The joint wait failed but none of the probes did. Must not happen.
    #[error("probing '{endpoint}' failed, but every individual probe succeeded")]
    Inconsistent { endpoint: String },
}

impl ProbeError {
    pub fn classified(status: ConnectionStatus, endpoint: &str, source: Option<RpcError>) -> Self {
        ProbeError::Classified {
            status,
            endpoint: endpoint.to_string(),
            source,
        }
    }

    pub fn status(&self) -> Option<ConnectionStatus> {
        match self {
            ProbeError::Classified { status, .. } => Some(*status),
            ProbeError::Inconsistent { .. } => None,
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            ProbeError::Classified { endpoint, .. } => endpoint,
            ProbeError::Inconsistent { endpoint } => endpoint,
        }
    }
}
