//! Available RPC methods and impls.

use std::fmt;

#[derive(Debug, thiserror::Error)]
#[error("failed to convert method to `EthRpcMethod`:\n\ngot: {0:?}\nexpected:\n{1:#?}")]
pub struct Error<Method>(Method, &'static [&'static str])
where
    Method: fmt::Debug;
impl<Method> Error<Method>
where
    Method: fmt::Debug,
{
    pub fn new(method: Method) -> Self {
        Self(method, EthRpcMethod::ETH_ALL)
    }
}

/// The RPC methods otterprobe sends to a node.
///
/// Each method has a corresponding `'static str` value associated with it
/// available via `std::convert::AsRef<str>`, `std::fmt::Display`, `serde::Serialize`
/// and `Self::as_str` impls for convenience.
///
/// # Example
///
/// ```rs,ignore
/// use crate::rpc::method::EthRpcMethod;
///
/// let method = EthRpcMethod::BlockNumber;
///
/// // `std::convert::AsRef<str>`
/// assert_eq!(method.as_ref(), "eth_blockNumber");
///
/// // `serde::Serialize`
/// assert_eq!(serde_json::to_string(&method).unwrap(), "\"eth_blockNumber\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EthRpcMethod {
    BlockNumber,
    GetBlockByNumber,
}
impl EthRpcMethod {
    const ETH_BLOCK_NUMBER: &'static str = "eth_blockNumber";
    const ETH_GET_BLOCK_BY_NUMBER: &'static str = "eth_getBlockByNumber";

    const ETH_ALL: &'static [&'static str; 2] =
        &[Self::ETH_BLOCK_NUMBER, Self::ETH_GET_BLOCK_BY_NUMBER];

    /// Useful for circumventing lifetimes associated with `let` bindings.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BlockNumber => Self::ETH_BLOCK_NUMBER,
            Self::GetBlockByNumber => Self::ETH_GET_BLOCK_BY_NUMBER,
        }
    }
}

impl TryFrom<Option<&str>> for EthRpcMethod {
    type Error = Error<Option<String>>;
    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        match value {
            Some(Self::ETH_BLOCK_NUMBER) => Ok(Self::BlockNumber),
            Some(Self::ETH_GET_BLOCK_BY_NUMBER) => Ok(Self::GetBlockByNumber),
            _ => Err(Error::new(value.map(ToString::to_string))),
        }
    }
}

impl AsRef<str> for EthRpcMethod {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EthRpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for EthRpcMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
