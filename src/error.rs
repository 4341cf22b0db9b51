//! Connector error taxonomy
//!
//! No local recovery and no retries: every collaborator failure propagates
//! to the caller as the variant matching the operation that produced it.

use thiserror::Error;

/// Errors surfaced by the provider connector.
#[derive(Debug, Error)]
pub enum ConnectorError {
    /// The method is absent from the ABI descriptor, or a parameter does not
    /// match the declared input types.
    #[error("abi encoding failed: {0}")]
    Encoding(#[from] alloy::contract::Error),

    /// No signer resolvable for the requested address, or the underlying
    /// signer rejected the request.
    #[error("typed data signing failed: {0}")]
    Signing(String),

    /// Transport failure, contract revert, or invalid input on a read call.
    /// The revert reason survives in the wrapped RPC error.
    #[error("read call failed: {0}")]
    Call(#[from] alloy::transports::TransportError),

    /// Malformed data or a type mismatch while decoding.
    #[error("abi decoding failed: {0}")]
    Decoding(#[from] alloy_dyn_abi::Error),

    /// Endpoint configuration or connection setup failure.
    #[error("connect failed: {0}")]
    Connect(String),
}
