//! EVM provider connector - a thin adapter over the alloy stack
//!
//! Exposes a fixed capability set behind the [`ProviderConnector`] trait:
//! encode a contract call, run a read-only call, sign EIP-712 typed data,
//! and decode ABI-encoded return values. Every operation delegates to the
//! injected alloy handles; the connector keeps no state between calls.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::abi::AbiInput;
pub use domain::eip712::{Eip712Field, TypedPayload, EIP712_DOMAIN_TYPE};
pub use error::ConnectorError;
pub use infrastructure::ethereum::{
    connect, AlloyConnector, Endpoint, ProviderConnector, SharedSigner, SignerBackend,
};
