//! Provider connector trait and its alloy implementation
//!
//! Four operations cover what higher-level code needs from a chain client:
//! encode a contract call, run it read-only, sign EIP-712 typed data, and
//! decode returned values. Everything delegates to alloy; the connector
//! keeps no state between calls.

use std::path::PathBuf;

use alloy::contract::{ContractInstance, Interface};
use alloy::network::{Ethereum, TransactionBuilder};
use alloy::primitives::{Address, Bytes, Signature, B256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy_dyn_abi::eip712::TypedData;
use alloy_dyn_abi::DynSolValue;
use alloy_json_abi::JsonAbi;
use serde_json::{Map, Value};

use crate::domain::abi::AbiInput;
use crate::domain::eip712::TypedPayload;
use crate::error::ConnectorError;
use crate::infrastructure::abi;
use crate::infrastructure::ethereum::{SharedSigner, SignerBackend};

/// Endpoint configuration
#[derive(Debug, Clone)]
pub enum Endpoint {
    /// HTTP JSON-RPC endpoint
    Http(String),
    /// WebSocket endpoint
    WebSocket(String),
    /// IPC socket path (Unix only)
    #[cfg(unix)]
    Ipc(PathBuf),
}

impl Endpoint {
    /// Classify a URL or filesystem path into an endpoint
    pub fn from_url(value: &str) -> Self {
        if value.starts_with("ws://") || value.starts_with("wss://") {
            return Endpoint::WebSocket(value.to_string());
        }
        if value.starts_with("http://") || value.starts_with("https://") {
            return Endpoint::Http(value.to_string());
        }
        #[cfg(unix)]
        return Endpoint::Ipc(PathBuf::from(value));
        #[cfg(not(unix))]
        Endpoint::Http(value.to_string())
    }

    /// Get display name for this endpoint
    pub fn display(&self) -> String {
        match self {
            Endpoint::Http(url) => url.clone(),
            Endpoint::WebSocket(url) => url.clone(),
            #[cfg(unix)]
            Endpoint::Ipc(path) => path.display().to_string(),
        }
    }

    /// Check if this is a WebSocket endpoint
    pub fn is_websocket(&self) -> bool {
        matches!(self, Endpoint::WebSocket(_))
    }
}

/// Abstract provider connector trait
///
/// This trait defines the capability surface higher-level code programs
/// against, abstracting over the concrete alloy handles. Every operation is
/// stateless and safe to invoke concurrently.
#[async_trait::async_trait]
pub trait ProviderConnector: Send + Sync {
    /// Encode a call to `method` with `params` against the given ABI.
    ///
    /// `address` may be absent for contracts that are not deployed yet; the
    /// zero address stands in so the ephemeral binding can be built. The
    /// returned bytes are directly usable as `eth_call` data.
    fn encode_call(
        &self,
        abi: &JsonAbi,
        address: Option<Address>,
        method: &str,
        params: &[DynSolValue],
    ) -> Result<Bytes, ConnectorError>;

    /// Sign an EIP-712 payload with the signer resolved for `wallet_address`.
    ///
    /// The `EIP712Domain` declaration is stripped from a copy of the payload's
    /// `types` before delegation; the caller's payload is never mutated.
    /// `typed_data_hash` is accepted for signer variants that take a
    /// precomputed hash; the alloy path derives the hash itself and ignores it.
    async fn sign_typed_data(
        &self,
        wallet_address: Address,
        payload: &TypedPayload,
        typed_data_hash: Option<B256>,
    ) -> Result<Signature, ConnectorError>;

    /// Execute a read-only call (eth_call) and return the raw result bytes.
    async fn eth_call(
        &self,
        contract_address: Address,
        call_data: Bytes,
    ) -> Result<Bytes, ConnectorError>;

    /// Decode one ABI-encoded value of the given type.
    fn decode_parameter(&self, kind: &str, data: &[u8]) -> Result<DynSolValue, ConnectorError>;

    /// Decode named values jointly, keyed by field name.
    ///
    /// Integers come back as decimal strings.
    fn decode_parameters(
        &self,
        inputs: &[AbiInput],
        data: &[u8],
    ) -> Result<Map<String, Value>, ConnectorError>;
}

/// Connector backed by an erased alloy provider and a signer backend.
pub struct AlloyConnector {
    provider: DynProvider,
    signers: SignerBackend,
}

impl AlloyConnector {
    /// Create a connector from an already-built provider and signer backend.
    pub fn new(provider: DynProvider, signers: SignerBackend) -> Self {
        Self { provider, signers }
    }

    /// Single-account connector; every signing request resolves to `signer`.
    pub fn with_signer(provider: DynProvider, signer: SharedSigner) -> Self {
        Self::new(provider, SignerBackend::single(signer))
    }

    /// The underlying provider handle.
    pub fn provider(&self) -> &DynProvider {
        &self.provider
    }
}

#[async_trait::async_trait]
impl ProviderConnector for AlloyConnector {
    fn encode_call(
        &self,
        abi: &JsonAbi,
        address: Option<Address>,
        method: &str,
        params: &[DynSolValue],
    ) -> Result<Bytes, ConnectorError> {
        // Undeployed contracts encode against the zero address; the binding
        // address never reaches the encoded payload.
        let target = address.unwrap_or(Address::ZERO);
        let contract: ContractInstance<DynProvider, Ethereum> =
            ContractInstance::new(target, self.provider.clone(), Interface::new(abi.clone()));

        let call = contract.function(method, params)?;
        Ok(call.calldata().clone())
    }

    async fn sign_typed_data(
        &self,
        wallet_address: Address,
        payload: &TypedPayload,
        _typed_data_hash: Option<B256>,
    ) -> Result<Signature, ConnectorError> {
        let typed_data = to_typed_data(payload)?;
        let signer = self.signers.resolve(wallet_address)?;

        tracing::debug!(
            wallet = %wallet_address,
            primary_type = %payload.primary_type,
            "signing typed data"
        );

        signer
            .sign_dynamic_typed_data(&typed_data)
            .await
            .map_err(|err| ConnectorError::Signing(err.to_string()))
    }

    async fn eth_call(
        &self,
        contract_address: Address,
        call_data: Bytes,
    ) -> Result<Bytes, ConnectorError> {
        tracing::debug!(
            to = %contract_address,
            data_len = call_data.len(),
            "issuing read call"
        );

        let request = TransactionRequest::default()
            .with_to(contract_address)
            .with_input(call_data);

        Ok(self.provider.call(request).await?)
    }

    fn decode_parameter(&self, kind: &str, data: &[u8]) -> Result<DynSolValue, ConnectorError> {
        abi::decode_parameter(kind, data)
    }

    fn decode_parameters(
        &self,
        inputs: &[AbiInput],
        data: &[u8],
    ) -> Result<Map<String, Value>, ConnectorError> {
        abi::decode_parameters(inputs, data)
    }
}

/// Build the alloy typed data value with the domain type stripped from the
/// declarations. The signing primitive declares the domain itself and rejects
/// a duplicate entry.
fn to_typed_data(payload: &TypedPayload) -> Result<TypedData, ConnectorError> {
    serde_json::from_value(serde_json::json!({
        "types": payload.sanitized_types(),
        "primaryType": payload.primary_type,
        "domain": payload.domain,
        "message": payload.message,
    }))
    .map_err(|err| ConnectorError::Signing(format!("invalid typed data: {err}")))
}

/// Create an erased provider from endpoint configuration
pub async fn connect(endpoint: Endpoint) -> Result<DynProvider, ConnectorError> {
    match endpoint {
        Endpoint::Http(url) => {
            let rpc_url = url
                .parse()
                .map_err(|err| ConnectorError::Connect(format!("invalid HTTP URL {url}: {err}")))?;
            let provider = ProviderBuilder::new().connect_http(rpc_url);
            Ok(provider.erased())
        }
        Endpoint::WebSocket(url) => {
            let provider = ProviderBuilder::new().connect(&url).await.map_err(|err| {
                ConnectorError::Connect(format!("websocket connect failed: {err}"))
            })?;
            Ok(provider.erased())
        }
        #[cfg(unix)]
        Endpoint::Ipc(path) => {
            use alloy::providers::IpcConnect;
            let ipc = IpcConnect::new(path.to_string_lossy().to_string());
            let provider = ProviderBuilder::new()
                .connect_ipc(ipc)
                .await
                .map_err(|err| ConnectorError::Connect(format!("ipc connect failed: {err}")))?;
            Ok(provider.erased())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_url_classifies_schemes() {
        assert!(matches!(
            Endpoint::from_url("http://localhost:8545"),
            Endpoint::Http(_)
        ));
        assert!(Endpoint::from_url("ws://localhost:8546").is_websocket());
        #[cfg(unix)]
        assert!(matches!(
            Endpoint::from_url("/tmp/geth.ipc"),
            Endpoint::Ipc(_)
        ));
    }

    #[test]
    fn display_round_trips_the_endpoint() {
        let endpoint = Endpoint::Http("http://localhost:8545".to_string());
        assert_eq!(endpoint.display(), "http://localhost:8545");
    }

    #[test]
    fn typed_data_conversion_strips_domain_declaration() {
        let payload: TypedPayload = serde_json::from_value(json!({
            "domain": {"name": "Test", "version": "1", "chainId": 1},
            "types": {
                "EIP712Domain": [
                    {"name": "name", "type": "string"},
                    {"name": "version", "type": "string"},
                    {"name": "chainId", "type": "uint256"}
                ],
                "Message": [{"name": "contents", "type": "string"}]
            },
            "primaryType": "Message",
            "message": {"contents": "Hello"}
        }))
        .unwrap();

        let typed_data = to_typed_data(&payload).unwrap();

        let round_trip = serde_json::to_value(&typed_data).unwrap();
        assert!(round_trip["types"].get("EIP712Domain").is_none());
        assert!(round_trip["types"].get("Message").is_some());
        // the caller's payload keeps its declaration
        assert!(payload.types.contains_key("EIP712Domain"));
    }
}
