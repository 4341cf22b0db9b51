//! Signer resolution for typed data signing
//!
//! The connector does not care how keys are held; it only needs to map a
//! wallet address to something that can sign. Two capabilities exist in the
//! wild: handles that can look up a signer per address, and handles that are
//! themselves the only signer. The variant makes that capability explicit.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use alloy::signers::Signer;
use alloy_primitives::Address;

use crate::error::ConnectorError;

/// A signer handle shared with the connector.
pub type SharedSigner = Arc<dyn Signer + Send + Sync>;

/// How the connector resolves the signer for a wallet address.
pub enum SignerBackend {
    /// Address-keyed signer set; unknown addresses fail to resolve.
    Keyring(HashMap<Address, SharedSigner>),
    /// Single-account mode; every request resolves to the held signer.
    Single(SharedSigner),
}

impl SignerBackend {
    /// Build a keyring backend, keyed by each signer's own address.
    pub fn keyring<I>(signers: I) -> Self
    where
        I: IntoIterator<Item = SharedSigner>,
    {
        Self::Keyring(
            signers
                .into_iter()
                .map(|signer| (signer.address(), signer))
                .collect(),
        )
    }

    /// Wrap a sole signer.
    pub fn single(signer: SharedSigner) -> Self {
        Self::Single(signer)
    }

    /// Resolve the signer for `address`.
    ///
    /// In single-account mode the requested address is not consulted; the
    /// held signer answers for every request.
    pub fn resolve(&self, address: Address) -> Result<&SharedSigner, ConnectorError> {
        match self {
            Self::Keyring(signers) => signers
                .get(&address)
                .ok_or_else(|| ConnectorError::Signing(format!("no signer for address {address}"))),
            Self::Single(signer) => Ok(signer),
        }
    }
}

impl fmt::Debug for SignerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keyring(signers) => f.debug_tuple("Keyring").field(&signers.len()).finish(),
            Self::Single(_) => f.write_str("Single"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::signers::local::PrivateKeySigner;

    fn make_signer() -> SharedSigner {
        Arc::new(
            "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
                .parse::<PrivateKeySigner>()
                .unwrap(),
        )
    }

    #[test]
    fn keyring_resolves_by_address() {
        let signer = make_signer();
        let address = signer.address();
        let backend = SignerBackend::keyring([signer]);

        assert!(backend.resolve(address).is_ok());
    }

    #[test]
    fn keyring_rejects_unknown_address() {
        let backend = SignerBackend::keyring([make_signer()]);

        let err = match backend.resolve(Address::ZERO) {
            Ok(_) => panic!("expected resolve to fail for unknown address"),
            Err(e) => e,
        };
        assert!(matches!(err, ConnectorError::Signing(_)));
    }

    #[test]
    fn single_mode_ignores_requested_address() {
        let signer = make_signer();
        let expected = signer.address();
        let backend = SignerBackend::single(signer);

        let resolved = backend.resolve(Address::ZERO).unwrap();
        assert_eq!(resolved.address(), expected);
    }
}
