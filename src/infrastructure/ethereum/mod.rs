//! Ethereum infrastructure - the alloy provider connector

mod connector;
mod signer;

pub use connector::{connect, AlloyConnector, Endpoint, ProviderConnector};
pub use signer::{SharedSigner, SignerBackend};
