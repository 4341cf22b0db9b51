//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - The alloy-backed provider connector (encode, read call, sign)
//! - ABI value plumbing using alloy-dyn-abi

pub mod abi;
pub mod ethereum;
