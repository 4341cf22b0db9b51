//! ABI input descriptors

use serde::{Deserialize, Serialize};

/// A named input of a contract method, the unit of joint decoding.
///
/// Serializes with the JSON ABI field names, so fragments of a contract ABI
/// deserialize directly into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiInput {
    /// Parameter name (may be empty)
    pub name: String,
    /// Solidity type (e.g., "address", "uint256", "(uint256,address)")
    #[serde(rename = "type")]
    pub kind: String,
}

impl AbiInput {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}
