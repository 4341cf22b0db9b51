//! EIP-712 typed data model
//!
//! Mirrors the JSON shape wallets exchange ({domain, types, primaryType,
//! message}). Domain and message stay opaque JSON; only the `types` table
//! is inspected by the connector.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sentinel key wallets include in `types`. The signing primitive declares
/// the domain type itself and rejects a duplicate entry, so it must be
/// stripped before delegation.
pub const EIP712_DOMAIN_TYPE: &str = "EIP712Domain";

/// A single field declaration of a struct type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eip712Field {
    /// Field name
    pub name: String,
    /// Field type (e.g., "address", "uint256", or another struct type)
    #[serde(rename = "type")]
    pub kind: String,
}

/// An EIP-712 payload as handed over by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedPayload {
    /// Domain separator fields, passed through opaquely
    pub domain: Value,
    /// Struct type declarations, keyed by type name
    pub types: BTreeMap<String, Vec<Eip712Field>>,
    /// Name of the struct type the message instantiates
    #[serde(rename = "primaryType")]
    pub primary_type: String,
    /// The message payload itself
    pub message: Value,
}

impl TypedPayload {
    /// Shallow copy of `types` with the domain sentinel removed.
    ///
    /// The caller's map is left untouched.
    pub fn sanitized_types(&self) -> BTreeMap<String, Vec<Eip712Field>> {
        let mut types = self.types.clone();
        types.remove(EIP712_DOMAIN_TYPE);
        types
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn mail_payload() -> TypedPayload {
        serde_json::from_value(json!({
            "domain": {"name": "Ether Mail", "version": "1", "chainId": 1},
            "types": {
                "EIP712Domain": [
                    {"name": "name", "type": "string"},
                    {"name": "version", "type": "string"},
                    {"name": "chainId", "type": "uint256"}
                ],
                "Mail": [
                    {"name": "contents", "type": "string"}
                ]
            },
            "primaryType": "Mail",
            "message": {"contents": "Hello"}
        }))
        .unwrap()
    }

    #[test]
    fn sanitized_types_drops_domain_sentinel() {
        let payload = mail_payload();
        let sanitized = payload.sanitized_types();

        assert!(!sanitized.contains_key(EIP712_DOMAIN_TYPE));
        assert!(sanitized.contains_key("Mail"));
        // the original payload keeps its declaration
        assert!(payload.types.contains_key(EIP712_DOMAIN_TYPE));
    }

    #[test]
    fn field_kind_round_trips_as_type() {
        let payload = mail_payload();
        assert_eq!(payload.types["Mail"][0].kind, "string");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["types"]["Mail"][0]["type"], "string");
        assert_eq!(json["primaryType"], "Mail");
    }
}
