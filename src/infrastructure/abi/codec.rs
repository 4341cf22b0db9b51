//! ABI decoding built on alloy-dyn-abi
//!
//! Joint decoding follows the usual alloy shape: parse each declared type,
//! decode the payload as one tuple, then fan the values back out to their
//! field names.

use alloy_dyn_abi::{DynSolType, DynSolValue};
use serde_json::{Map, Value};

use crate::domain::abi::AbiInput;
use crate::error::ConnectorError;

/// Decode a single ABI-encoded value of the given type.
pub fn decode_parameter(kind: &str, data: &[u8]) -> Result<DynSolValue, ConnectorError> {
    let ty: DynSolType = kind.parse()?;
    Ok(ty.abi_decode(data)?)
}

/// Decode a set of named values jointly and return them keyed by field name.
///
/// Integers come back as base-10 strings regardless of magnitude, so no
/// value loses precision once it leaves the ABI representation. Unnamed
/// inputs fall back to `arg{index}` names.
pub fn decode_parameters(
    inputs: &[AbiInput],
    data: &[u8],
) -> Result<Map<String, Value>, ConnectorError> {
    let types = inputs
        .iter()
        .map(|input| input.kind.parse::<DynSolType>())
        .collect::<Result<Vec<_>, _>>()?;

    let values = if types.is_empty() {
        Vec::new()
    } else {
        let tuple = DynSolType::Tuple(types);
        match tuple.abi_decode(data)? {
            DynSolValue::Tuple(values) => values,
            other => vec![other],
        }
    };

    let mut decoded = Map::new();
    for (idx, (input, value)) in inputs.iter().zip(values.iter()).enumerate() {
        let name = if input.name.trim().is_empty() {
            format!("arg{}", idx)
        } else {
            input.name.clone()
        };
        decoded.insert(name, sol_value_to_json(value));
    }

    Ok(decoded)
}

/// Convert a decoded value to JSON.
///
/// Integers become decimal strings; byte payloads become 0x-prefixed hex.
pub fn sol_value_to_json(value: &DynSolValue) -> Value {
    match value {
        DynSolValue::Bool(b) => Value::Bool(*b),
        DynSolValue::Int(i, _) => Value::String(i.to_string()),
        DynSolValue::Uint(u, _) => Value::String(u.to_string()),
        DynSolValue::FixedBytes(word, size) => {
            let bytes = &word.as_slice()[..(*size).min(32)];
            Value::String(format!("0x{}", hex::encode(bytes)))
        }
        DynSolValue::Address(addr) => Value::String(addr.to_string()),
        DynSolValue::Function(func) => Value::String(format!("0x{}", hex::encode(func.as_slice()))),
        DynSolValue::Bytes(bytes) => Value::String(format!("0x{}", hex::encode(bytes))),
        DynSolValue::String(s) => Value::String(s.clone()),
        DynSolValue::Array(values) | DynSolValue::FixedArray(values) => {
            Value::Array(values.iter().map(sol_value_to_json).collect())
        }
        DynSolValue::Tuple(fields) => Value::Array(fields.iter().map(sol_value_to_json).collect()),
        DynSolValue::CustomStruct {
            prop_names, tuple, ..
        } => Value::Object(
            prop_names
                .iter()
                .cloned()
                .zip(tuple.iter().map(sol_value_to_json))
                .collect(),
        ),
    }
}
