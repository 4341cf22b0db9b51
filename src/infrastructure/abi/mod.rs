//! ABI infrastructure - alloy-dyn-abi value plumbing

mod codec;

pub use codec::{decode_parameter, decode_parameters, sol_value_to_json};
