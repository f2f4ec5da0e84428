//! Canonical JSON for kernel outputs.
//!
//! [`InvariantReport`](crate::InvariantReport) and
//! [`ConservationCheck`](crate::ConservationCheck) are written with object
//! keys in sorted order, so two runs over the same state emit identical bytes
//! and can be diffed or stored next to measured values. Decoding failures map
//! to [`LphiError::Serde`].

use std::collections::BTreeMap;

use ::serde::{Deserialize, Serialize};
use lphi_core::{ErrorInfo, LphiError};
use serde_json::{Map, Value};

fn serde_error(code: &str, err: impl ToString) -> LphiError {
    LphiError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(key, val)| (key, canonicalize(val)))
                .collect();
            Value::Object(ordered.into_iter().collect::<Map<String, Value>>())
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes an invariant report or conservation check into JSON bytes with
/// keys in sorted order.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, LphiError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json-encode", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json-write", err))?;
    Ok(bytes)
}

/// Restores a report or check from JSON bytes produced by
/// [`to_canonical_json_bytes`].
pub fn from_json_slice<T: for<'de> Deserialize<'de>>(data: &[u8]) -> Result<T, LphiError> {
    serde_json::from_slice(data).map_err(|err| serde_error("json-read", err))
}
