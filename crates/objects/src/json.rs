//! JSON conversion for any serde type.
//!
//! [`from_json`] builds the requested type directly from the parsed fields.
//! Fields the target does not declare are ignored.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ObjectError;

/// Encodes `value` as compact JSON.
///
/// Struct fields keep declaration order and `serde_json::Value` objects keep
/// insertion order.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Serialize)
}

/// Parses `json` into a `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ObjectError> {
    serde_json::from_str(json).map_err(ObjectError::Deserialize)
}
