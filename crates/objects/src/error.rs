//! Error types for object serialization.

use thiserror::Error;

/// Errors that can occur when converting objects to or from JSON.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// The value could not be encoded.
    #[error("cannot serialize object: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON or did not fit the target shape.
    #[error("cannot deserialize object: {0}")]
    Deserialize(#[source] serde_json::Error),
}
