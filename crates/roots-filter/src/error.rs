//! Error types for filter encoding and decoding.

use thiserror::Error;

/// Errors that can occur while decoding or encoding a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Input is not a JSON object.
    #[error("invalid filter JSON: {0}")]
    Decode(#[source] serde_json::Error),
    /// A recognised field carries a value of the wrong type.
    #[error("invalid value for filter field {field:?}: {source}")]
    Field {
        /// Wire key, including the `#` marker for tag fields.
        field: String,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },
    /// Output could not be produced.
    #[error("filter encoding failed: {0}")]
    Encode(#[source] serde_json::Error),
}
