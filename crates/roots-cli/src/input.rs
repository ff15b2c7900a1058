//! Reading JSON input from files or stdin.

use serde::de::DeserializeOwned;
use std::io::{self, Read};
use thiserror::Error;

/// Errors raised while loading command input.
#[derive(Error, Debug)]
pub enum InputError {
    /// A named file could not be read.
    #[error("failed to read file {path}: {source}")]
    File {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Stdin could not be read.
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    /// Input is not valid JSON of the expected shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads the whole file at `path`, or stdin when no path is given.
pub fn read_input(path: Option<&str>) -> Result<String, InputError> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|source| InputError::File {
            path: path.to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(InputError::Stdin)?;
            Ok(buffer)
        }
    }
}

/// Parses one JSON value or a JSON array of values.
pub fn parse_one_or_many<T: DeserializeOwned>(text: &str) -> Result<Vec<T>, InputError> {
    if text.trim_start().starts_with('[') {
        Ok(serde_json::from_str(text)?)
    } else {
        Ok(vec![serde_json::from_str(text)?])
    }
}
