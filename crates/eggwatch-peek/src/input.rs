//! Reading coop status and event records from JSON files.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::PeekError;

/// Read a JSON array of records from `path`.
pub fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, PeekError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PeekError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(path, &contents)
}

/// Parse a JSON array of records. `path` is only used for error context.
pub fn parse_records<T: DeserializeOwned>(
    path: &Path,
    contents: &str,
) -> Result<Vec<T>, PeekError> {
    serde_json::from_str(contents).map_err(|source| PeekError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
