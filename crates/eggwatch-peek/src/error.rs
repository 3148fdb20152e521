//! Error types for the peek binary.
//!
//! [`PeekError`] is the top-level error type that wraps all possible
//! failure modes while loading configuration, reading inputs, and writing
//! output. Snapshot building itself cannot fail.

use std::path::PathBuf;

/// Top-level error for the peek binary.
///
/// Each variant wraps a specific failure, providing a single error type
/// that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum PeekError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: eggwatch_core::config::ConfigError,
    },

    /// An input file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// An input file did not contain the expected JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Writing a result line to stdout failed.
    #[error("failed to write output: {source}")]
    Output {
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
