//! Error types for perkconv-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in perkconv-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read the mapping file
    #[error("failed to read mapping file '{path}': {source}")]
    MappingRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mapping line that cannot be turned into a (target, needle) pair
    #[error("malformed mapping line {line} in '{path}': {message}")]
    MappingLine {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Directory traversal error
    #[error("failed to traverse input directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Copy source exists but is not a regular file
    #[error("'{0}' is not a regular file")]
    NotRegularFile(PathBuf),

    /// Failed to copy a matched file
    #[error("failed to copy '{source_path}': {source}")]
    Copy {
        source_path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
