//! Error types for table ingestion.

use std::path::PathBuf;
use thiserror::Error;
use tsdict_model::ModelError;

/// Errors that can occur while loading and mapping the source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// The file is not well-formed delimited text.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The file has no header row.
    #[error("could not detect header row in {path}")]
    NoHeaderDetected { path: PathBuf },

    // === Mapping Errors ===
    /// A header listed in the column mapping is absent from the file.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// A row has an empty display name.
    #[error("empty product name on line {line} of {path}")]
    EmptyName { path: PathBuf, line: u64 },

    /// A numeric cell is neither a number nor a missing-value marker.
    #[error("invalid number '{value}' in column '{column}' on line {line} of {path}")]
    InvalidNumber {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
    },

    /// A mapped value was rejected by the row model.
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
