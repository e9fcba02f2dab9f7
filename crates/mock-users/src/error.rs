//! Error types for the mock-users crate.
//!
//! Each stage of a run has its own `thiserror` enum; [`RunError`] wraps them
//! for the top-level entry point.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading record templates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("failed to read template file at '{path}': {message}")]
    IoError {
        /// Path to the template file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The template JSON is malformed or missing required fields.
    #[error("invalid template JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The profile template has no photo entries.
    #[error("profile template must contain at least one photo")]
    NoPhotos,
}

/// Errors that can occur while writing the output file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The records could not be serialized.
    #[error("failed to serialize users: {message}")]
    SerializeError {
        /// Description of the serialization error.
        message: String,
    },

    /// The output path does not name a file, or is not valid UTF-8.
    #[error("invalid output path '{path}': {message}")]
    InvalidPath {
        /// The rejected path.
        path: PathBuf,
        /// Why the path was rejected.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    WriteError {
        /// Path that was being written.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors surfaced by a complete generation run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RunError {
    /// Templates could not be loaded.
    #[error("template error: {source}")]
    Template {
        /// Underlying template error.
        #[from]
        #[source]
        source: TemplateError,
    },

    /// The output file could not be produced.
    #[error("output error: {source}")]
    Output {
        /// Underlying output error.
        #[from]
        #[source]
        source: OutputError,
    },
}
