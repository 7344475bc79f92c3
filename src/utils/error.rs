//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while loading the event vocabulary
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("failed to run search tool: {0}")]
    SpawnFailed(#[from] std::io::Error),

    #[error("search tool produced no usable output (exit status: {status})")]
    NoMatches { status: ExitStatus },
}

/// Errors that can occur while extracting events from a wrapper source
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("wrapper declaration in {file} has no parseable function name: {line:?}")]
    MalformedDeclaration { file: String, line: String },
}

/// Errors that can occur while writing generated fragments
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to write fragment: {0}")]
    WriteFailed(#[from] std::io::Error),
}

/// Errors that can occur while writing the classification report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}
