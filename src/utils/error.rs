//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while parsing nm output
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unrecognized symbol category '{0}'")]
    UnrecognizedCategory(char),

    #[error("Malformed nm line: {0:?}")]
    MalformedLine(String),

    #[error("nm output is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Line {line_number}: {source}")]
    AtLine {
        line_number: usize,
        raw: String,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Raw input text that triggered the failure, when known
    pub fn raw_line(&self) -> Option<&str> {
        match self {
            Self::MalformedLine(line) => Some(line),
            Self::AtLine { raw, .. } => Some(raw),
            _ => None,
        }
    }
}

/// Errors that can occur while running the symbol dump tool
#[derive(Error, Debug)]
pub enum NmError {
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

/// Errors that can occur during flamegraph generation
#[derive(Error, Debug)]
pub enum FlamegraphError {
    #[error("Empty stack data")]
    EmptyStacks,

    #[error("Failed to render flamegraph: {0}")]
    RenderFailed(String),

    #[error("Flamegraph is not valid UTF-8: {0}")]
    InvalidSvg(#[from] std::string::FromUtf8Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
