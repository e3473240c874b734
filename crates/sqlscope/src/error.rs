//! Error types for the service surfaces.
//!
//! Malformed SQL is never an error; these cover bad requests and I/O.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Errors raised while reading input or serving requests.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request body has no `sql` field.
    #[error("missing required field 'sql'")]
    MissingSql,

    /// The `sql` field is empty or whitespace only.
    #[error("field 'sql' must not be empty")]
    EmptySql,

    /// The request body is not valid JSON or has the wrong shape.
    #[error("invalid JSON body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The request body exceeds the configured limit.
    #[error("request body exceeds {limit} bytes")]
    PayloadTooLarge {
        /// Maximum accepted body size in bytes.
        limit: usize,
    },

    /// An input file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    ReadFile {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The server could not bind its listening socket.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Any other I/O error (stdin, sockets).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status code for this error when it reaches a client.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::MissingSql | Self::EmptySql | Self::InvalidJson(_) => 400,
            Self::PayloadTooLarge { .. } => 413,
            Self::ReadFile { .. } | Self::Bind { .. } | Self::Io(_) => 500,
        }
    }
}

/// Result type for service operations.
pub type Result<T> = std::result::Result<T, Error>;
