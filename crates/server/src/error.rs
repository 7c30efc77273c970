use std::io;
use std::num::ParseIntError;

use thiserror::Error;

/// Errors that stop the server from starting or running.
#[derive(Debug, Error)]
pub enum ServerError {
    /// `PORT` was set to something that is not a TCP port number.
    #[error("Invalid PORT value {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// `LOG_FORMAT` was neither `text` nor `json`.
    #[error("Invalid LOG_FORMAT value {0:?}: expected \"text\" or \"json\"")]
    InvalidLogFormat(String),

    /// The listening socket could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    /// The accept loop failed.
    #[error("Server error: {0}")]
    Serve(#[source] io::Error),
}

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;
