use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while fetching pages or writing the report
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure reported by the HTTP client
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Fetch configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Input ended before a required answer was given
    #[error("input closed before {0} was provided")]
    InputClosed(&'static str),

    #[error("output file {} must end with .{}", .path.display(), .extension)]
    InvalidOutputPath {
        path: PathBuf,
        extension: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
