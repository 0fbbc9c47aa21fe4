//! All error types for the langjson crate.
//!
//! Import, configuration, and codec failures surface as [`Error`]. Export never fails as a
//! whole; per-file failures there are reported through a [`crate::traits::ResultSink`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("malformed resource file `{}`: {source}", .path.display())]
    MalformedResourceFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid resource file name: {0}")]
    InvalidFileName(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration(message.into())
    }

    /// Tags a JSON error with the file it came from.
    pub fn malformed_file(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Error::MalformedResourceFile {
            path: path.into(),
            source,
        }
    }
}
