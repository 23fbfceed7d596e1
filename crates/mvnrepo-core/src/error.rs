//! Error types surfaced by the core.
//!
//! Network failures during an existence probe are not errors: `probe::exists`
//! maps them to `false`. `ProbeError` is only returned by callers that ask for
//! the raw status.

use std::io;
use std::path::PathBuf;

/// Failure while hashing an artifact or reading its sidecar.
#[derive(Debug, thiserror::Error)]
pub enum ChecksumError {
    /// Artifact or sidecar could not be opened or read.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// `verify_all` was called on an artifact that does not exist.
    #[error("artifact {} does not exist", .0.display())]
    Precondition(PathBuf),
}

impl ChecksumError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChecksumError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Input was not one of the recognized boolean spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to convert '{0}' to boolean")]
pub struct ParseBoolError(pub String);

/// Algorithm name not recognized by `DigestAlgorithm::from_str`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown digest algorithm '{0}'")]
pub struct UnknownAlgorithm(pub String);

/// Failure while fetching the raw HTTP status of a URL.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// libcurl reported a transport error (DNS, refused, timeout, bad URL).
    #[error("request to {url} failed: {source}")]
    Curl {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// Only http and https URLs have a status.
    #[error("scheme '{0}' has no HTTP status")]
    UnsupportedScheme(String),
}
