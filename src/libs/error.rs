//! Error taxonomy of the update pipeline.
//!
//! Each stage fails with a distinct [`UpdateError`] variant so that `main`
//! can turn the failure into a stable process exit code.

use std::path::PathBuf;
use thiserror::Error;

/// Network failures, and any local failure without a more specific code.
pub const EXIT_NETWORK: i32 = 1;
/// The listing or the archive could not be interpreted.
pub const EXIT_FORMAT: i32 = 2;
/// No asset matched while running in strict mode.
pub const EXIT_NO_MATCHING_ASSET: i32 = 3;

#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: reqwest::StatusCode },

    #[error("release listing is not a valid JSON array of releases: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("no stable release found in the listing")]
    EmptyReleaseSet,

    #[error("failed to read archive: {0}")]
    Extraction(#[source] std::io::Error),

    #[error("entry '{0}' not found in archive")]
    EntryNotFound(String),

    #[error("no asset in release {tag} contains both '{platform}' and '{variant}'")]
    NoMatchingAsset { tag: String, platform: String, variant: String },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl UpdateError {
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        UpdateError::Network { url: url.into(), source }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        UpdateError::Io { path: path.into(), source }
    }

    /// Exit code reported by the binary when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            UpdateError::Network { .. } | UpdateError::Status { .. } | UpdateError::Io { .. } => EXIT_NETWORK,
            UpdateError::Parse(_) | UpdateError::EmptyReleaseSet | UpdateError::Extraction(_) | UpdateError::EntryNotFound(_) => {
                EXIT_FORMAT
            }
            UpdateError::NoMatchingAsset { .. } => EXIT_NO_MATCHING_ASSET,
        }
    }
}

pub type UpdateResult<T> = std::result::Result<T, UpdateError>;

/// Exit code for an error returned by a command.
///
/// Errors raised by the pipeline carry their own code; anything else, such as
/// an unreadable configuration file, exits with [`EXIT_NETWORK`].
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<UpdateError>().map(UpdateError::exit_code).unwrap_or(EXIT_NETWORK)
}
