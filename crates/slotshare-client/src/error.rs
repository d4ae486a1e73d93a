//! Error types for the async collaborators.

use thiserror::Error;

/// Failures surfaced by event sources and the schedule backend.
///
/// These are distinct, named categories by contract: a permission or
/// transport failure must reach the caller as itself, never collapsed into
/// an empty event list or an empty grid.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("calendar access denied")]
    PermissionDenied,

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server error: {status}")]
    Server { status: u16 },

    #[error("malformed response: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;
