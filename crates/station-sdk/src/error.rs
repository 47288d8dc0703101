//! Client-side failures.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server could not be reached or did not answer in time.
    #[error("station server unavailable: {0}")]
    UpstreamUnavailable(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("station server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("invalid response body: {0}")]
    Decode(#[source] reqwest::Error),
    /// The HTTP client itself could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }

    pub(crate) fn from_transport(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err)
        } else {
            ClientError::UpstreamUnavailable(err)
        }
    }
}
