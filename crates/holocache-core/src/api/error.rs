use thiserror::Error;

use crate::utils::format::truncate_string;

/// Terminal failure of a single fetch. None of these are retried internally;
/// the `Display` text is the message handed to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("Remote error: status {status}")]
    RemoteError { status: u16 },

    #[error("Unexpected response from the API: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    TransportFailure(String),
}

/// Maximum length for response bodies quoted in logs
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl FetchError {
    /// Truncate a response body to avoid logging excessive data
    pub fn truncate_body(body: &str) -> String {
        truncate_string(body, MAX_ERROR_BODY_LENGTH)
    }

    pub fn from_status(status: u16) -> Self {
        FetchError::RemoteError { status }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        let detail = e.to_string();
        if detail.is_empty() {
            FetchError::TransportFailure("unknown error".to_string())
        } else {
            FetchError::TransportFailure(detail)
        }
    }
}
