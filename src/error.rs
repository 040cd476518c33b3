//! API Errors
//!
//! Typed failures returned by the data access layer.

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Item {id} not found in {category}")]
    NotFound { id: String, category: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
