//! Error types for model construction and the API client.
//!
//! # Design
//! `ValidationError` is the only failure a model can produce. `ApiError`
//! wraps it for response bodies that parse as JSON but do not fit the model,
//! and keeps `NotFound` separate from other unexpected statuses.

use thiserror::Error;

/// A model could not be built because a field is missing or has the wrong type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Errors returned by `LifetoolClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a status other than the expected one or 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body is not JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The response body is JSON but does not match the expected model.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
