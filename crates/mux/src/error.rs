use http::StatusCode;
use http_body_util::LengthLimitError;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("request body exceeds the limit of {limit} bytes")]
    BodyTooLarge { limit: usize },

    #[error("failed to read request body: {source}")]
    Body { source: Box<dyn Error + Send + Sync> },
}

impl DispatchError {
    pub fn body<E: Into<Box<dyn Error + Send + Sync>>>(e: E) -> Self {
        Self::Body { source: e.into() }
    }

    pub fn body_too_large(limit: usize) -> Self {
        Self::BodyTooLarge { limit }
    }

    /// Classifies an error of a [`Limited`](http_body_util::Limited) body read.
    pub(crate) fn limited(e: Box<dyn Error + Send + Sync>, limit: usize) -> Self {
        if e.is::<LengthLimitError>() { Self::body_too_large(limit) } else { Self::Body { source: e } }
    }

    /// The status code a client should see for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            DispatchError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            DispatchError::Body { .. } => StatusCode::BAD_REQUEST,
        }
    }
}
