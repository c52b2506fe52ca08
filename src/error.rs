//! Uniform error returned by the page loaders.
//!
//! Loaders return `Result<T, LoadError>`; the HTTP boundary turns the error
//! into a JSON body of the form `{"message": "..."}`. Every variant is
//! reported to the page as a 500, whatever status the backend answered with.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The outbound call never completed (DNS, refused connection, ...).
    #[error("{message}")]
    ServiceUnavailable {
        message: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status and a fixed message.
    #[error("{message}")]
    BadGateway { upstream: StatusCode, message: String },

    /// The backend rejected the request and explained why.
    #[error("{message}")]
    BadRequest { upstream: StatusCode, message: String },

    /// A success body that should have been JSON was not.
    #[error("Malformed response from the server to {path}")]
    MalformedResponse {
        path: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl LoadError {
    /// Status surfaced to the page layer
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Status the backend actually returned, when it returned one
    pub fn upstream_status(&self) -> Option<StatusCode> {
        match self {
            LoadError::BadGateway { upstream, .. } | LoadError::BadRequest { upstream, .. } => {
                Some(*upstream)
            }
            LoadError::ServiceUnavailable { .. } | LoadError::MalformedResponse { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for LoadError {
    fn into_response(self) -> Response {
        match &self {
            LoadError::ServiceUnavailable { source, .. } => {
                tracing::error!(error = %source, "backend unreachable");
            }
            LoadError::MalformedResponse { path, source } => {
                tracing::error!(error = %source, path = *path, "backend sent malformed body");
            }
            LoadError::BadGateway { message, .. } | LoadError::BadRequest { message, .. } => {
                tracing::warn!(upstream = ?self.upstream_status(), "backend failure: {}", message);
            }
        }

        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}
