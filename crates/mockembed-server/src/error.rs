//! HTTP error handling and response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mockembed_engine::EmbedError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no route for request")]
    UnknownRoute,

    #[error("embedding error: {0}")]
    EmbedError(#[from] EmbedError),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::MalformedBody(_) | ServerError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ServerError::UnknownRoute => StatusCode::NOT_FOUND,
            ServerError::EmbedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::debug!(status = %status, error = %self, "request rejected");
        }

        // The wire contract is status-only: no error envelope in the body.
        status.into_response()
    }
}
