use std::io;
use std::net::SocketAddr;
use std::string::FromUtf8Error;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::utils::http::HttpResponse;

#[derive(Debug, Error)]
pub enum ListenerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("missing Content-Length header")]
    MissingContentLength,

    #[error("invalid Content-Length header: {0:?}")]
    InvalidContentLength(String),

    #[error("body ended before {declared} declared bytes were read: {reason}")]
    IncompleteBody { declared: usize, reason: String },

    #[error("body is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error("failed to write payload: {0}")]
    Output(#[source] io::Error),

    #[error("server error: {0}")]
    Serve(#[source] io::Error),
}

impl ListenerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingContentLength
            | Self::InvalidContentLength(_)
            | Self::IncompleteBody { .. }
            | Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::Bind { .. } | Self::Output(_) | Self::Serve(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            Self::MissingContentLength
            | Self::InvalidContentLength(_)
            | Self::IncompleteBody { .. }
            | Self::Decode(_) => "Malformed request",
            Self::Bind { .. } | Self::Output(_) | Self::Serve(_) => "Internal server error",
        }
    }
}

impl IntoResponse for ListenerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Webhook handling failed: {}", self);
        } else {
            warn!("Rejected webhook: {}", self);
        }

        let response = HttpResponse::new(
            status.as_u16(),
            self.summary().to_string(),
            self.to_string(),
        );
        (status, Json(response)).into_response()
    }
}
