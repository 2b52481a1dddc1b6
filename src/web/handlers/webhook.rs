use std::sync::Arc;

use axum::{
    body::{self, Body},
    extract::State,
    http::{header::CONTENT_LENGTH, HeaderMap, Method, Uri},
    routing::post,
    Router,
};
use tracing::info;

use crate::error::ListenerError;
use crate::AppContext;

pub const ACKNOWLEDGEMENT: &str = "Received webhook";

/// POST to any path is a webhook; other methods get the framework's 405.
pub fn webhook_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", post(receive_webhook))
        .route("/*path", post(receive_webhook))
        .with_state(ctx)
}

async fn receive_webhook(
    State(ctx): State<Arc<AppContext>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Body,
) -> Result<&'static str, ListenerError> {
    let declared = declared_length(&headers)?;

    let bytes = body::to_bytes(body, declared)
        .await
        .map_err(|e| ListenerError::IncompleteBody {
            declared,
            reason: e.to_string(),
        })?;
    if bytes.len() < declared {
        return Err(ListenerError::IncompleteBody {
            declared,
            reason: format!("only {} bytes received", bytes.len()),
        });
    }

    let payload = String::from_utf8(Vec::from(bytes))?;
    info!("Received webhook: {} {} ({} bytes)", method, uri.path(), declared);
    ctx.sink.deliver(&payload).await?;

    Ok(ACKNOWLEDGEMENT)
}

fn declared_length(headers: &HeaderMap) -> Result<usize, ListenerError> {
    let value = headers
        .get(CONTENT_LENGTH)
        .ok_or(ListenerError::MissingContentLength)?;
    let text = value.to_str().map_err(|_| {
        ListenerError::InvalidContentLength(String::from_utf8_lossy(value.as_bytes()).into_owned())
    })?;

    text.trim()
        .parse::<usize>()
        .map_err(|_| ListenerError::InvalidContentLength(text.to_string()))
}
