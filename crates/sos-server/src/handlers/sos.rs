//! SOS trigger handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{Method, Uri};
use axum::Json;
use tracing::info;

use crate::dto::{SosResponse, DEFAULT_MESSAGE};
use crate::error::AppError;
use crate::ServerState;

/// GET|POST /sos - Raise the alarm and echo the message back.
pub async fn trigger(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SosResponse>, AppError> {
    let body = body.map_err(AppError::internal)?;
    let message = resolve_message(&method, &uri, &body);

    state.alarm.trigger(&message).await;
    info!("SOS received: {}", message);

    Ok(Json(SosResponse::triggered(message)))
}

/// Picks the SOS message.
///
/// POST looks at a JSON body, then a form body, then the query string.
/// Other methods only look at the query string. Unparseable sources are
/// skipped.
pub fn resolve_message(method: &Method, uri: &Uri, body: &[u8]) -> String {
    let from_body = if method == Method::POST {
        json_message(body).or_else(|| form_message(body))
    } else {
        None
    };

    from_body
        .or_else(|| query_message(uri))
        .unwrap_or_else(|| DEFAULT_MESSAGE.to_string())
}

fn json_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value.get("message")?.as_str().map(String::from)
}

fn form_message(body: &[u8]) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    first_message(serde_urlencoded::from_bytes(body).ok()?)
}

fn query_message(uri: &Uri) -> Option<String> {
    first_message(serde_urlencoded::from_str(uri.query()?).ok()?)
}

/// A repeated `message` key resolves to its first value.
fn first_message(pairs: Vec<(String, String)>) -> Option<String> {
    pairs
        .into_iter()
        .find(|(key, _)| key == "message")
        .map(|(_, value)| value)
}
