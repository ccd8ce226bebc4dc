//! Application error types and Axum response conversion.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::dto::ErrorResponse;

/// Faults in request handling. Always reported as `500`.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
}

impl AppError {
    /// Creates an Internal error from any error type.
    pub fn internal(e: impl std::fmt::Display) -> Self {
        AppError::Internal(e.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal(message) = self;
        tracing::error!("SOS handler failed: {}", message);
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(message))).into_response()
    }
}

/// Turns a handler panic into the same `500` body as [`AppError`].
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(message).into_response()
}
