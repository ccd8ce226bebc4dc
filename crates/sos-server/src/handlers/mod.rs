//! HTTP route handlers for the SOS server.

pub mod sos;

use axum::Json;

use crate::dto::HealthResponse;

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
