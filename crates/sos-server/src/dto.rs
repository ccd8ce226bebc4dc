use serde::{Deserialize, Serialize};

pub const DEFAULT_MESSAGE: &str = "Emergency SOS triggered!";
pub const TRIGGERED: &str = "SOS alarm triggered";

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SosResponse {
    pub status: String,
    pub message: String,
    pub received_message: String,
}

impl SosResponse {
    pub fn triggered(received_message: String) -> Self {
        Self {
            status: "success".into(),
            message: TRIGGERED.into(),
            received_message,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok".into() }
    }
}
