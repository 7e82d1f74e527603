#[cfg(feature = "ssr")]
pub mod client;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const GENERIC_SERVER_ERROR: &str = "Server error occurred";
pub const UNEXPECTED_RESPONSE: &str = "Unexpected response from server";

/// Uniform failure shape for every backend call.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiError {
    /// Rejected locally, nothing was sent.
    #[error("{0}")]
    Validation(String),
    /// No response arrived: refused, reset or timed out.
    #[error("Network error - please check your connection")]
    Network { detail: String },
    /// The backend answered and said no. `status` is `None` when the failure came
    /// inside a successful response body.
    #[error("{message}")]
    Server { status: Option<u16>, message: String },
}

impl ApiError {
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Network { .. } => true,
            Self::Server { status, .. } => status.is_none_or(|s| s >= 500),
        }
    }
}

/// `{ status, message?, data? }` wrapper the backend puts around most payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn is_error(&self) -> bool {
        self.status.eq_ignore_ascii_case("error")
    }

    /// Turns an in-body `"error"` status into [`ApiError::Server`].
    pub fn check(self) -> Result<Self, ApiError> {
        if self.is_error() {
            return Err(ApiError::Server {
                status: None,
                message: self
                    .message
                    .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
            });
        }
        Ok(self)
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.check()?.data.ok_or_else(|| ApiError::Server {
            status: None,
            message: UNEXPECTED_RESPONSE.to_string(),
        })
    }
}

/// Picks the human readable message out of an error body: `message`, then FastAPI's
/// `detail` (string or validation list), then a generic fallback.
pub fn server_message(body: &[u8]) -> String {
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(body) else {
        return GENERIC_SERVER_ERROR.to_string();
    };
    if let Some(Value::String(msg)) = map.get("message") {
        if !msg.is_empty() {
            return msg.clone();
        }
    }
    match map.get("detail") {
        Some(Value::String(detail)) if !detail.is_empty() => detail.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
        _ => GENERIC_SERVER_ERROR.to_string(),
    }
}
