//! Transport error type.

use serde_json::Value;
use thiserror::Error;

/// Failure reported by a transport.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a response
    #[error("Connection error: {0}")]
    Connection(String),

    /// The request timed out
    #[error("Connection timeout: {0}")]
    Timeout(String),

    /// The server answered with a non-success status
    #[error("TransportError({status}, '{error}')")]
    Status {
        status: u16,
        /// Error type reported by the server, or the raw body
        error: String,
        /// Parsed response body
        info: Value,
    },

    /// A body could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request could not be signed
    #[error("Signing error: {0}")]
    Signing(String),
}

impl TransportError {
    /// Build a status error from a response body, extracting the server's
    /// error type when present.
    pub fn from_status(status: u16, info: Value) -> Self {
        let error = match &info {
            Value::Object(map) => match map.get("error") {
                Some(Value::Object(err)) => err
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown")
                    .to_string(),
                Some(Value::String(s)) => s.clone(),
                _ => info.to_string(),
            },
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Self::Status {
            status,
            error,
            info,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }
}
