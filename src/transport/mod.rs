//! Transport abstractions.
//!
//! The dispatcher builds a [`Request`] and hands it to a [`Transport`], which
//! owns connections, wire encoding of JSON bodies, and response parsing.

mod error;
pub mod http;
#[cfg(feature = "sigv4")]
pub mod sigv4;

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::HttpMethod;

pub use error::TransportError;
pub use http::HttpTransport;
#[cfg(feature = "sigv4")]
pub use sigv4::SigV4Signer;

/// Encodes structured values for the wire.
pub trait Serializer: Send + Sync {
    /// Serialize one value to a single line of text.
    fn dumps(&self, value: &Value) -> Result<String, TransportError>;

    /// Content type of serialized values.
    fn mimetype(&self) -> &'static str;
}

/// Compact JSON serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn dumps(&self, value: &Value) -> Result<String, TransportError> {
        serde_json::to_string(value).map_err(|e| TransportError::Serialization(e.to_string()))
    }

    fn mimetype(&self) -> &'static str {
        "application/json"
    }
}

/// Body of an outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Structured value, encoded by the transport's serializer
    Json(Value),
    /// Newline-delimited sub-requests, already serialized
    Ndjson(String),
    /// Opaque text
    Text(String),
}

/// A fully resolved request.
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: HttpMethod,
    pub path: String,
    pub params: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Payload>,
    /// Overrides the transport's default timeout
    pub timeout: Option<Duration>,
    /// Statuses not treated as errors
    pub ignore: Vec<u16>,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            params: BTreeMap::new(),
            headers: BTreeMap::new(),
            body: None,
            timeout: None,
            ignore: Vec::new(),
        }
    }
}

/// A parsed response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    /// Parsed JSON; `Bool` for `HEAD`, `Null` when empty, `String` when not JSON
    pub body: Value,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Deserialize the body into a typed value.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(&self.body)
    }
}

/// Executes requests against a cluster.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one request and return its parsed response.
    async fn perform_request(&self, request: Request) -> Result<Response, TransportError>;

    /// Serializer used for bulk bodies.
    fn serializer(&self) -> &dyn Serializer;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_json_serializer_compact() {
        let line = JsonSerializer.dumps(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(line, r#"{"a":[1,2]}"#);
        assert_eq!(JsonSerializer.mimetype(), "application/json");
    }

    #[test]
    fn test_response_json_typed() {
        #[derive(Deserialize)]
        struct Info {
            cluster_name: String,
        }

        let response = Response {
            status: 200,
            headers: BTreeMap::new(),
            body: json!({"cluster_name": "docker-cluster", "version": {"number": "2.11.0"}}),
        };
        assert!(response.is_success());
        let info: Info = response.json().unwrap();
        assert_eq!(info.cluster_name, "docker-cluster");
    }

    #[test]
    fn test_response_not_success() {
        let response = Response {
            status: 404,
            headers: BTreeMap::new(),
            body: Value::Bool(false),
        };
        assert!(!response.is_success());
    }
}
