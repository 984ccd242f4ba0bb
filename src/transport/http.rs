//! HTTP transport backed by reqwest.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use url::Url;

#[cfg(feature = "sigv4")]
use super::SigV4Signer;
use super::{JsonSerializer, Payload, Request, Response, Serializer, Transport, TransportError};
use crate::error::Result;
use crate::models::{HttpMethod, TransportConfig};
use crate::utils::http::create_async_client;
use crate::utils::url::{join_path, parse_endpoint};

const NDJSON: &str = "application/x-ndjson";

/// Transport that sends requests to a single cluster endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
    auth: Option<(String, Option<String>)>,
    #[cfg(feature = "sigv4")]
    signer: Option<SigV4Signer>,
    serializer: JsonSerializer,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base", &self.base.as_str())
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Create a transport from connection settings.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let client = create_async_client(config)?;
        let base = parse_endpoint(&config.endpoint)?;
        let auth = config
            .username
            .clone()
            .map(|user| (user, config.password.clone()));

        log::debug!("HTTP transport for {}", base);
        #[cfg(not(feature = "sigv4"))]
        if let Some(service) = &config.aws_service {
            log::warn!("Built without request signing; requests to {} are unsigned", service);
        }

        Ok(Self {
            client,
            base,
            auth,
            #[cfg(feature = "sigv4")]
            signer: None,
            serializer: JsonSerializer,
        })
    }

    /// Sign every request with AWS SigV4.
    #[cfg(feature = "sigv4")]
    pub fn with_signer(mut self, signer: SigV4Signer) -> Self {
        self.signer = Some(signer);
        self
    }

    /// Base URL requests are resolved against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    fn url_for(&self, request: &Request) -> Url {
        let mut url = join_path(&self.base, &request.path);
        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(request.params.iter());
        }
        url
    }

    fn method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Head => Method::HEAD,
            HttpMethod::Post => Method::POST,
            HttpMethod::Put => Method::PUT,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    fn map_send_error(err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout(err.to_string())
        } else {
            TransportError::Connection(err.to_string())
        }
    }

    fn parse_body(text: &str) -> Value {
        if text.trim().is_empty() {
            return Value::Null;
        }
        serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform_request(&self, request: Request) -> std::result::Result<Response, TransportError> {
        let (content_type, body) = match &request.body {
            None => (None, None),
            Some(Payload::Json(value)) => (
                Some(self.serializer.mimetype()),
                Some(self.serializer.dumps(value)?),
            ),
            Some(Payload::Ndjson(text)) => (Some(NDJSON), Some(text.clone())),
            Some(Payload::Text(text)) => (None, Some(text.clone())),
        };

        let url = self.url_for(&request);
        let mut builder = self
            .client
            .request(Self::method(request.method), url.clone());

        #[cfg(feature = "sigv4")]
        if let Some(signer) = &self.signer {
            let bytes = body.as_deref().unwrap_or_default().as_bytes();
            for (name, value) in signer.sign(request.method.as_str(), &url, bytes).await? {
                builder = builder.header(name, value);
            }
        }

        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, password.as_ref());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = request.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(content_type) = content_type {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(Self::map_send_error)?;
        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();

        if request.method == HttpMethod::Head {
            let found = (200..300).contains(&status);
            if !found && status != 404 && !request.ignore.contains(&status) {
                return Err(TransportError::from_status(status, Value::Null));
            }
            return Ok(Response {
                status,
                headers,
                body: Value::Bool(found),
            });
        }

        let text = response.text().await.map_err(Self::map_send_error)?;
        let body = Self::parse_body(&text);

        if !(200..300).contains(&status) && !request.ignore.contains(&status) {
            log::debug!("{} {} -> {}", request.method, request.path, status);
            return Err(TransportError::from_status(status, body));
        }

        Ok(Response {
            status,
            headers,
            body,
        })
    }

    fn serializer(&self) -> &dyn Serializer {
        &self.serializer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn transport_for(server: &MockServer) -> HttpTransport {
        let config = TransportConfig {
            endpoint: server.uri(),
            ..TransportConfig::default()
        };
        HttpTransport::new(&config).unwrap()
    }

    #[test]
    fn test_url_for_with_params() {
        let config = TransportConfig {
            endpoint: "https://search.example.com/prod".to_string(),
            ..TransportConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        let mut request = Request::new(HttpMethod::Get, "/orders/_search");
        request.params.insert("size".to_string(), "5".to_string());
        request.params.insert("q".to_string(), "a b".to_string());

        let url = transport.url_for(&request);
        assert_eq!(
            url.as_str(),
            "https://search.example.com/prod/orders/_search?q=a+b&size=5"
        );
    }

    #[tokio::test]
    async fn test_get_parses_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/orders/_doc/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_id": "42", "found": true})))
            .expect(1)
            .mount(&server)
            .await;

        let response = transport_for(&server)
            .perform_request(Request::new(HttpMethod::Get, "/orders/_doc/42"))
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body["found"], json!(true));
    }

    #[tokio::test]
    async fn test_error_status_becomes_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing/_doc/1"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"type": "index_not_found_exception"},
                "status": 404
            })))
            .mount(&server)
            .await;

        let err = transport_for(&server)
            .perform_request(Request::new(HttpMethod::Get, "/missing/_doc/1"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(err.to_string().contains("index_not_found_exception"));
    }

    #[tokio::test]
    async fn test_ignored_status_is_returned() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"acknowledged": false})))
            .mount(&server)
            .await;

        let mut request = Request::new(HttpMethod::Delete, "/orders");
        request.ignore = vec![404];
        let response = transport_for(&server).perform_request(request).await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_head_returns_bool() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/orders"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let found = transport
            .perform_request(Request::new(HttpMethod::Head, "/orders"))
            .await
            .unwrap();
        assert_eq!(found.body, Value::Bool(true));

        let missing = transport
            .perform_request(Request::new(HttpMethod::Head, "/missing"))
            .await
            .unwrap();
        assert_eq!(missing.body, Value::Bool(false));
    }

    #[tokio::test]
    async fn test_ndjson_body_and_headers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/_bulk"))
            .and(header("content-type", "application/x-ndjson"))
            .and(header("x-opaque-id", "req-1"))
            .and(query_param("refresh", "true"))
            .and(body_string("{\"index\":{}}\n{\"a\":1}\n"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"errors": false})))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = Request::new(HttpMethod::Post, "/_bulk");
        request.body = Some(Payload::Ndjson("{\"index\":{}}\n{\"a\":1}\n".to_string()));
        request.headers.insert("x-opaque-id".to_string(), "req-1".to_string());
        request.params.insert("refresh".to_string(), "true".to_string());

        let response = transport_for(&server).perform_request(request).await.unwrap();
        assert_eq!(response.body["errors"], json!(false));
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .and(header("authorization", "Basic YWRtaW46c2VjcmV0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tagline": "The OpenSearch Project"})))
            .expect(1)
            .mount(&server)
            .await;

        let config = TransportConfig {
            endpoint: server.uri(),
            username: Some("admin".to_string()),
            password: Some("secret".to_string()),
            ..TransportConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        let response = transport
            .perform_request(Request::new(HttpMethod::Get, "/"))
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[cfg(feature = "sigv4")]
    #[tokio::test]
    async fn test_signed_request_carries_sigv4_headers() {
        use aws_credential_types::Credentials;
        use aws_credential_types::provider::SharedCredentialsProvider;
        use wiremock::matchers::{header_exists, header_regex};

        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/kb-index"))
            .and(header_regex(
                "authorization",
                r"^AWS4-HMAC-SHA256 Credential=AKID/\d{8}/us-east-1/aoss/aws4_request",
            ))
            .and(header_exists("x-amz-date"))
            .and(header_exists("x-amz-content-sha256"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
            .expect(1)
            .mount(&server)
            .await;

        let credentials = Credentials::new("AKID", "secret", None, None, "static");
        let signer = SigV4Signer::new(SharedCredentialsProvider::new(credentials), "us-east-1", "aoss");
        let transport = transport_for(&server).with_signer(signer);

        let mut request = Request::new(HttpMethod::Put, "/kb-index");
        request.body = Some(Payload::Json(json!({"settings": {"index.knn": true}})));
        let response = transport.perform_request(request).await.unwrap();
        assert_eq!(response.body["acknowledged"], json!(true));
    }

    #[tokio::test]
    async fn test_unsigned_by_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        transport_for(&server)
            .perform_request(Request::new(HttpMethod::Get, "/"))
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        assert!(!received[0].headers.contains_key("authorization"));
        assert!(!received[0].headers.contains_key("x-amz-date"));
    }

    #[tokio::test]
    async fn test_timeout_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/_cluster/health"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&server)
            .await;

        let mut request = Request::new(HttpMethod::Get, "/_cluster/health");
        request.timeout = Some(Duration::from_millis(50));
        let err = transport_for(&server).perform_request(request).await.unwrap_err();
        assert!(matches!(err, TransportError::Timeout(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let config = TransportConfig {
            endpoint: "http://127.0.0.1:1".to_string(),
            ..TransportConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        let err = transport
            .perform_request(Request::new(HttpMethod::Get, "/"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Connection(_)));
    }

    #[test]
    fn test_parse_body_variants() {
        assert_eq!(HttpTransport::parse_body(""), Value::Null);
        assert_eq!(HttpTransport::parse_body("{\"a\":1}"), json!({"a": 1}));
        assert_eq!(
            HttpTransport::parse_body("green open orders"),
            Value::String("green open orders".to_string())
        );
    }
}
