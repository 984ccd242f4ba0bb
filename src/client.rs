// src/client.rs

//! High-level client facade.
//!
//! [`OpenSearch`] wraps a [`Dispatcher`] with a handful of named convenience
//! methods and a by-name [`OpenSearch::call`] for everything in the endpoint
//! table.

use serde_json::{Value, json};

use crate::api;
use crate::dispatch::{CallArgs, Dispatcher};
use crate::error::{AppError, Result};
use crate::models::{Body, Config, Endpoint};
#[cfg(feature = "sigv4")]
use crate::transport::SigV4Signer;
use crate::transport::{HttpTransport, Response, Transport};

/// Cluster client generic over its transport.
pub struct OpenSearch<T: Transport = HttpTransport> {
    dispatcher: Dispatcher<T>,
}

impl<T: Transport> Clone for OpenSearch<T> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: self.dispatcher.clone(),
        }
    }
}

impl OpenSearch<HttpTransport> {
    /// Build an HTTP client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(HttpTransport::new(&config.transport)?))
    }

    /// Build an HTTP client that signs its requests when
    /// `transport.aws_service` is set.
    #[cfg(feature = "sigv4")]
    pub async fn connect(config: &Config) -> Result<Self> {
        let mut transport = HttpTransport::new(&config.transport)?;
        if let Some(signer) = SigV4Signer::from_config(&config.transport).await? {
            transport = transport.with_signer(signer);
        }
        Ok(Self::new(transport))
    }
}

impl<T: Transport> OpenSearch<T> {
    pub fn new(transport: T) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport),
        }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    pub fn transport(&self) -> &T {
        self.dispatcher.transport()
    }

    /// Dispatch any registered endpoint by dotted name.
    pub async fn call(&self, name: &str, args: CallArgs) -> Result<Response> {
        let endpoint = api::find(name).ok_or_else(|| AppError::UnknownEndpoint(name.to_string()))?;
        self.dispatcher.call(endpoint, args).await
    }

    /// Returns `false` instead of failing when the cluster is unreachable.
    pub async fn ping(&self) -> bool {
        self.dispatcher.ping(CallArgs::new()).await
    }

    pub async fn info(&self) -> Result<Value> {
        self.body_of(&api::core::INFO, CallArgs::new()).await
    }

    pub async fn get(&self, index: &str, id: &str) -> Result<Value> {
        let args = CallArgs::new().arg("index", index).arg("id", id);
        self.body_of(&api::core::GET, args).await
    }

    /// Whether a document exists. A 404 is reported as `false`.
    pub async fn exists(&self, index: &str, id: &str) -> Result<bool> {
        let args = CallArgs::new().arg("index", index).arg("id", id);
        let response = self.dispatcher.call(&api::core::EXISTS, args).await?;
        Ok(response.is_success())
    }

    /// Index a document; the server assigns an id when `id` is `None`.
    pub async fn index(&self, index: &str, id: Option<&str>, document: Value) -> Result<Value> {
        let args = CallArgs::new()
            .arg("index", index)
            .arg("id", id)
            .body(document);
        self.body_of(&api::core::INDEX, args).await
    }

    /// Search `index`, or every index when `None`.
    pub async fn search(&self, index: Option<&str>, query: Value) -> Result<Value> {
        let args = CallArgs::new().arg("index", index).body(query);
        self.body_of(&api::core::SEARCH, args).await
    }

    /// Number of documents matching `query`, or all documents when `None`.
    pub async fn count(&self, index: Option<&str>, query: Option<Value>) -> Result<u64> {
        let mut args = CallArgs::new().arg("index", index);
        if let Some(query) = query {
            args = args.body(query);
        }
        let body = self.body_of(&api::core::COUNT, args).await?;
        body.get("count")
            .and_then(Value::as_u64)
            .ok_or_else(|| AppError::validation("count response has no numeric `count`"))
    }

    pub async fn bulk(&self, index: Option<&str>, body: impl Into<Body>) -> Result<Value> {
        let args = CallArgs::new().arg("index", index).body(body);
        self.body_of(&api::core::BULK, args).await
    }

    /// Fetch the next batch of a scroll, optionally extending its keep-alive.
    pub async fn scroll(&self, scroll_id: &str, keep_alive: Option<&str>) -> Result<Value> {
        if scroll_id.is_empty() {
            return Err(AppError::invalid_argument("scroll_id"));
        }
        let args = CallArgs::new()
            .param("scroll", keep_alive)
            .body(json!({ "scroll_id": scroll_id }));
        self.body_of(&api::core::SCROLL, args).await
    }

    /// Release the given scroll contexts.
    pub async fn clear_scroll(&self, scroll_ids: &[&str]) -> Result<Value> {
        if scroll_ids.iter().all(|id| id.is_empty()) {
            return Err(AppError::invalid_argument("scroll_id"));
        }
        let args = CallArgs::new().body(json!({ "scroll_id": scroll_ids }));
        self.body_of(&api::core::CLEAR_SCROLL, args).await
    }

    /// Index management namespace.
    pub fn indices(&self) -> Indices<'_, T> {
        Indices { client: self }
    }

    async fn body_of(&self, endpoint: &Endpoint, args: CallArgs) -> Result<Value> {
        Ok(self.dispatcher.call(endpoint, args).await?.body)
    }
}

/// `indices.*` operations bound to a client.
pub struct Indices<'a, T: Transport> {
    client: &'a OpenSearch<T>,
}

impl<T: Transport> Indices<'_, T> {
    /// Create an index with optional settings and mappings.
    pub async fn create(&self, index: &str, body: Option<Value>) -> Result<Value> {
        let mut args = CallArgs::new().arg("index", index);
        if let Some(body) = body {
            args = args.body(body);
        }
        self.client.body_of(&api::indices::CREATE, args).await
    }

    pub async fn exists(&self, index: &str) -> Result<bool> {
        let args = CallArgs::new().arg("index", index);
        let response = self.client.dispatcher.call(&api::indices::EXISTS, args).await?;
        Ok(response.is_success())
    }

    pub async fn delete(&self, index: &str) -> Result<Value> {
        let args = CallArgs::new().arg("index", index);
        self.client.body_of(&api::indices::DELETE, args).await
    }

    /// Refresh `index`, or every index when `None`.
    pub async fn refresh(&self, index: Option<&str>) -> Result<Value> {
        let args = CallArgs::new().arg("index", index);
        self.client.body_of(&api::indices::REFRESH, args).await
    }
}
