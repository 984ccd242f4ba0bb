// src/dispatch.rs

//! Request dispatcher.
//!
//! Turns an [`Endpoint`] plus per-call arguments into exactly one transport
//! request. The dispatcher validates required arguments, builds the path,
//! filters query options against the endpoint's whitelist, and serializes
//! bulk bodies. It never retries and never interprets responses.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::models::{Arg, Body, BodyRule, Endpoint, PathArgs, bulk_body, filter_params};
use crate::transport::{Payload, Request, Response, Transport};

/// Header carrying the caller's opaque request id.
pub const OPAQUE_ID_HEADER: &str = "x-opaque-id";

/// Arguments for a single call.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    pub path: PathArgs,
    pub params: BTreeMap<String, Arg>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Body>,
    pub timeout: Option<Duration>,
    pub ignore: Vec<u16>,
    pub opaque_id: Option<String>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path argument.
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.path.insert(name, value);
        self
    }

    /// Supply a query option. Options the endpoint does not recognize are dropped.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Treat the given status as a normal response.
    pub fn ignore(mut self, status: u16) -> Self {
        self.ignore.push(status);
        self
    }

    pub fn opaque_id(mut self, id: impl Into<String>) -> Self {
        self.opaque_id = Some(id.into());
        self
    }
}

/// Stateless translator from endpoint calls to transport requests.
pub struct Dispatcher<T: Transport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
        }
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self::from_arc(Arc::new(transport))
    }

    pub fn from_arc(transport: Arc<T>) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the transport request for a call without sending it.
    ///
    /// Fails with `InvalidArgument` when a required path argument or a
    /// required body is absent or empty.
    pub fn prepare(&self, endpoint: &Endpoint, args: CallArgs) -> Result<Request> {
        for name in endpoint.required() {
            if args.path.get(name).is_blank() {
                return Err(AppError::invalid_argument(name));
            }
        }

        let body_required = matches!(endpoint.body, BodyRule::Required | BodyRule::Bulk);
        if body_required && args.body.as_ref().is_none_or(Body::is_empty) {
            return Err(AppError::invalid_argument("body"));
        }

        let method = endpoint.method_for(&args.path);
        let path = endpoint.build_path(&args.path);
        let params = filter_params(endpoint, &args.params);

        let body = match (endpoint.body, args.body) {
            (_, None) => None,
            (BodyRule::None, Some(_)) => {
                log::debug!("{} takes no body; dropping it", endpoint.name);
                None
            }
            (BodyRule::Bulk, Some(body)) => Some(Payload::Ndjson(bulk_body(
                self.transport.serializer(),
                &body,
            )?)),
            (_, Some(Body::Json(value))) => Some(Payload::Json(value)),
            (_, Some(Body::Text(text))) => Some(Payload::Text(text)),
            (_, Some(body @ Body::Bulk(_))) => Some(Payload::Ndjson(bulk_body(
                self.transport.serializer(),
                &body,
            )?)),
        };

        let mut headers = args.headers;
        if let Some(id) = args.opaque_id {
            headers.insert(OPAQUE_ID_HEADER.to_string(), id);
        }

        Ok(Request {
            method,
            path,
            params,
            headers,
            body,
            timeout: args.timeout,
            ignore: args.ignore,
        })
    }

    /// Dispatch one call and return the transport's response unchanged.
    pub async fn call(&self, endpoint: &Endpoint, args: CallArgs) -> Result<Response> {
        let request = self.prepare(endpoint, args)?;
        log::debug!(
            "{} {} {} params={:?}",
            endpoint.name,
            request.method,
            request.path,
            request.params
        );
        Ok(self.transport.perform_request(request).await?)
    }

    /// Liveness check: `true` if the cluster answers `HEAD /` with success.
    ///
    /// Transport errors are reported as `false` rather than raised. This is
    /// the only call that swallows them.
    pub async fn ping(&self, args: CallArgs) -> bool {
        match self.call(&crate::api::core::PING, args).await {
            Ok(response) => response.is_success(),
            Err(e) => {
                log::debug!("ping failed: {}", e);
                false
            }
        }
    }
}
