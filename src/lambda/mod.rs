// src/lambda/mod.rs

//! AWS Lambda handler for the index custom resource.
//!
//! On `Create` and `Update` the handler makes sure the configured index
//! exists, creating it with the supplied body (or a k-NN vector mapping)
//! when it does not. `Delete` leaves the index in place. Requests to
//! `*.aoss.amazonaws.com` and `*.es.amazonaws.com` hosts are SigV4-signed.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{info, instrument};

use crate::client::OpenSearch;
use crate::config::load_lambda_config;
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::url::parse_endpoint;

/// Lifecycle phase of a custom resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
}

/// Properties the resource is declared with.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default, alias = "AOSSHost")]
    pub host: Option<String>,

    #[serde(default, alias = "AOSSIndexName")]
    pub index_name: Option<String>,

    /// Settings and mappings for a new index
    #[serde(default)]
    pub index_body: Option<Value>,
}

impl ResourceProperties {
    fn host(&self) -> Result<&str> {
        required(self.host.as_deref(), "Host")
    }

    fn index_name(&self) -> Result<&str> {
        required(self.index_name.as_deref(), "IndexName")
    }
}

fn required<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::validation(format!("{name} not provided in resource properties")))
}

/// Custom resource invocation payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,

    #[serde(default)]
    pub resource_properties: ResourceProperties,

    #[serde(default)]
    pub physical_resource_id: Option<String>,
}

/// Custom resource response payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_resource_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Mapping for a 1024-dimension HNSW vector index with text metadata.
pub fn default_index_body() -> Value {
    json!({
        "settings": {
            "index.knn": true
        },
        "mappings": {
            "properties": {
                "vector": {
                    "type": "knn_vector",
                    "dimension": 1024,
                    "method": {
                        "name": "hnsw",
                        "space_type": "l2",
                        "engine": "faiss",
                        "parameters": {
                            "ef_construction": 512,
                            "m": 16
                        }
                    }
                },
                "text": { "type": "text" },
                "id": { "type": "text" },
                "text-metadata": { "type": "text" },
                "x-amz-bedrock-kb-source-uri": { "type": "text" }
            }
        }
    })
}

/// AWS signing service for a managed endpoint host, if it is one.
fn signing_service(host: &str) -> Option<&'static str> {
    let url = parse_endpoint(host).ok()?;
    let host = url.host_str()?;
    if host.ends_with(".aoss.amazonaws.com") {
        Some("aoss")
    } else if host.ends_with(".es.amazonaws.com") {
        Some("es")
    } else {
        None
    }
}

/// Main Lambda handler function.
#[instrument(skip(event), fields(request_id = %event.context.request_id))]
pub async fn handler(
    event: LambdaEvent<CustomResourceEvent>,
) -> std::result::Result<CustomResourceResponse, LambdaError> {
    let (event, _context) = event.into_parts();
    let config = load_lambda_config().await?;
    Ok(handle_event(event, config).await?)
}

/// Handle one event against the host named in its properties.
#[instrument(skip(event, config), fields(request_type = ?event.request_type))]
pub async fn handle_event(event: CustomResourceEvent, mut config: Config) -> Result<CustomResourceResponse> {
    if event.request_type == RequestType::Delete {
        info!("Delete requested; index is kept");
        return Ok(CustomResourceResponse {
            physical_resource_id: event.physical_resource_id,
            data: None,
        });
    }

    let props = &event.resource_properties;
    let host = props.host()?;
    let index = props.index_name()?;

    config.transport.endpoint = host.to_string();
    if config.transport.aws_service.is_none() {
        config.transport.aws_service = signing_service(host).map(str::to_string);
    }
    let client = OpenSearch::connect(&config).await?;

    let response = if client.indices().exists(index).await? {
        info!(index, "Index already exists");
        Value::Null
    } else {
        let body = props.index_body.clone().unwrap_or_else(default_index_body);
        let created = client.indices().create(index, Some(body)).await?;
        info!(index, "Created index");
        created
    };

    Ok(CustomResourceResponse {
        physical_resource_id: Some(
            event
                .physical_resource_id
                .clone()
                .unwrap_or_else(|| index.to_string()),
        ),
        data: Some(json!({ "response": response })),
    })
}
