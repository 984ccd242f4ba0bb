//! Request bodies as supplied by callers.

use serde_json::Value;

use crate::transport::{Serializer, TransportError};

/// One entry of a bulk or multi-request body.
#[derive(Debug, Clone, PartialEq)]
pub enum BulkPart {
    /// Already serialized text, sent verbatim
    Raw(String),
    /// Structured value, serialized by the transport's serializer
    Json(Value),
}

impl From<Value> for BulkPart {
    fn from(value: Value) -> Self {
        BulkPart::Json(value)
    }
}

impl From<String> for BulkPart {
    fn from(value: String) -> Self {
        BulkPart::Raw(value)
    }
}

impl From<&str> for BulkPart {
    fn from(value: &str) -> Self {
        BulkPart::Raw(value.to_string())
    }
}

/// Caller-supplied request body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Json(Value),
    Text(String),
    Bulk(Vec<BulkPart>),
}

impl Body {
    /// True when the body carries no content.
    pub fn is_empty(&self) -> bool {
        match self {
            Body::Json(Value::Null) => true,
            Body::Json(Value::Array(items)) => items.is_empty(),
            Body::Json(Value::Object(map)) => map.is_empty(),
            Body::Json(_) => false,
            Body::Text(text) => text.is_empty(),
            Body::Bulk(parts) => parts.is_empty(),
        }
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        Body::Json(value)
    }
}

impl From<String> for Body {
    fn from(value: String) -> Self {
        Body::Text(value)
    }
}

impl From<Vec<BulkPart>> for Body {
    fn from(parts: Vec<BulkPart>) -> Self {
        Body::Bulk(parts)
    }
}

/// Serialize a bulk or multi-request body into newline-delimited text.
///
/// Raw parts pass through unchanged; structured parts go through the
/// serializer. A JSON array is read as a list of structured parts. The result
/// always ends with a newline.
pub fn bulk_body(serializer: &dyn Serializer, body: &Body) -> Result<String, TransportError> {
    let mut out = match body {
        Body::Text(text) => text.clone(),
        Body::Json(Value::Array(items)) => {
            let mut lines = Vec::with_capacity(items.len());
            for item in items {
                lines.push(serializer.dumps(item)?);
            }
            lines.join("\n")
        }
        Body::Json(value) => serializer.dumps(value)?,
        Body::Bulk(parts) => {
            let mut lines = Vec::with_capacity(parts.len());
            for part in parts {
                match part {
                    BulkPart::Raw(text) => lines.push(text.clone()),
                    BulkPart::Json(value) => lines.push(serializer.dumps(value)?),
                }
            }
            lines.join("\n")
        }
    };

    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::JsonSerializer;
    use serde_json::json;

    #[test]
    fn test_bulk_body_mixed_parts() {
        let body = Body::Bulk(vec![
            BulkPart::Json(json!({"index": {"_id": "1", "_index": "orders"}})),
            BulkPart::Raw(r#"{"sku":"A-1"}"#.to_string()),
        ]);

        let out = bulk_body(&JsonSerializer, &body).unwrap();
        assert_eq!(
            out,
            "{\"index\":{\"_id\":\"1\",\"_index\":\"orders\"}}\n{\"sku\":\"A-1\"}\n"
        );
    }

    #[test]
    fn test_bulk_body_raw_part_untouched() {
        let raw = r#"{ "delete" : { "_id" : "7" } }"#;
        let body = Body::Bulk(vec![BulkPart::from(raw)]);
        let out = bulk_body(&JsonSerializer, &body).unwrap();
        assert_eq!(out, format!("{raw}\n"));
    }

    #[test]
    fn test_bulk_body_is_deterministic() {
        let part = json!({"b": 2, "a": [1, 2], "c": {"z": true, "y": null}});
        let body = Body::Bulk(vec![BulkPart::Json(part.clone()), BulkPart::Json(part)]);
        let out = bulk_body(&JsonSerializer, &body).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
        assert_eq!(out, bulk_body(&JsonSerializer, &body).unwrap());
    }

    #[test]
    fn test_bulk_body_text_gets_trailing_newline() {
        let out = bulk_body(&JsonSerializer, &Body::Text("{}\n{}".to_string())).unwrap();
        assert_eq!(out, "{}\n{}\n");

        let already = bulk_body(&JsonSerializer, &Body::Text("{}\n".to_string())).unwrap();
        assert_eq!(already, "{}\n");
    }

    #[test]
    fn test_bulk_body_json_array_lines() {
        let body = Body::Json(json!([{"index": {}}, {"field": 1}]));
        let out = bulk_body(&JsonSerializer, &body).unwrap();
        assert_eq!(out, "{\"index\":{}}\n{\"field\":1}\n");
    }

    #[test]
    fn test_body_is_empty() {
        assert!(Body::Json(Value::Null).is_empty());
        assert!(Body::Json(json!({})).is_empty());
        assert!(Body::Text(String::new()).is_empty());
        assert!(Body::Bulk(vec![]).is_empty());
        assert!(!Body::Json(json!({"query": {}})).is_empty());
    }
}
