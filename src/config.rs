// src/config.rs

//! Configuration loading for the Lambda environment.
//!
//! The config file lives in S3 when `CONFIG_S3_BUCKET` is set; otherwise the
//! defaults are used. `OPENSEARCH_*` environment variables are applied last
//! in both cases.

use aws_sdk_s3::Client;

use crate::error::{AppError, Result};
use crate::models::Config;

/// Name of the config object under the prefix.
pub const CONFIG_FILE: &str = "config.toml";

/// Config loader backed by an S3 bucket.
pub struct S3ConfigLoader {
    client: Client,
    bucket: String,
    prefix: String,
}

impl S3ConfigLoader {
    pub fn new(client: Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    /// Build a loader from `CONFIG_S3_BUCKET` and `CONFIG_S3_PREFIX`.
    ///
    /// Returns `None` when no bucket is configured.
    pub async fn from_env() -> Option<Self> {
        let bucket = std::env::var("CONFIG_S3_BUCKET").ok()?;
        let prefix = std::env::var("CONFIG_S3_PREFIX").unwrap_or_default();
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Some(Self::new(Client::new(&sdk_config), bucket, prefix))
    }

    /// Read an object, or `None` if the key does not exist.
    async fn read_bytes_optional(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let result = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await;

        match result {
            Ok(output) => {
                let bytes = output
                    .body
                    .collect()
                    .await
                    .map_err(|e| AppError::S3(e.to_string()))?;
                Ok(Some(bytes.into_bytes().to_vec()))
            }
            Err(err) => {
                let service_err = err.into_service_error();
                if service_err.is_no_such_key() {
                    Ok(None)
                } else {
                    Err(AppError::S3(service_err.to_string()))
                }
            }
        }
    }

    /// Fetch and parse `config.toml`. A missing object is an error.
    pub async fn load_config(&self) -> Result<Config> {
        let key = object_key(&self.prefix, CONFIG_FILE);
        log::info!("Loading config from s3://{}/{}", self.bucket, key);

        let bytes = self
            .read_bytes_optional(&key)
            .await?
            .ok_or_else(|| AppError::config(format!("Config file not found in S3: {key}")))?;
        let text = String::from_utf8(bytes)
            .map_err(|e| AppError::config(format!("Config file {key} is not valid UTF-8: {e}")))?;
        Config::parse(&text)
    }
}

/// Join a key prefix and file name, tolerating empty or slash-terminated prefixes.
fn object_key(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_matches('/');
    if prefix.is_empty() {
        file_name.to_string()
    } else {
        format!("{prefix}/{file_name}")
    }
}

/// Resolve the configuration for a Lambda invocation.
pub async fn load_lambda_config() -> Result<Config> {
    let mut config = match S3ConfigLoader::from_env().await {
        Some(loader) => loader.load_config().await?,
        None => Config::default(),
    };
    config.apply_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_key() {
        assert_eq!(object_key("", CONFIG_FILE), "config.toml");
        assert_eq!(object_key("osdispatch/", CONFIG_FILE), "osdispatch/config.toml");
        assert_eq!(object_key("/a/b", "x.toml"), "a/b/x.toml");
    }
}
