//! AWS SigV4 signing for managed domains (`es`) and serverless collections (`aoss`).

use std::time::SystemTime;

use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{
    PayloadChecksumKind, SignableBody, SignableRequest, SigningParams, SigningSettings, sign,
};
use aws_sigv4::sign::v4;
use url::Url;

use super::TransportError;
use crate::error::{AppError, Result};
use crate::models::TransportConfig;

/// Signs requests with credentials from an AWS provider.
#[derive(Debug, Clone)]
pub struct SigV4Signer {
    credentials: SharedCredentialsProvider,
    region: String,
    service: String,
}

impl SigV4Signer {
    pub fn new(
        credentials: SharedCredentialsProvider,
        region: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            region: region.into(),
            service: service.into(),
        }
    }

    /// Build a signer when `aws_service` is configured, `None` otherwise.
    ///
    /// Credentials come from the default AWS provider chain, as does the
    /// region unless `aws_region` is set.
    pub async fn from_config(config: &TransportConfig) -> Result<Option<Self>> {
        let Some(service) = &config.aws_service else {
            return Ok(None);
        };

        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let credentials = sdk_config
            .credentials_provider()
            .ok_or_else(|| AppError::config("no AWS credentials available for request signing"))?;
        let region = config
            .aws_region
            .clone()
            .or_else(|| sdk_config.region().map(ToString::to_string))
            .ok_or_else(|| AppError::config("no AWS region available for request signing"))?;

        log::debug!("Signing requests for {} in {}", service, region);
        Ok(Some(Self::new(credentials, region, service.clone())))
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    /// Authentication headers for one request.
    ///
    /// `body` must be the exact bytes sent; its hash is part of the signature
    /// and is also returned as `x-amz-content-sha256`.
    pub async fn sign(
        &self,
        method: &str,
        url: &Url,
        body: &[u8],
    ) -> std::result::Result<Vec<(String, String)>, TransportError> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(signing_error)?;
        let identity = credentials.into();

        let mut settings = SigningSettings::default();
        settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;

        let params: SigningParams<'_> = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(&self.service)
            .time(SystemTime::now())
            .settings(settings)
            .build()
            .map_err(signing_error)?
            .into();

        let signable = SignableRequest::new(
            method,
            url.as_str(),
            std::iter::empty::<(&str, &str)>(),
            SignableBody::Bytes(body),
        )
        .map_err(signing_error)?;

        let (instructions, _signature) = sign(signable, &params).map_err(signing_error)?.into_parts();
        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

fn signing_error(err: impl std::fmt::Display) -> TransportError {
    TransportError::Signing(err.to_string())
}
