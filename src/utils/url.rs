// src/utils/url.rs

//! URL manipulation utilities.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use crate::error::{AppError, Result};

/// Characters left unescaped in a path segment.
///
/// `,` separates resource names and `*` is a wildcard in index patterns, so
/// both must reach the server verbatim.
const SEGMENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b',')
    .remove(b'*');

/// Percent-encode a single path segment.
///
/// # Examples
/// ```
/// use osdispatch::utils::url::encode_segment;
///
/// assert_eq!(encode_segment("logs-*,metrics"), "logs-*,metrics");
/// assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
/// ```
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT_ENCODE_SET).to_string()
}

/// Build an absolute request URL from a base endpoint and a request path.
///
/// A path prefix on the base (`https://host/production`) is preserved.
pub fn join_path(base: &Url, path: &str) -> Url {
    let prefix = base.path().trim_end_matches('/');
    let mut url = base.clone();
    url.set_path(&format!("{prefix}{path}"));
    url.set_query(None);
    url
}

/// Parse an endpoint string, adding `https://` when no scheme is given.
pub fn parse_endpoint(endpoint: &str) -> Result<Url> {
    let trimmed = endpoint.trim();
    if trimmed.is_empty() {
        return Err(AppError::config("endpoint is empty"));
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };

    let url = Url::parse(&with_scheme)?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::config(format!(
            "{endpoint}: scheme must be http or https"
        )));
    }
    Ok(url)
}
