//! Rate-limited HTTP GET dispatch with typed failure classification.
//!
//! Every provider client owns one [`Dispatcher`]. The dispatcher checks the
//! injected [`RequestQuota`] before touching the network, maps HTTP statuses
//! onto [`CatalogError`] variants, and decodes JSON bodies into the caller's
//! wire type.

use std::sync::Arc;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;
use crate::rate_limit::RequestQuota;

/// Query keys and values keep RFC 3986 unreserved characters; everything
/// else is escaped, so a space goes out as `%20` rather than `+`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Transport settings shared by both provider clients.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Fixed headers attached to every request.
    pub headers: Vec<(String, String)>,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: "barlie/0.1 (beer-discovery)".to_string(),
            headers: Vec::new(),
        }
    }
}

/// Issues GET requests against one provider's base URL.
#[derive(Debug)]
pub struct Dispatcher {
    client: Client,
    base_url: Url,
    quota: Arc<RequestQuota>,
}

impl Dispatcher {
    /// # Errors
    ///
    /// - [`CatalogError::InvalidUrl`] if `base_url` does not parse.
    /// - [`CatalogError::InvalidHeader`] if a configured header is not valid HTTP.
    /// - [`CatalogError::Network`] if the `reqwest::Client` cannot be built.
    pub fn new(
        base_url: &str,
        settings: &HttpSettings,
        quota: Arc<RequestQuota>,
    ) -> Result<Self, CatalogError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &settings.headers {
            let header_name =
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| CatalogError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| CatalogError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(settings.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        // A trailing slash keeps the base path when segments are appended.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| CatalogError::InvalidUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl {
                url: base_url.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            client,
            base_url,
            quota,
        })
    }

    #[must_use]
    pub fn quota(&self) -> &Arc<RequestQuota> {
        &self.quota
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `base_url/segment/...?key=value&...`.
    ///
    /// Each segment and query value is percent-encoded, so a segment may
    /// safely contain `/` or non-ASCII text. Spaces become `%20` in both.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidUrl`] if the base URL cannot take path
    /// segments.
    pub fn endpoint(
        &self,
        segments: &[&str],
        query: &[(&str, String)],
    ) -> Result<Url, CatalogError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| CatalogError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            let encoded = query
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        utf8_percent_encode(key, QUERY_COMPONENT),
                        utf8_percent_encode(value, QUERY_COMPONENT)
                    )
                })
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&encoded));
        }
        Ok(url)
    }

    /// Sends a GET to `url` and decodes the JSON body as `T`.
    ///
    /// The quota is checked first; a spent quota fails without sending
    /// anything. The request is counted against the quota only when it
    /// completes and decodes successfully.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::RateLimitExceeded`]: local quota spent, or HTTP 429.
    /// - [`CatalogError::Network`]: no response, or the body stream broke.
    /// - [`CatalogError::ServerError`]: any other non-2xx status.
    /// - [`CatalogError::NoData`]: 2xx with an empty body.
    /// - [`CatalogError::Decoding`]: body does not match `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, CatalogError> {
        let permit = self.quota.try_acquire()?;

        tracing::debug!(url = %url, context, "dispatching catalog request");
        let response = self.client.get(url.clone()).send().await.map_err(|e| {
            tracing::warn!(
                url = %url,
                error = %e,
                "catalog request failed before a response"
            );
            CatalogError::Network(e)
        })?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.trim().parse::<u64>().ok());
            tracing::warn!(url = %url, ?retry_after_secs, "catalog provider rate limited us");
            return Err(CatalogError::RateLimitExceeded { retry_after_secs });
        }

        if !status.is_success() {
            tracing::warn!(
                url = %url,
                status = status.as_u16(),
                "catalog provider returned an error status"
            );
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(CatalogError::NoData {
                url: url.to_string(),
            });
        }

        let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
            tracing::warn!(
                context,
                error = %e,
                "catalog response did not match the expected shape"
            );
            CatalogError::Decoding {
                context: context.to_owned(),
                source: e,
            }
        })?;

        permit.commit();
        Ok(parsed)
    }
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
