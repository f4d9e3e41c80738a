use thiserror::Error;

/// Errors returned by the catalog dispatcher and provider clients.
///
/// None of these are retried by this crate; callers decide whether to
/// re-issue the operation.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request URL could not be built. Nothing was sent.
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configured request header name or value is not valid HTTP.
    #[error("invalid request header {name}: {reason}")]
    InvalidHeader { name: String, reason: String },

    /// The provider answered with a success status but an empty body.
    #[error("no data received from {url}")]
    NoData { url: String },

    /// The body did not match the expected response shape.
    #[error("failed to decode response for {context}: {source}")]
    Decoding {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Transport failure: DNS, connect, TLS, timeout, or a broken body stream.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Either the local request quota is spent or the provider replied 429.
    #[error("rate limit exceeded, please try again later")]
    RateLimitExceeded {
        /// Seconds until the quota window resets or the provider's
        /// `Retry-After`, when known.
        retry_after_secs: Option<u64>,
    },

    /// Any other non-2xx status.
    #[error("server error: {status}")]
    ServerError { status: u16, url: String },

    /// The provider envelope reported `success: false`.
    #[error("catalog API error: {0}")]
    Api(String),
}

impl CatalogError {
    /// `true` for errors produced by a rate limit, local or remote.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, CatalogError::RateLimitExceeded { .. })
    }
}
