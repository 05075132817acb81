//! Endpoint configuration for [`ModClient`](crate::client::ModClient) and the
//! healthcare reviews collaborator.

use http::{HeaderName, HeaderValue};
use miette::Diagnostic;
use url::Url;

/// Primary GraphQL endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

/// Endpoint of the separate healthcare reviews service.
pub const DEFAULT_REVIEWS_ENDPOINT: &str = "https://api3.defendercf.online/graphql";

/// Environment variable overriding [`DEFAULT_ENDPOINT`].
pub const ENDPOINT_ENV: &str = "MODSCOPE_ENDPOINT";

/// Environment variable overriding [`DEFAULT_REVIEWS_ENDPOINT`].
pub const REVIEWS_ENDPOINT_ENV: &str = "MODSCOPE_REVIEWS_ENDPOINT";

/// Errors building a [`ClientConfig`].
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConfigError {
    /// An endpoint was not a valid absolute URL
    #[error("invalid endpoint `{value}` from {source_name}: {error}")]
    #[diagnostic(
        code(modscope::config::endpoint),
        help("endpoints must be absolute URLs, e.g. http://localhost:4000/graphql")
    )]
    Endpoint {
        /// Where the value came from (env var or flag name)
        source_name: &'static str,
        /// The rejected value
        value: String,
        /// Parser error
        #[source]
        error: url::ParseError,
    },
}

/// Where to send requests and what to attach to them.
#[derive(Debug, Clone, bon::Builder)]
pub struct ClientConfig {
    /// GraphQL endpoint for every operation in [`modscope_api`]
    #[builder(default = default_endpoint())]
    pub endpoint: Url,
    /// Endpoint for the healthcare reviews collaborator
    #[builder(default = default_reviews_endpoint())]
    pub reviews_endpoint: Url,
    /// Headers added to every GraphQL request
    #[builder(default)]
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ClientConfig {
    /// Defaults, overridden by `MODSCOPE_ENDPOINT` and
    /// `MODSCOPE_REVIEWS_ENDPOINT` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENDPOINT_ENV) {
            config.endpoint = parse_endpoint(ENDPOINT_ENV, &value)?;
        }
        if let Some(value) = lookup(REVIEWS_ENDPOINT_ENV) {
            config.reviews_endpoint = parse_endpoint(REVIEWS_ENDPOINT_ENV, &value)?;
        }
        Ok(config)
    }
}

/// Parse an endpoint, naming its origin in the error.
pub fn parse_endpoint(source_name: &'static str, value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|error| ConfigError::Endpoint {
        source_name,
        value: value.to_string(),
        error,
    })
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("valid url")
}

fn default_reviews_endpoint() -> Url {
    Url::parse(DEFAULT_REVIEWS_ENDPOINT).expect("valid url")
}
