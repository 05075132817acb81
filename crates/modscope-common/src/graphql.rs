//! # Stateless GraphQL utilities and request/response mapping
//!
//! Mapping overview:
//! - Every operation is a `POST` of `{query, operationName, variables}` to a
//!   single endpoint.
//! - 2xx and 400: the body is a `{data, errors}` envelope and flows through to
//!   a typed [`Response`]. A non-empty `errors` array is surfaced as
//!   [`GraphqlError::Server`]; a missing or `null` `data` decodes as the
//!   operation's default (empty) output.
//! - Any other status: [`HttpError`] with the body attached.

use crate::error::{ClientResult, DecodeError, HttpError, ServerError, ServerErrors, TransportError};
use crate::http_client::HttpClient;
use bytes::Bytes;
use http::{
    HeaderName, HeaderValue, Request, StatusCode,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use url::Url;

/// MIME type used for both directions.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Error type for encoding GraphQL requests
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum EncodeError {
    /// Failed to serialize JSON body
    #[error("Failed to serialize JSON: {0}")]
    Json(
        #[from]
        #[source]
        serde_json::Error,
    ),
}

/// GraphQL operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Read-only query
    Query,
    /// Mutation (write)
    Mutation,
}

impl OperationKind {
    /// Keyword used in the document for this operation type
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
        }
    }
}

/// Trait for GraphQL request types (queries and mutations)
///
/// This trait provides metadata about an operation: its name, its type and
/// the document sent over the wire, plus the associated response marker.
///
/// The trait is implemented on the operation's variables type itself, so
/// serializing the request yields the `variables` object.
pub trait GraphqlRequest: Serialize {
    /// Operation name as it appears in the document (e.g. `GetAllCategories`)
    const OPERATION_NAME: &'static str;

    /// Query or mutation
    const KIND: OperationKind;

    /// Full GraphQL document for this operation
    const DOCUMENT: &'static str;

    /// Response marker carrying the output type
    type Response: GraphqlResp;

    /// Encode the request body.
    ///
    /// Default implementation serializes `{query, operationName, variables}` as JSON.
    fn encode_body(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&RequestBody {
            query: Self::DOCUMENT,
            operation_name: Self::OPERATION_NAME,
            variables: self,
        })?)
    }

    /// Variables as a JSON value, used for cache keys.
    fn variables(&self) -> Result<serde_json::Value, EncodeError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Trait for GraphQL response types
///
/// It mirrors the operation name and carries the shape of `data`.
pub trait GraphqlResp {
    /// Operation name as it appears in the document
    const OPERATION_NAME: &'static str;

    /// Shape of the `data` object. `Default` is the "nothing came back" value.
    type Output: Serialize + DeserializeOwned + Default + Clone + Send + Sync + 'static;

    /// Decode the `data` member of the response envelope.
    ///
    /// Default implementation deserializes from JSON and treats an absent or
    /// `null` `data` as [`Default::default`].
    fn decode_output(body: &[u8]) -> Result<Self::Output, DecodeError> {
        let envelope: DataEnvelope<Self::Output> = serde_json::from_slice(body)?;
        Ok(envelope.data.unwrap_or_default())
    }
}

/// Wire body of a GraphQL request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestBody<'a, V: Serialize + ?Sized> {
    /// Document text
    pub query: &'a str,
    /// Name of the operation to run within the document
    pub operation_name: &'a str,
    /// Variables object
    pub variables: &'a V,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    #[serde(default)]
    data: Option<T>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    errors: Option<Vec<ServerError>>,
}

/// Pull the `errors` array out of a response envelope, if it has one.
///
/// Exposed so collaborators that hand-roll their requests can apply the same
/// check before touching `data`.
pub fn server_errors(body: &[u8], operation: &'static str) -> Result<Option<ServerErrors>, DecodeError> {
    let envelope: ErrorEnvelope = serde_json::from_slice(body)?;
    Ok(envelope
        .errors
        .filter(|errors| !errors.is_empty())
        .map(|errors| ServerErrors { operation, errors }))
}

/// Per-request options for GraphQL calls.
#[derive(Debug, Default, Clone)]
pub struct CallOptions {
    /// Extra headers to attach to this request.
    pub extra_headers: Vec<(HeaderName, HeaderValue)>,
}

/// Extension for stateless GraphQL calls on any `HttpClient`.
///
/// Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use modscope_common::graphql::GraphqlExt;
///
/// let http = reqwest::Client::new();
/// let endpoint = url::Url::parse("http://localhost:4000/graphql")?;
/// // let resp = http.graphql(endpoint).send(&request).await?;
/// # Ok(())
/// # }
/// ```
pub trait GraphqlExt: HttpClient {
    /// Start building a GraphQL call for the given endpoint.
    fn graphql<'a>(&'a self, endpoint: Url) -> GraphqlCall<'a, Self>
    where
        Self: Sized,
    {
        GraphqlCall {
            client: self,
            endpoint,
            opts: CallOptions::default(),
        }
    }
}

impl<T: HttpClient> GraphqlExt for T {}

/// Nicer alias for the response of a request type
pub type GraphqlResponse<R> = Response<<R as GraphqlRequest>::Response>;

/// Stateless GraphQL call builder.
pub struct GraphqlCall<'a, C: HttpClient> {
    pub(crate) client: &'a C,
    pub(crate) endpoint: Url,
    pub(crate) opts: CallOptions,
}

impl<'a, C: HttpClient> GraphqlCall<'a, C> {
    /// Add an extra header.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.opts.extra_headers.push((name, value));
        self
    }
    /// Replace the builder's options entirely.
    pub fn with_options(mut self, opts: CallOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Send the given typed request and return a response wrapper.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(operation = R::OPERATION_NAME)))]
    pub async fn send<R>(self, request: &R) -> ClientResult<GraphqlResponse<R>>
    where
        R: GraphqlRequest,
    {
        let http_request = build_http_request(&self.endpoint, request, &self.opts)?;

        let http_response = self
            .client
            .send_http(http_request)
            .await
            .map_err(TransportError::classify)?;

        process_response(http_response)
    }
}

/// Process the HTTP response from the server into a typed response statelessly.
///
/// Exposed to make things more easily pluggable
#[inline]
pub fn process_response<Resp>(http_response: http::Response<Vec<u8>>) -> ClientResult<Response<Resp>>
where
    Resp: GraphqlResp,
{
    let status = http_response.status();
    let buffer = Bytes::from(http_response.into_body());

    if !status.is_success() && status != StatusCode::BAD_REQUEST {
        return Err(HttpError {
            status,
            body: Some(buffer),
        }
        .into());
    }

    Ok(Response::new(buffer, status))
}

/// Build an HTTP request for a GraphQL call given the endpoint and options
pub fn build_http_request<R>(
    endpoint: &Url,
    req: &R,
    opts: &CallOptions,
) -> core::result::Result<Request<Vec<u8>>, TransportError>
where
    R: GraphqlRequest,
{
    let mut builder = Request::builder()
        .method(http::Method::POST)
        .uri(endpoint.as_str())
        .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(ACCEPT, JSON_CONTENT_TYPE);

    for (name, value) in &opts.extra_headers {
        builder = builder.header(name, value);
    }

    let body = req
        .encode_body()
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?;

    builder
        .body(body)
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))
}

/// GraphQL response wrapper that owns the response buffer
///
/// Generic over the response marker type (e.g., `GetReportsResponse`), not the request.
pub struct Response<Resp>
where
    Resp: GraphqlResp,
{
    _marker: PhantomData<fn() -> Resp>,
    buffer: Bytes,
    status: StatusCode,
}

impl<R> Response<R>
where
    R: GraphqlResp,
{
    /// Create a new response from a buffer and status code
    pub fn new(buffer: Bytes, status: StatusCode) -> Self {
        Self {
            buffer,
            status,
            _marker: PhantomData,
        }
    }

    /// Get the HTTP status code
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Get the raw buffer
    pub fn buffer(&self) -> &Bytes {
        &self.buffer
    }

    /// Parse the response into the operation's output
    pub fn parse(&self) -> Result<R::Output, GraphqlError> {
        if let Some(errors) = server_errors(&self.buffer, R::OPERATION_NAME)? {
            return Err(GraphqlError::Server(errors));
        }
        // A 400 without an errors array is not a GraphQL envelope at all
        if !self.status.is_success() {
            return Err(GraphqlError::Decode(DecodeError::MissingField("errors")));
        }
        Ok(R::decode_output(&self.buffer)?)
    }

    /// Parse the response, consuming the wrapper
    pub fn into_output(self) -> Result<R::Output, GraphqlError> {
        self.parse()
    }
}

/// Errors found in a GraphQL response body
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum GraphqlError {
    /// The `errors` array was non-empty
    #[error("GraphQL error: {0}")]
    #[diagnostic(code(modscope_common::graphql::server))]
    Server(ServerErrors),

    /// Failed to decode the response body
    #[error("Failed to decode response: {0}")]
    #[diagnostic(code(modscope_common::graphql::decode))]
    Decode(#[from] DecodeError),
}

impl From<GraphqlError> for crate::error::ClientError {
    fn from(value: GraphqlError) -> Self {
        match value {
            GraphqlError::Server(errors) => Self::Graphql(errors),
            GraphqlError::Decode(e) => Self::Decode(e),
        }
    }
}
