//! Common types for the modscope GraphQL client
//!
//! This crate holds everything that does not depend on the concrete
//! moderation schema: the HTTP abstraction, GraphQL request/response mapping,
//! the error taxonomy and the in-memory query cache.

#![warn(missing_docs)]
pub use smol_str;
pub use url;

pub mod cache;
pub mod error;
pub mod graphql;
/// HTTP client abstraction used by modscope crates.
pub mod http_client;

pub use cache::{CacheError, CacheKey, QueryCache};
pub use error::{ClientError, ClientResult};
pub use graphql::{GraphqlRequest, GraphqlResp, OperationKind};
pub use http_client::HttpClient;
