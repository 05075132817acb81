//! # modscope
//!
//! Typed client for browsing content-moderation data served over GraphQL:
//! categories, profane words, synonym suggestions, sentiment scores and
//! generated reports.
//!
//! ## Layout
//!
//! - [`modscope_common`] (re-exported at the root): the `HttpClient`
//!   abstraction, GraphQL request/response mapping, errors and the query
//!   cache.
//! - [`api`]: one typed request per GraphQL operation plus the entities
//!   they return.
//! - [`client::ModClient`]: the shared context. Build one, wrap it in an
//!   `Arc`, and pass it to every unit.
//! - [`query`]: observable state handles for reads and writes.
//! - [`moderation`]: the data-access units.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use modscope::client::ModClient;
//! use modscope::config::ClientConfig;
//! use modscope::moderation::{Profanity, TextAnalysis};
//!
//! #[tokio::main]
//! async fn main() -> miette::Result<()> {
//!     let config = ClientConfig::from_env()?;
//!     let client = Arc::new(ModClient::from_config(reqwest::Client::new(), &config));
//!
//!     let profanity = Profanity::load(client.clone()).await;
//!     profanity.add_profane_word("darn", Some(1), Some(false)).await;
//!     println!("{} profane words", profanity.profane_words().len());
//!
//!     let analysis = TextAnalysis::new(client);
//!     for word in analysis.check_text("well darn it").await {
//!         println!("flagged: {}", word.word);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Shared GraphQL context and fetch policies
pub mod client;

/// Endpoint configuration
pub mod config;

pub mod moderation;

pub mod query;

/// Re-export the typed operations crate
pub use modscope_api as api;
pub use modscope_common::*;
