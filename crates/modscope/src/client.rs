//! Shared GraphQL context: one transport, one endpoint, one cache.

use modscope_common::cache::{OutputOf, QueryCache};
use modscope_common::error::ClientResult;
use modscope_common::graphql::{CallOptions, GraphqlExt, GraphqlRequest};
use modscope_common::http_client::HttpClient;
use url::Url;

use crate::config::ClientConfig;

/// How a read treats the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPolicy {
    /// Serve a cached result when there is one, otherwise fetch and store.
    #[default]
    CacheFirst,
    /// Always fetch, then overwrite the cached result.
    NetworkOnly,
}

/// GraphQL client context shared by every data-access unit.
///
/// Build it once and hand out `Arc<ModClient<C>>`:
///
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> miette::Result<()> {
/// use std::sync::Arc;
/// use modscope::client::ModClient;
/// use modscope::config::ClientConfig;
/// use modscope::moderation::Profanity;
///
/// let config = ClientConfig::from_env()?;
/// let client = Arc::new(ModClient::from_config(reqwest::Client::new(), &config));
/// let profanity = Profanity::load(client.clone()).await;
/// println!("{} words", profanity.profane_words().len());
/// # Ok(())
/// # }
/// ```
pub struct ModClient<C: HttpClient> {
    transport: C,
    endpoint: Url,
    options: CallOptions,
    cache: QueryCache,
}

impl<C: HttpClient> ModClient<C> {
    /// Create a client for `endpoint` with an empty cache.
    pub fn new(transport: C, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
            options: CallOptions::default(),
            cache: QueryCache::new(),
        }
    }

    /// Create a client from a [`ClientConfig`].
    pub fn from_config(transport: C, config: &ClientConfig) -> Self {
        Self {
            transport,
            endpoint: config.endpoint.clone(),
            options: CallOptions {
                extra_headers: config.extra_headers.clone(),
            },
            cache: QueryCache::new(),
        }
    }

    /// GraphQL endpoint this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &C {
        &self.transport
    }

    /// The shared result cache.
    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Send a request straight to the network, bypassing the cache entirely.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(operation = R::OPERATION_NAME)))]
    pub async fn send<R: GraphqlRequest>(&self, request: &R) -> ClientResult<OutputOf<R>> {
        let response = self
            .transport
            .graphql(self.endpoint.clone())
            .with_options(self.options.clone())
            .send(request)
            .await?;
        Ok(response.into_output()?)
    }

    /// Run a read under the given fetch policy.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, request), fields(operation = R::OPERATION_NAME)))]
    pub async fn query<R: GraphqlRequest>(
        &self,
        request: &R,
        policy: FetchPolicy,
    ) -> ClientResult<OutputOf<R>> {
        if policy == FetchPolicy::CacheFirst {
            if let Some(hit) = self.cache.read(request).await {
                #[cfg(feature = "tracing")]
                tracing::trace!("cache hit");
                return Ok(hit);
            }
        }

        let output = self.send(request).await?;
        if let Err(_e) = self.cache.write(request, &output).await {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_e, "failed to cache query result");
        }
        Ok(output)
    }

    /// Run a write. Mutation results are never cached.
    pub async fn mutate<R: GraphqlRequest>(&self, request: &R) -> ClientResult<OutputOf<R>> {
        self.send(request).await
    }

    /// Run a write and, if it succeeds, patch the cached result of `target`.
    ///
    /// `update` sees the cached output of `target` and the mutation output;
    /// it runs inside a single cache write and only when `target` has been
    /// fetched before. Returns the mutation output either way.
    pub async fn mutate_with<R, T, F>(
        &self,
        request: &R,
        target: &T,
        update: F,
    ) -> ClientResult<OutputOf<R>>
    where
        R: GraphqlRequest,
        T: GraphqlRequest,
        F: FnOnce(&mut OutputOf<T>, &OutputOf<R>),
    {
        let output = self.mutate(request).await?;
        match self
            .cache
            .update(target, |cached| update(cached, &output))
            .await
        {
            Ok(_patched) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    target_operation = T::OPERATION_NAME,
                    patched = _patched,
                    "applied mutation to cache"
                );
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %_e, "failed to patch cached result");
            }
        }
        Ok(output)
    }
}

impl<C: HttpClient> std::fmt::Debug for ModClient<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
