//! Observable state handles for reads and writes.
//!
//! Every read a unit exposes, eager or deferred, is a [`Query`]: it holds the
//! latest parameters, executes only when triggered, and publishes each
//! settled result through a `watch` channel. Writes use [`Mutation`], which
//! tracks the loading flag and the last error of one operation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use modscope_common::cache::OutputOf;
use modscope_common::error::ClientError;
use modscope_common::graphql::GraphqlRequest;
use modscope_common::http_client::HttpClient;
use tokio::sync::watch;

use crate::client::{FetchPolicy, ModClient};

/// Where an operation is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Never executed
    #[default]
    Idle,
    /// A request is in flight
    Loading,
    /// The last request succeeded
    Ready,
    /// The last request failed
    Failed,
}

/// Snapshot of a read.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    /// Lifecycle phase
    pub phase: Phase,
    /// Latest data. Kept while a re-run is loading, cleared by a failure.
    pub data: Option<T>,
    /// Error of the last settled run, if it failed
    pub error: Option<Arc<ClientError>>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    fn ready(data: T) -> Self {
        Self {
            phase: Phase::Ready,
            data: Some(data),
            error: None,
        }
    }

    fn failed(error: ClientError) -> Self {
        Self {
            phase: Phase::Failed,
            data: None,
            error: Some(Arc::new(error)),
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

/// A parameterized read bound to one operation.
///
/// Nothing is sent until [`trigger`](Self::trigger) supplies parameters.
/// Each trigger uses exactly the parameters it was given and becomes the
/// latest; if triggers overlap, the newest one owns the published state and
/// the older result is dropped.
pub struct Query<R, C>
where
    R: GraphqlRequest,
    C: HttpClient,
{
    client: Arc<ModClient<C>>,
    params: watch::Sender<Option<R>>,
    state: watch::Sender<QueryState<OutputOf<R>>>,
    generation: AtomicU64,
}

impl<R, C> Query<R, C>
where
    R: GraphqlRequest + Clone,
    C: HttpClient,
{
    /// Create an idle query.
    pub fn new(client: Arc<ModClient<C>>) -> Self {
        Self {
            client,
            params: watch::Sender::new(None),
            state: watch::Sender::new(QueryState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Latest parameters, if any were supplied.
    pub fn params(&self) -> Option<R> {
        self.params.borrow().clone()
    }

    /// Replace the parameters without executing.
    pub fn set_params(&self, params: R) {
        self.params.send_replace(Some(params));
    }

    /// Current snapshot.
    pub fn state(&self) -> QueryState<OutputOf<R>> {
        self.state.borrow().clone()
    }

    /// Latest data, if the query has settled successfully.
    pub fn data(&self) -> Option<OutputOf<R>> {
        self.state.borrow().data.clone()
    }

    /// Watch every state change.
    pub fn subscribe(&self) -> watch::Receiver<QueryState<OutputOf<R>>> {
        self.state.subscribe()
    }

    /// Execute with `params`, serving a cached result when one exists.
    ///
    /// Suspends until the request settles and returns the settled snapshot.
    pub async fn trigger(&self, params: R) -> QueryState<OutputOf<R>> {
        self.set_params(params.clone());
        self.run(params, FetchPolicy::CacheFirst).await
    }

    /// Re-execute the latest parameters against the network.
    ///
    /// Without parameters this does nothing and returns the idle snapshot.
    pub async fn refetch(&self) -> QueryState<OutputOf<R>> {
        match self.params() {
            Some(params) => self.run(params, FetchPolicy::NetworkOnly).await,
            None => self.state(),
        }
    }

    /// Publish the cached result of the latest parameters, if there is one,
    /// without touching the network.
    pub async fn sync_from_cache(&self) -> QueryState<OutputOf<R>> {
        let Some(params) = self.params() else {
            return self.state();
        };
        if let Some(data) = self.client.cache().read(&params).await {
            self.state.send_replace(QueryState::ready(data));
        }
        self.state()
    }

    async fn run(&self, params: R, policy: FetchPolicy) -> QueryState<OutputOf<R>> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state.send_modify(|state| {
            state.phase = Phase::Loading;
            state.error = None;
        });

        let next = match self.client.query(&params, policy).await {
            Ok(data) => QueryState::ready(data),
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(operation = R::OPERATION_NAME, error = %e, "query failed");
                QueryState::failed(e)
            }
        };

        // The check runs under the channel lock, so a newer trigger either
        // sees this result published before its own Loading or discards it.
        let published = self.state.send_if_modified(|state| {
            if self.generation.load(Ordering::SeqCst) == generation {
                *state = next.clone();
                true
            } else {
                false
            }
        });
        if published { next } else { self.state() }
    }
}

/// Snapshot of a write.
#[derive(Debug, Clone)]
pub struct MutationState<T> {
    /// A request is in flight
    pub loading: bool,
    /// Output of the last successful run
    pub data: Option<T>,
    /// Error of the last run, if it failed
    pub error: Option<Arc<ClientError>>,
}

impl<T> Default for MutationState<T> {
    fn default() -> Self {
        Self {
            loading: false,
            data: None,
            error: None,
        }
    }
}

/// Loading and error tracking for one write operation.
pub struct Mutation<R: GraphqlRequest> {
    state: watch::Sender<MutationState<OutputOf<R>>>,
}

impl<R: GraphqlRequest> Default for Mutation<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GraphqlRequest> Mutation<R> {
    /// Create an idle write handle.
    pub fn new() -> Self {
        Self {
            state: watch::Sender::new(MutationState::default()),
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> MutationState<OutputOf<R>> {
        self.state.borrow().clone()
    }

    /// Watch every state change.
    pub fn subscribe(&self) -> watch::Receiver<MutationState<OutputOf<R>>> {
        self.state.subscribe()
    }

    /// Track `fut` (the mutation itself) and record how it settles.
    pub async fn track<F>(&self, fut: F) -> Result<OutputOf<R>, Arc<ClientError>>
    where
        F: Future<Output = Result<OutputOf<R>, ClientError>>,
    {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
        match fut.await {
            Ok(output) => {
                self.state.send_replace(MutationState {
                    loading: false,
                    data: Some(output.clone()),
                    error: None,
                });
                Ok(output)
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(operation = R::OPERATION_NAME, error = %e, "mutation failed");
                let e = Arc::new(e);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.error = Some(e.clone());
                });
                Err(e)
            }
        }
    }
}
