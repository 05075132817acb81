//! In-memory query cache keyed by operation + variables.

use crate::graphql::{EncodeError, GraphqlRequest, GraphqlResp};
use miette::Diagnostic;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Output type of a request's response marker.
pub type OutputOf<R> = <<R as GraphqlRequest>::Response as GraphqlResp>::Output;

/// Errors emitted by the query cache.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum CacheError {
    /// Variables could not be turned into a key
    #[error("failed to build cache key: {0}")]
    #[diagnostic(code(modscope::cache::key))]
    Key(#[from] EncodeError),
    /// Serialization error converting to/from the stored JSON
    #[error("serialization error: {0}")]
    #[diagnostic(code(modscope::cache::serde))]
    Serde(#[from] serde_json::Error),
}

/// Identity of a cached result: operation name plus canonical variables JSON.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Operation name
    pub operation: &'static str,
    /// Variables serialized with sorted keys
    pub variables: String,
}

impl CacheKey {
    /// Build the key for a request.
    pub fn of<R: GraphqlRequest>(request: &R) -> Result<Self, EncodeError> {
        // serde_json's Value map is ordered, so this string is canonical
        let variables = request.variables()?.to_string();
        Ok(Self {
            operation: R::OPERATION_NAME,
            variables,
        })
    }
}

/// Shared in-memory cache of query results.
///
/// Cloning is cheap and yields a handle to the same storage. Every entry
/// change happens under one write-lock acquisition with no suspension point
/// inside it, so a read-modify-write is atomic with respect to other tasks.
#[derive(Clone, Default)]
pub struct QueryCache(Arc<RwLock<HashMap<CacheKey, serde_json::Value>>>);

impl std::fmt::Debug for QueryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache").finish_non_exhaustive()
    }
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the cached output for a request, if present and still decodable.
    pub async fn read<R: GraphqlRequest>(&self, request: &R) -> Option<OutputOf<R>> {
        let key = CacheKey::of(request).ok()?;
        let value = self.0.read().await.get(&key).cloned()?;
        serde_json::from_value(value).ok()
    }

    /// Store (or overwrite) the output for a request.
    pub async fn write<R: GraphqlRequest>(
        &self,
        request: &R,
        output: &OutputOf<R>,
    ) -> Result<(), CacheError> {
        let key = CacheKey::of(request)?;
        let value = serde_json::to_value(output)?;
        self.0.write().await.insert(key, value);
        Ok(())
    }

    /// Patch the cached output for a request in place.
    ///
    /// Returns `Ok(false)` without calling `f` when nothing is cached for the
    /// request; a write never fabricates a read result that was not fetched.
    pub async fn update<R, F>(&self, request: &R, f: F) -> Result<bool, CacheError>
    where
        R: GraphqlRequest,
        F: FnOnce(&mut OutputOf<R>),
    {
        let key = CacheKey::of(request)?;
        let mut entries = self.0.write().await;
        let Some(slot) = entries.get_mut(&key) else {
            return Ok(false);
        };
        let mut output: OutputOf<R> = serde_json::from_value(slot.clone())?;
        f(&mut output);
        *slot = serde_json::to_value(&output)?;
        Ok(true)
    }

    /// Drop every cached result for an operation, whatever its variables.
    pub async fn evict_operation(&self, operation: &str) -> usize {
        let mut entries = self.0.write().await;
        let before = entries.len();
        entries.retain(|key, _| key.operation != operation);
        before - entries.len()
    }

    /// Number of cached results.
    pub async fn len(&self) -> usize {
        self.0.read().await.len()
    }

    /// Whether the cache holds nothing.
    pub async fn is_empty(&self) -> bool {
        self.0.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::OperationKind;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Debug, Clone)]
    struct ListWords {
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i64>,
    }

    #[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
    struct ListWordsOutput {
        words: Option<Vec<String>>,
    }

    struct ListWordsResponse;

    impl GraphqlResp for ListWordsResponse {
        const OPERATION_NAME: &'static str = "ListWords";
        type Output = ListWordsOutput;
    }

    impl GraphqlRequest for ListWords {
        const OPERATION_NAME: &'static str = "ListWords";
        const KIND: OperationKind = OperationKind::Query;
        const DOCUMENT: &'static str = "query ListWords($limit: Int) { words(limit: $limit) }";
        type Response = ListWordsResponse;
    }

    fn words(items: &[&str]) -> ListWordsOutput {
        ListWordsOutput {
            words: Some(items.iter().map(|s| s.to_string()).collect()),
        }
    }

    #[tokio::test]
    async fn entries_are_keyed_by_variables() {
        let cache = QueryCache::new();
        cache
            .write(&ListWords { limit: Some(1) }, &words(&["a"]))
            .await
            .unwrap();
        cache
            .write(&ListWords { limit: Some(2) }, &words(&["a", "b"]))
            .await
            .unwrap();

        assert_eq!(cache.len().await, 2);
        assert_eq!(
            cache.read(&ListWords { limit: Some(2) }).await,
            Some(words(&["a", "b"]))
        );
        assert_eq!(cache.read(&ListWords { limit: None }).await, None);
    }

    #[tokio::test]
    async fn update_patches_existing_entry_only() {
        let cache = QueryCache::new();
        let req = ListWords { limit: None };

        let patched = cache
            .update(&req, |out| out.words.get_or_insert_with(Vec::new).push("x".into()))
            .await
            .unwrap();
        assert!(!patched);
        assert!(cache.is_empty().await);

        cache.write(&req, &words(&["a"])).await.unwrap();
        let patched = cache
            .update(&req, |out| out.words.get_or_insert_with(Vec::new).push("x".into()))
            .await
            .unwrap();
        assert!(patched);
        assert_eq!(cache.read(&req).await, Some(words(&["a", "x"])));
    }

    #[tokio::test]
    async fn evict_by_operation() {
        let cache = QueryCache::new();
        cache
            .write(&ListWords { limit: Some(1) }, &words(&[]))
            .await
            .unwrap();
        cache
            .write(&ListWords { limit: None }, &words(&[]))
            .await
            .unwrap();
        assert_eq!(cache.evict_operation("ListWords").await, 2);
        assert!(cache.is_empty().await);
    }
}
