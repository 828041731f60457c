//! In-memory document store.
//!
//! The client-side-evaluated store capability: filters run against the JSON
//! form of each document, windows apply after filtering, and pagination is
//! by offset-encoded continuation tokens. This is the backend the test
//! suites run against, and the reference for what a translating driver must
//! observably do.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use talent_core::{
    CollectionRef, DocumentStore, Error, PageToken, QueryPage, QueryRequest, Result,
};

/// Default number of documents per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// In-memory [`DocumentStore`] keyed by [`CollectionRef::key`].
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
    page_size: usize,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: RwLock::new(HashMap::new()),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set how many documents the store returns per page.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Register an empty collection under `key` (see [`CollectionRef::key`]).
    ///
    /// Queries against unregistered collections report the collection as
    /// absent rather than empty.
    pub fn create_collection(&self, key: impl Into<String>) {
        self.collections
            .write()
            .expect("collection map poisoned")
            .entry(key.into())
            .or_default();
    }

    /// Append one document to a collection, registering it if needed.
    pub fn insert<T: Serialize>(&self, key: impl Into<String>, document: &T) -> Result<()> {
        let value = serde_json::to_value(document)?;
        self.collections
            .write()
            .expect("collection map poisoned")
            .entry(key.into())
            .or_default()
            .push(value);
        Ok(())
    }

    /// Append a batch of documents to a collection, registering it if needed.
    pub fn insert_many<T: Serialize>(
        &self,
        key: impl Into<String>,
        documents: impl IntoIterator<Item = T>,
    ) -> Result<()> {
        let values = documents
            .into_iter()
            .map(|document| serde_json::to_value(&document).map_err(Error::from))
            .collect::<Result<Vec<_>>>()?;
        self.collections
            .write()
            .expect("collection map poisoned")
            .entry(key.into())
            .or_default()
            .extend(values);
        Ok(())
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn execute_query(
        &self,
        collection: &CollectionRef,
        request: &QueryRequest,
        continuation: Option<&PageToken>,
    ) -> Result<Option<QueryPage>> {
        let matched: Vec<Value> = {
            let collections = self.collections.read().expect("collection map poisoned");
            let Some(documents) = collections.get(&collection.key()) else {
                return Ok(None);
            };

            let filtered = documents
                .iter()
                .filter(|document| {
                    request
                        .filter
                        .as_ref()
                        .map(|filter| filter.matches(document))
                        .unwrap_or(true)
                })
                .cloned();

            match request.window {
                Some(window) => filtered.skip(window.skip).take(window.take).collect(),
                None => filtered.collect(),
            }
        };

        let offset = match continuation {
            Some(token) => token.0.parse::<usize>().map_err(|_| {
                Error::Internal(format!("invalid continuation token: {}", token.0))
            })?,
            None => 0,
        };

        let end = (offset + self.page_size).min(matched.len());
        let page = matched[offset.min(matched.len())..end].to_vec();
        let next = (end < matched.len()).then(|| PageToken(end.to_string()));

        Ok(Some(QueryPage {
            documents: page,
            continuation: next,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use talent_core::QueryFilter;

    fn collection() -> CollectionRef {
        CollectionRef::new("db", "docs")
    }

    #[tokio::test]
    async fn test_unregistered_collection_is_absent() {
        let store = MemoryDocumentStore::new();
        let page = store
            .execute_query(&collection(), &QueryRequest::default(), None)
            .await
            .unwrap();
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn test_pagination_terminates() {
        let store = MemoryDocumentStore::new().with_page_size(2);
        store
            .insert_many(collection().key(), (0..5).map(|n| json!({ "n": n })))
            .unwrap();

        let mut token = None;
        let mut seen = 0;
        let mut pages = 0;
        loop {
            let page = store
                .execute_query(&collection(), &QueryRequest::default(), token.as_ref())
                .await
                .unwrap()
                .unwrap();
            seen += page.documents.len();
            pages += 1;
            match page.continuation {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        assert_eq!(seen, 5);
        assert_eq!(pages, 3);
    }

    #[tokio::test]
    async fn test_filter_applies_before_window() {
        let store = MemoryDocumentStore::new();
        store
            .insert_many(collection().key(), (0..10).map(|n| json!({ "n": n })))
            .unwrap();

        let request = QueryRequest::filtered(QueryFilter::new(|v| {
            v["n"].as_u64().is_some_and(|n| n % 2 == 0)
        }))
        .with_window(1, 2);

        let page = store
            .execute_query(&collection(), &request, None)
            .await
            .unwrap()
            .unwrap();

        // Evens are 0,2,4,6,8; skip 1 take 2 leaves 2 and 4
        let ns: Vec<u64> = page
            .documents
            .iter()
            .map(|d| d["n"].as_u64().unwrap())
            .collect();
        assert_eq!(ns, vec![2, 4]);
        assert!(page.continuation.is_none());
    }
}
