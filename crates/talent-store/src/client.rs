//! Query client: one collection, one predicate, fully drained results.

use std::sync::Arc;
use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use talent_core::{
    CollectionRef, DocumentStore, Error, QueryFilter, QueryRequest, Result,
};

/// Executes predicates against one named collection, draining store-side
/// pagination into a single ordered sequence.
///
/// The store's own ordering is preserved; no re-sorting happens here. Reads
/// only; retry policy, if any, belongs to the store capability beneath.
pub struct QueryClient {
    store: Arc<dyn DocumentStore>,
    collection: CollectionRef,
}

impl QueryClient {
    /// Create a client bound to one (database, container) pair over a shared
    /// store connection.
    pub fn new(store: Arc<dyn DocumentStore>, collection: CollectionRef) -> Self {
        Self { store, collection }
    }

    /// The collection this client is bound to.
    pub fn collection(&self) -> &CollectionRef {
        &self.collection
    }

    /// Execute a request and drain every page.
    ///
    /// `Ok(None)` mirrors the store's "no such collection" signal. Any page
    /// failure fails the whole call; pages accumulated before the failure
    /// are discarded.
    pub async fn execute(&self, request: QueryRequest) -> Result<Option<Vec<Value>>> {
        if request.filter.is_none() {
            return Err(Error::InvalidQuery(format!(
                "query against {} has no predicate",
                self.collection
            )));
        }

        let start = Instant::now();
        let mut documents = Vec::new();
        let mut continuation = None;
        let mut page_count = 0u32;

        loop {
            let page = self
                .store
                .execute_query(&self.collection, &request, continuation.as_ref())
                .await?;

            let Some(page) = page else {
                return Ok(None);
            };

            page_count += 1;
            documents.extend(page.documents);

            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        debug!(
            subsystem = "store",
            component = "query_client",
            op = "execute",
            collection = %self.collection,
            page_count,
            result_count = documents.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Query drained"
        );

        Ok(Some(documents))
    }

    /// Fetch every matching record, across however many pages the store
    /// chooses to return.
    pub async fn fetch<T>(&self, filter: QueryFilter) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let documents = self.execute(QueryRequest::filtered(filter)).await?;
        documents.map(decode).transpose()
    }

    /// Fetch matching records through an offset/limit window, then drain as
    /// in [`fetch`](Self::fetch).
    pub async fn fetch_window<T>(
        &self,
        filter: QueryFilter,
        skip: usize,
        take: usize,
    ) -> Result<Option<Vec<T>>>
    where
        T: DeserializeOwned,
    {
        let documents = self
            .execute(QueryRequest::filtered(filter).with_window(skip, take))
            .await?;
        documents.map(decode).transpose()
    }

    /// First matching record, or `None`. Zero matches is not an error, and
    /// an absent collection flattens to `None` as well.
    pub async fn first<T>(&self, filter: QueryFilter) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let records = self.fetch::<T>(filter).await?;
        Ok(records.and_then(|records| records.into_iter().next()))
    }
}

fn decode<T: DeserializeOwned>(documents: Vec<Value>) -> Result<Vec<T>> {
    documents
        .into_iter()
        .map(|document| serde_json::from_value(document).map_err(Error::from))
        .collect()
}
