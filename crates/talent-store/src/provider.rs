//! Per-(database, container) query-client registry.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use talent_core::{CollectionRef, DocumentStore};

use crate::client::QueryClient;

/// Memoizing registry of [`QueryClient`]s.
///
/// The underlying store connection is supplied once at construction and
/// shared by every client. Clients are created on first request for a
/// (database, container) key and live for the registry's lifetime; there is
/// no eviction. The registry is an explicit object: construct it at process
/// start and pass the handle to consumers.
pub struct QueryClientProvider {
    store: Arc<dyn DocumentStore>,
    clients: RwLock<HashMap<String, Arc<QueryClient>>>,
}

impl QueryClientProvider {
    /// Create a registry over a shared store connection.
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Get or create the client for a (database, container) pair.
    ///
    /// Keys are exact strings; concurrent first requests for one key settle
    /// on a single client. The write lock covers the check-then-insert, so
    /// losers of the race observe the winner's client instead of replacing
    /// it.
    pub async fn client(&self, database: &str, container: &str) -> Arc<QueryClient> {
        let collection = CollectionRef::new(database, container);
        let key = collection.key();

        if let Some(client) = self.clients.read().await.get(&key) {
            return Arc::clone(client);
        }

        let mut clients = self.clients.write().await;
        Arc::clone(clients.entry(key.clone()).or_insert_with(|| {
            debug!(
                subsystem = "store",
                component = "provider",
                op = "create_client",
                %key,
                "Creating query client"
            );
            Arc::new(QueryClient::new(Arc::clone(&self.store), collection))
        }))
    }

    /// Number of clients created so far.
    pub async fn client_count(&self) -> usize {
        self.clients.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocumentStore;

    fn provider() -> Arc<QueryClientProvider> {
        Arc::new(QueryClientProvider::new(Arc::new(
            MemoryDocumentStore::new(),
        )))
    }

    #[tokio::test]
    async fn test_same_key_returns_same_instance() {
        let provider = provider();
        let first = provider.client("recruiting", "recruiting-core").await;
        let second = provider.client("recruiting", "recruiting-core").await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(provider.client_count().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_keys_get_distinct_clients() {
        let provider = provider();
        let core = provider.client("recruiting", "recruiting-core").await;
        let schedules = provider.client("recruiting", "interview-schedules").await;

        assert!(!Arc::ptr_eq(&core, &schedules));
        assert_eq!(provider.client_count().await, 2);
    }

    #[tokio::test]
    async fn test_keys_are_case_sensitive() {
        let provider = provider();
        let lower = provider.client("recruiting", "core").await;
        let upper = provider.client("Recruiting", "core").await;

        assert!(!Arc::ptr_eq(&lower, &upper));
    }

    #[tokio::test]
    async fn test_concurrent_first_access_creates_one_client() {
        let provider = provider();

        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..16 {
            let provider = Arc::clone(&provider);
            tasks.spawn(async move { provider.client("recruiting", "recruiting-core").await });
        }

        let mut clients = Vec::new();
        while let Some(client) = tasks.join_next().await {
            clients.push(client.unwrap());
        }

        assert_eq!(clients.len(), 16);
        assert!(clients.iter().all(|c| Arc::ptr_eq(c, &clients[0])));
        assert_eq!(provider.client_count().await, 1);
    }
}
