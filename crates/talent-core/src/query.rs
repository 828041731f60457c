//! Query primitives shared between the store capability and its clients.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Identifies a (database, container) pair in the document store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionRef {
    pub database: String,
    pub container: String,
}

impl CollectionRef {
    pub fn new(database: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            container: container.into(),
        }
    }

    /// Registry key for this collection. Exact string match, case-sensitive,
    /// no normalization.
    pub fn key(&self) -> String {
        format!("{}-{}", self.container, self.database)
    }
}

impl fmt::Display for CollectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.database, self.container)
    }
}

/// A predicate over raw store documents.
///
/// Filters are evaluated client-side against the JSON form of each document.
/// Backends that translate predicates into a native filter syntax treat this
/// value as opaque and carry their own translation alongside it.
#[derive(Clone)]
pub struct QueryFilter {
    predicate: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
}

impl QueryFilter {
    /// Filter from a raw predicate over JSON documents.
    pub fn new(predicate: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Filter from a typed predicate over `T`.
    ///
    /// Documents that do not decode as `T` do not match. Collections hold
    /// several document kinds side by side, so a decode failure means "not
    /// this kind", not an error.
    pub fn typed<T, F>(predicate: F) -> Self
    where
        T: DeserializeOwned,
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::new(move |value| {
            serde_json::from_value::<T>(value.clone())
                .map(|entity| predicate(&entity))
                .unwrap_or(false)
        })
    }

    /// Evaluate the filter against one document.
    pub fn matches(&self, document: &Value) -> bool {
        (self.predicate)(document)
    }
}

impl fmt::Debug for QueryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("QueryFilter")
    }
}

/// Offset/limit window applied by the store before pagination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: usize,
    pub take: usize,
}

impl PageWindow {
    pub fn new(skip: usize, take: usize) -> Self {
        Self { skip, take }
    }
}

/// One query as handed to the store capability.
///
/// A request without a filter is rejected at the client boundary; the field
/// is optional so that boundary has something to reject.
#[derive(Debug, Clone, Default)]
pub struct QueryRequest {
    pub filter: Option<QueryFilter>,
    pub window: Option<PageWindow>,
}

impl QueryRequest {
    pub fn filtered(filter: QueryFilter) -> Self {
        Self {
            filter: Some(filter),
            window: None,
        }
    }

    pub fn with_window(mut self, skip: usize, take: usize) -> Self {
        self.window = Some(PageWindow::new(skip, take));
        self
    }
}

/// Opaque continuation token handed back by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(pub String);

/// One page of query results.
#[derive(Debug, Clone)]
pub struct QueryPage {
    pub documents: Vec<Value>,
    /// Present while more pages remain.
    pub continuation: Option<PageToken>,
}
