//! # talent-store
//!
//! Document-store access layer for talentline.
//!
//! This crate provides:
//! - [`QueryClient`]: one predicate against one named collection, with
//!   store-side pagination drained into a single sequence
//! - [`QueryClientProvider`]: a memoizing per-(database, container) client
//!   registry over one shared store connection
//! - [`MemoryDocumentStore`]: the client-side-evaluated
//!   [`DocumentStore`](talent_core::DocumentStore) implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use talent_store::{MemoryDocumentStore, QueryClientProvider};
//! use talent_core::{JobOpening, QueryFilter};
//!
//! # async fn run() -> talent_core::Result<()> {
//! let store = Arc::new(MemoryDocumentStore::new());
//! let provider = QueryClientProvider::new(store);
//!
//! let client = provider.client("recruiting", "recruiting-core").await;
//! let openings = client
//!     .fetch::<JobOpening>(QueryFilter::typed::<JobOpening, _>(|jo| {
//!         jo.has_qualifying_participant("user-1")
//!     }))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod memory;
pub mod provider;

pub use client::QueryClient;
pub use memory::{MemoryDocumentStore, DEFAULT_PAGE_SIZE};
pub use provider::QueryClientProvider;
