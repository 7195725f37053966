//! Document store seam.
//!
//! The web layer only ever talks to `DocumentStore`; `MemoryStore` is the
//! in-process backend shipped with the crate.

mod memory;

pub use memory::MemoryStore;

use crate::core::{DocPath, FieldMap, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// A persisted document snapshot.
pub type Document = Map<String, Value>;

/// Backend seam for merge-semantics document writes.
///
/// A merge write overwrites the named fields, preserves every other field
/// already on the document, and creates the document when it is absent.
/// Each single-document write is durable and atomic from the caller's view.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Merge-write `fields` into the document addressed by `path`.
    async fn set_merge(&self, path: &DocPath, fields: FieldMap) -> Result<()>;

    /// Fetch a snapshot of the document addressed by `path`.
    async fn get(&self, path: &DocPath) -> Result<Option<Document>>;
}
