// ============================================================================
// SiteSeed Library
// ============================================================================

pub mod core;
pub mod seed;
pub mod store;
pub mod web;

// Re-export main types for convenience
pub use self::core::{DocPath, FieldMap, FieldValue, Result, StoreError};
pub use self::store::{Document, DocumentStore, MemoryStore};
