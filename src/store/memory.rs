use super::{Document, DocumentStore};
use crate::core::{DocPath, FieldMap, Result, StoreError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process document backend.
///
/// Documents live in a single map keyed by their normalized path. The write
/// lock makes each document write atomic with respect to concurrent
/// requests; there is no cross-document transaction.
#[derive(Default)]
pub struct MemoryStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a resolved path into a storage key.
    ///
    /// Collection paths are always `collection/document`. A raw path must
    /// still address a document: an even number of non-empty segments.
    fn storage_key(path: &DocPath) -> Result<String> {
        match path {
            DocPath::Collection {
                collection,
                document,
            } => {
                if collection.is_empty() || document.is_empty() {
                    return Err(StoreError::InvalidPath(
                        path.to_string(),
                        "empty collection or document segment".to_string(),
                    ));
                }
                Ok(format!("{collection}/{document}"))
            }
            DocPath::Raw(raw) => {
                let segments: Vec<&str> = raw.split('/').collect();
                if segments.iter().any(|segment| segment.is_empty()) {
                    return Err(StoreError::InvalidPath(
                        raw.clone(),
                        "empty path segment".to_string(),
                    ));
                }
                if segments.len() % 2 != 0 {
                    return Err(StoreError::InvalidPath(
                        raw.clone(),
                        "document paths need an even number of segments".to_string(),
                    ));
                }
                Ok(raw.clone())
            }
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn set_merge(&self, path: &DocPath, fields: FieldMap) -> Result<()> {
        let key = Self::storage_key(path)?;
        // Server timestamps resolve to the commit instant, not request time.
        let now = Utc::now();

        let mut documents = self.documents.write().await;
        let document = documents.entry(key).or_default();
        for (name, value) in fields {
            document.insert(name, value.resolve(now));
        }
        Ok(())
    }

    async fn get(&self, path: &DocPath) -> Result<Option<Document>> {
        let key = Self::storage_key(path)?;
        let documents = self.documents.read().await;
        Ok(documents.get(&key).cloned())
    }
}
